//! 请求生命周期追踪器
//!
//! 按 RequestKey 记录每个逻辑操作的 Pending / Succeeded / Failed 状态，
//! 以及最近一次响应或错误。状态表由 Store 显式持有并按引用传入，
//! 不存在模块级单例。
//!
//! 状态机（每个键独立）：
//!
//! ```text
//! NotStarted → Pending → (Succeeded | Failed)
//! ```
//!
//! 任何状态下再次 start 都会重新进入 Pending（覆盖语义）。
//! 同键并发时没有排队也没有取消：先发起的调用如果后落地，
//! 会把终态覆盖成自己的结果（"最后落地者赢"）。需要"最新者赢"
//! 语义的调用方必须在本层之外自带请求代数。

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::ApiError;
use crate::requests::RequestKey;

/// 请求状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// 尚未发起
    #[default]
    NotStarted,
    /// 进行中
    Pending,
    /// 成功
    Succeeded,
    /// 失败
    Failed,
}

/// 单个请求键的生命周期记录
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    /// 当前状态
    pub status: RequestStatus,
    /// 最近一次成功响应
    pub last_response: Option<JsonValue>,
    /// 最近一次失败错误
    pub last_error: Option<ApiError>,
}

/// 请求生命周期追踪器
///
/// 职责：
/// - 维护 RequestKey → RequestState 的状态表
/// - 只通过 start / complete / fail 三个转移写入
/// - 读取永不消耗状态
pub struct RequestTracker {
    states: Mutex<HashMap<RequestKey, RequestState>>,
}

impl RequestTracker {
    /// 创建空的追踪器
    pub fn new() -> Self {
        Self {
            states: Mutex::new(HashMap::new()),
        }
    }

    // ========== 生命周期转移 ==========

    /// 标记请求开始
    ///
    /// 无论之前处于什么状态都进入 Pending，并清掉旧的响应和错误。
    /// 同键上一个仍在途的调用不会被取消，只是不再被追踪。
    pub fn start(&self, key: RequestKey) {
        let mut states = self.states.lock().expect("请求状态表锁中毒");
        states.insert(
            key,
            RequestState {
                status: RequestStatus::Pending,
                last_response: None,
                last_error: None,
            },
        );
    }

    /// 标记请求成功
    pub fn complete(&self, key: RequestKey, response: JsonValue) {
        let mut states = self.states.lock().expect("请求状态表锁中毒");
        states.insert(
            key,
            RequestState {
                status: RequestStatus::Succeeded,
                last_response: Some(response),
                last_error: None,
            },
        );
    }

    /// 标记请求失败
    pub fn fail(&self, key: RequestKey, error: ApiError) {
        let mut states = self.states.lock().expect("请求状态表锁中毒");
        states.insert(
            key,
            RequestState {
                status: RequestStatus::Failed,
                last_response: None,
                last_error: Some(error),
            },
        );
    }

    /// 重置为未发起（关闭评分窗口时使用）
    pub fn clear(&self, key: RequestKey) {
        let mut states = self.states.lock().expect("请求状态表锁中毒");
        states.remove(&key);
    }

    // ========== 读取 ==========

    /// 获取某个键的完整生命周期记录（从未发起时返回 NotStarted 默认值）
    pub fn state(&self, key: RequestKey) -> RequestState {
        let states = self.states.lock().expect("请求状态表锁中毒");
        states.get(&key).cloned().unwrap_or_default()
    }

    /// 获取某个键的当前状态
    pub fn status(&self, key: RequestKey) -> RequestStatus {
        self.state(key).status
    }

    /// 是否进行中
    pub fn is_pending(&self, key: RequestKey) -> bool {
        self.status(key) == RequestStatus::Pending
    }

    /// 是否已成功
    pub fn is_completed(&self, key: RequestKey) -> bool {
        self.status(key) == RequestStatus::Succeeded
    }

    /// 是否已失败
    pub fn is_failed(&self, key: RequestKey) -> bool {
        self.status(key) == RequestStatus::Failed
    }

    /// 获取最近一次错误的 HTTP 状态码
    pub fn error_status(&self, key: RequestKey) -> Option<u16> {
        self.state(key).last_error.and_then(|e| e.status)
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}
