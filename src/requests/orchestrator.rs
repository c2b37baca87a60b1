//! 请求编排器
//!
//! 包装一次返回 JSON 的网络调用：先在追踪器里记 start，
//! 落地后记 complete / fail 并调用对应回调。
//! 错误在这一层终结——不重抛、不冒泡，调用方只能通过
//! 追踪状态或 on_failure 观察失败。

use serde_json::Value as JsonValue;
use std::future::Future;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::requests::{RequestKey, RequestTracker};

/// 成功回调
pub type SuccessHandler = Box<dyn FnOnce(&JsonValue) + Send>;

/// 失败回调
pub type FailureHandler = Box<dyn FnOnce(&ApiError) + Send>;

/// 请求回调参数
///
/// 每个 thunk 显式接收这一组可选回调，不走隐式字段透传。
#[derive(Default)]
pub struct RequestCallbacks {
    /// 成功时调用，参数为原始响应
    pub on_success: Option<SuccessHandler>,
    /// 失败时调用，参数为结构化错误
    pub on_failure: Option<FailureHandler>,
}

impl RequestCallbacks {
    /// 只关心成功结果
    pub fn on_success(handler: impl FnOnce(&JsonValue) + Send + 'static) -> Self {
        Self {
            on_success: Some(Box::new(handler)),
            on_failure: None,
        }
    }

    /// 只关心失败结果
    pub fn on_failure(handler: impl FnOnce(&ApiError) + Send + 'static) -> Self {
        Self {
            on_success: None,
            on_failure: Some(Box::new(handler)),
        }
    }
}

/// 执行一次被追踪的网络调用
///
/// 传入 key 时：先同步记 start（在第一个 await 之前），
/// 落地后记 complete / fail，再调用对应回调。
/// 不传 key 时：跳过追踪，但仍然等待调用完成并触发回调
/// （作答内容的拉取就走这条路，状态由调用方自己挂接）。
///
/// # 参数
/// - `tracker`: 请求生命周期追踪器
/// - `request_key`: 可选的请求键
/// - `promise`: 网络调用 future
/// - `callbacks`: 可选的成功 / 失败回调
pub async fn network_request<F>(
    tracker: &RequestTracker,
    request_key: Option<RequestKey>,
    promise: F,
    callbacks: RequestCallbacks,
) where
    F: Future<Output = Result<JsonValue, ApiError>>,
{
    if let Some(key) = request_key {
        debug!("[{}] 请求开始", key);
        tracker.start(key);
    }

    match promise.await {
        Ok(response) => {
            if let Some(key) = request_key {
                debug!("[{}] 请求成功", key);
                tracker.complete(key, response.clone());
            }
            if let Some(on_success) = callbacks.on_success {
                on_success(&response);
            }
        }
        Err(error) => {
            match request_key {
                Some(key) => {
                    warn!("[{}] 请求失败: {}", key, error);
                    tracker.fail(key, error.clone());
                }
                None => warn!("未追踪的请求失败: {}", error),
            }
            if let Some(on_failure) = callbacks.on_failure {
                on_failure(&error);
            }
        }
    }
}
