//! 应用状态容器
//!
//! 请求状态表、提交列表和评审选择都由这个显式持有的对象管理，
//! 通过 Arc 传给需要读写的层，不存在隐藏的模块级全局状态。
//! 所有写入都经过定义好的方法，观察方只做克隆读取。

use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::models::SubmissionRecord;
use crate::requests::RequestTracker;

/// 评审选择状态
///
/// 记录"当前正在评哪一批提交、评到第几个"
#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    /// 选中的提交 UUID 列表
    pub selection: Vec<String>,
    /// 当前活跃提交在选择中的下标
    pub active_index: usize,
    /// 当前活跃提交的详情（fetchSubmission 的响应）
    pub current: Option<JsonValue>,
}

/// 应用状态容器
pub struct Store {
    requests: RequestTracker,
    submissions: Mutex<Vec<SubmissionRecord>>,
    is_individual: AtomicBool,
    review: Mutex<ReviewState>,
}

impl Store {
    /// 创建空的状态容器
    pub fn new() -> Self {
        Self {
            requests: RequestTracker::new(),
            submissions: Mutex::new(Vec::new()),
            is_individual: AtomicBool::new(true),
            review: Mutex::new(ReviewState::default()),
        }
    }

    /// 获取请求生命周期追踪器
    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }

    // ========== 提交列表 ==========

    /// 写入提交列表（initialize 成功后调用）
    pub fn set_submissions(&self, submissions: Vec<SubmissionRecord>) {
        *self.submissions.lock().expect("提交列表锁中毒") = submissions;
    }

    /// 读取提交列表
    pub fn submissions(&self) -> Vec<SubmissionRecord> {
        self.submissions.lock().expect("提交列表锁中毒").clone()
    }

    /// 写入评估类型标记
    pub fn set_is_individual(&self, value: bool) {
        self.is_individual.store(value, Ordering::Relaxed);
    }

    /// 是否是个人型评估
    pub fn is_individual(&self) -> bool {
        self.is_individual.load(Ordering::Relaxed)
    }

    // ========== 评审选择 ==========

    /// 更新评审选择，活跃下标回到 0
    pub fn update_selection(&self, submission_uuids: Vec<String>) {
        let mut review = self.review.lock().expect("评审状态锁中毒");
        review.selection = submission_uuids;
        review.active_index = 0;
        review.current = None;
    }

    /// 读取评审选择状态
    pub fn review(&self) -> ReviewState {
        self.review.lock().expect("评审状态锁中毒").clone()
    }

    /// 当前活跃提交的 UUID
    pub fn active_submission_id(&self) -> Option<String> {
        let review = self.review.lock().expect("评审状态锁中毒");
        review.selection.get(review.active_index).cloned()
    }

    /// 记录当前活跃提交的详情
    pub fn set_current_review(&self, payload: JsonValue) {
        self.review.lock().expect("评审状态锁中毒").current = Some(payload);
    }

    /// 活跃下标后移一位，越界时保持不动
    ///
    /// # 返回
    /// 返回是否发生了移动
    pub fn advance_selection(&self) -> bool {
        let mut review = self.review.lock().expect("评审状态锁中毒");
        if review.active_index + 1 < review.selection.len() {
            review.active_index += 1;
            review.current = None;
            true
        } else {
            false
        }
    }

    /// 活跃下标前移一位，越界时保持不动
    ///
    /// # 返回
    /// 返回是否发生了移动
    pub fn retreat_selection(&self) -> bool {
        let mut review = self.review.lock().expect("评审状态锁中毒");
        if review.active_index > 0 {
            review.active_index -= 1;
            review.current = None;
            true
        } else {
            false
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
