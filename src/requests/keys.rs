//! 请求键注册表
//!
//! 枚举所有可追踪的逻辑操作。每个键同一时刻至多对应一条生命周期记录。

/// 请求键
///
/// 注意：fetch_submission_response 动作本身不走追踪（见 thunks），
/// 但键仍然保留，供调用方自行挂接状态时使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKey {
    /// 应用初始化（拉取评估元数据 + 提交列表）
    Initialize,
    /// 拉取单个提交
    FetchSubmission,
    /// 拉取提交状态
    FetchSubmissionStatus,
    /// 拉取提交的作答内容
    FetchSubmissionResponse,
    /// 设置 / 释放评分锁
    SetLock,
    /// 提交成绩
    SubmitGrade,
}

impl RequestKey {
    /// 全部请求键
    pub const ALL: [RequestKey; 6] = [
        RequestKey::Initialize,
        RequestKey::FetchSubmission,
        RequestKey::FetchSubmissionStatus,
        RequestKey::FetchSubmissionResponse,
        RequestKey::SetLock,
        RequestKey::SubmitGrade,
    ];

    /// 获取稳定的键名（用于日志）
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKey::Initialize => "initialize",
            RequestKey::FetchSubmission => "fetchSubmission",
            RequestKey::FetchSubmissionStatus => "fetchSubmissionStatus",
            RequestKey::FetchSubmissionResponse => "fetchSubmissionResponse",
            RequestKey::SetLock => "setLock",
            RequestKey::SubmitGrade => "submitGrade",
        }
    }
}

impl std::fmt::Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
