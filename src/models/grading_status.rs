/// 评分状态枚举
///
/// 封闭集合：LMS 返回的 gradingStatus 必须是其中之一，
/// 出现未知值属于数据契约违约（反序列化直接失败），不是合法状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GradingStatus {
    /// 未评分
    #[serde(rename = "ungraded")]
    Ungraded,
    /// 被其他评分人锁定
    #[serde(rename = "locked")]
    Locked,
    /// 已评分
    #[serde(rename = "graded")]
    Graded,
    /// 本人评分中
    #[serde(rename = "in-progress")]
    InProgress,
}

impl GradingStatus {
    /// 全部状态（用于状态筛选的候选列表）
    pub const ALL: [GradingStatus; 4] = [
        GradingStatus::Ungraded,
        GradingStatus::Locked,
        GradingStatus::Graded,
        GradingStatus::InProgress,
    ];

    /// 获取线上格式的状态值
    pub fn as_str(self) -> &'static str {
        match self {
            GradingStatus::Ungraded => "ungraded",
            GradingStatus::Locked => "locked",
            GradingStatus::Graded => "graded",
            GradingStatus::InProgress => "in-progress",
        }
    }

    /// 从线上格式解析状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ungraded" => Some(GradingStatus::Ungraded),
            "locked" => Some(GradingStatus::Locked),
            "graded" => Some(GradingStatus::Graded),
            "in-progress" => Some(GradingStatus::InProgress),
            _ => None,
        }
    }

    /// 获取界面展示文案
    pub fn label(self) -> &'static str {
        match self {
            GradingStatus::Ungraded => "Ungraded",
            GradingStatus::Locked => "Currently being graded",
            GradingStatus::Graded => "Graded",
            GradingStatus::InProgress => "Grading in progress",
        }
    }
}
