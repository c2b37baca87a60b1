//! 列定义
//!
//! 列集合是固定的四列。身份列取 username 还是 teamName、
//! 提交时间列的表头文案，都由 isIndividual 决定。

use chrono::{DateTime, Local, Utc};

use crate::models::{Score, SubmissionRecord};
use crate::table::StatusBadge;

/// 表格列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionColumn {
    /// 身份（用户名或团队名）
    Identity,
    /// 提交时间
    DateSubmitted,
    /// 成绩
    Grade,
    /// 评分状态
    GradingStatus,
}

impl SubmissionColumn {
    /// 全部列（渲染顺序）
    pub const ALL: [SubmissionColumn; 4] = [
        SubmissionColumn::Identity,
        SubmissionColumn::DateSubmitted,
        SubmissionColumn::Grade,
        SubmissionColumn::GradingStatus,
    ];

    /// 获取表头文案
    pub fn label(self, is_individual: bool) -> &'static str {
        match self {
            SubmissionColumn::Identity => {
                if is_individual {
                    "Username"
                } else {
                    "Team name"
                }
            }
            SubmissionColumn::DateSubmitted => {
                if is_individual {
                    "Learner submission date"
                } else {
                    "Team submission date"
                }
            }
            SubmissionColumn::Grade => "Grade",
            SubmissionColumn::GradingStatus => "Grading status",
        }
    }

    /// 是否支持文本筛选
    ///
    /// 身份列走文本筛选；状态列走多选筛选（见视图状态）；
    /// 提交时间和成绩列明确关闭筛选。
    pub fn text_filterable(self) -> bool {
        matches!(self, SubmissionColumn::Identity)
    }
}

/// 获取身份列的取值
pub fn identity_value(record: &SubmissionRecord, is_individual: bool) -> &str {
    let value = if is_individual {
        record.username.as_deref()
    } else {
        record.team_name.as_deref()
    };
    value.unwrap_or("")
}

/// 格式化提交时间（转本地时区展示）
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

/// 格式化成绩：`earned/possible`，没有得分时显示占位符
pub fn format_grade(score: Option<&Score>) -> String {
    match score {
        Some(score) => format!("{}/{}", score.points_earned, score.points_possible),
        None => "-".to_string(),
    }
}

/// 获取某一列格式化后的单元格内容
pub fn cell_value(record: &SubmissionRecord, column: SubmissionColumn, is_individual: bool) -> String {
    match column {
        SubmissionColumn::Identity => identity_value(record, is_individual).to_string(),
        SubmissionColumn::DateSubmitted => format_date(&record.date_submitted),
        SubmissionColumn::Grade => format_grade(record.score.as_ref()),
        SubmissionColumn::GradingStatus => StatusBadge::new(record.grading_status).label().to_string(),
    }
}
