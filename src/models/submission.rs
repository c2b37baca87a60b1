//! 提交记录数据模型
//!
//! 提交列表由 initialize 响应一次性下发，表格层将其视为只读输入。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::models::GradingStatus;

/// 得分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// 已得分数
    pub points_earned: u32,
    /// 总分
    pub points_possible: u32,
}

/// 提交记录
///
/// 个人提交填 username，团队提交填 team_name，由 isIndividual 决定取哪个
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// 提交 UUID
    #[serde(rename = "submissionUUID")]
    pub submission_uuid: String,
    /// 学员用户名（个人提交）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 团队名称（团队提交）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    /// 提交时间
    pub date_submitted: DateTime<Utc>,
    /// 评分状态
    pub grading_status: GradingStatus,
    /// 得分（未评分时为空）
    #[serde(default)]
    pub score: Option<Score>,
}

/// initialize 响应解析结果
#[derive(Debug, Clone)]
pub struct InitData {
    /// 是否是个人型评估（false 表示团队型）
    pub is_individual: bool,
    /// 提交记录列表
    pub submissions: Vec<SubmissionRecord>,
}

/// 解析 initialize 响应
///
/// # 参数
/// - `payload`: initialize 接口返回的原始 JSON
///
/// # 返回
/// 返回评估类型标记和提交记录列表
pub fn parse_init_payload(payload: &JsonValue) -> AppResult<InitData> {
    let ora_type = payload
        .get("oraMetadata")
        .and_then(|meta| meta.get("type"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| AppError::missing_field("oraMetadata.type"))?;

    let submissions_value = payload
        .get("submissions")
        .ok_or_else(|| AppError::missing_field("submissions"))?;

    let submissions: Vec<SubmissionRecord> = serde_json::from_value(submissions_value.clone())
        .map_err(|e| AppError::json_parse_failed("submissions", e))?;

    Ok(InitData {
        is_individual: ora_type == "individual",
        submissions,
    })
}
