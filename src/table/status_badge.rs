//! 状态徽章
//!
//! 评分状态在表格里渲染成徽章：一种样式 + 一段文案。
//! 具体的视觉实现由外部组件库负责，这里只产出数据。

use crate::models::GradingStatus;

/// 徽章样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Light,
}

impl BadgeVariant {
    /// 获取样式名（与组件库的 variant 命名一致）
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Light => "light",
        }
    }
}

/// 状态徽章
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: GradingStatus,
}

impl StatusBadge {
    /// 创建状态徽章
    pub fn new(status: GradingStatus) -> Self {
        Self { status }
    }

    /// 获取徽章样式
    pub fn variant(self) -> BadgeVariant {
        match self.status {
            GradingStatus::Ungraded => BadgeVariant::Primary,
            GradingStatus::Locked => BadgeVariant::Light,
            GradingStatus::Graded => BadgeVariant::Success,
            GradingStatus::InProgress => BadgeVariant::Warning,
        }
    }

    /// 获取展示文案
    pub fn label(self) -> &'static str {
        self.status.label()
    }
}
