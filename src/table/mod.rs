//! 提交列表表格层
//!
//! ## 职责
//!
//! 把 `Vec<SubmissionRecord>` 渲染成可筛选、可排序、可分页、
//! 可多选的表格数据，并把行选择汇聚成"载入评审"动作。
//! 渲染产物是纯数据结构，由外部的 UI 工具链负责画出来。
//!
//! ## 模块划分
//!
//! ### `columns` - 列定义
//! - 固定四列：身份 / 提交时间 / 成绩 / 评分状态
//! - 身份列的取值和表头随 isIndividual 切换
//! - 单元格格式化（本地时间、earned/possible、状态徽章）
//!
//! ### `view_state` - 表格视图状态
//! - 筛选、排序、分页、行选择
//! - 只在表格存活期间有效，换数据即重建
//!
//! ### `status_badge` - 状态徽章
//! - 评分状态 → 徽章样式 + 展示文案
//!
//! ### `submissions_table` - 提交表格
//! - 渲染入口（空列表直接不渲染）
//! - 表级动作 / 批量动作 / URL 聚焦自动触发

pub mod columns;
pub mod status_badge;
pub mod submissions_table;
pub mod view_state;

// 重新导出主要类型
pub use columns::SubmissionColumn;
pub use status_badge::{BadgeVariant, StatusBadge};
pub use submissions_table::{RenderedRow, SubmissionsTable, TableRender};
pub use view_state::{SortDirection, TableViewState, DEFAULT_PAGE_SIZE};
