//! # ORA Grading Workspace
//!
//! 一个嵌在学习平台里的评分工作台客户端：评分人浏览开放式作答的
//! 学员（或团队）提交，筛选、勾选后送进评审流程。所有网络交互都
//! 走统一的生命周期追踪，UI 可以一致地展示加载 / 成功 / 失败状态。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 HTTP 客户端，只暴露 LMS 调用能力
//! - `LmsClient` - initialize / submission / lock / grade 六个接口
//!
//! ### ② 数据层（Models / Store）
//! - `models/` - 提交记录、评分状态、得分等只读数据模型
//! - `store` - 显式持有的应用状态（请求状态表 + 提交列表 + 评审选择）
//!
//! ### ③ 请求编排层（Requests）
//! - `requests/keys` - 可追踪操作的注册表
//! - `requests/tracker` - RequestKey → Pending/Succeeded/Failed 状态表
//! - `requests/orchestrator` - start → await → complete/fail → 回调
//! - `requests/thunks` - 每个操作一个类型化薄绑定
//!
//! ### ④ 展示层（Table）
//! - `table/` - 提交列表的筛选 / 排序 / 分页 / 多选与渲染
//! - 行选择汇聚成"载入评审"动作
//!
//! ### ⑤ 流程层（Workflow）
//! - `workflow/review_flow` - 选择 → 拉取提交 → 上评分锁
//!
//! ### ⑥ 编排层（App）
//! - `app` - 初始化、拉数据、渲染表格、进入评审的完整串联
//!
//! ## 数据流
//!
//! ```text
//! UI 触发 thunk → orchestrator 记 start → LMS 调用落地
//!     → 记 complete/fail + 回调 → 回调更新 Store
//!     → table 渲染提交列表 → 行选择触发 load_selection_for_review
//!     → 回到 thunk（fetchSubmission + setLock），闭环
//! ```

pub mod app;
pub mod app_path;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod requests;
pub mod store;
pub mod table;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::LmsClient;
pub use config::Config;
pub use error::{ApiError, AppError, AppResult};
pub use models::{GradingStatus, Score, SubmissionRecord};
pub use requests::{network_request, RequestCallbacks, RequestKey, RequestStatus, RequestTracker};
pub use store::Store;
pub use table::{SubmissionsTable, TableViewState};
