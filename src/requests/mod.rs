//! 请求生命周期层（Request Lifecycle Layer）
//!
//! ## 职责
//!
//! 本层把每一次网络调用包装成可追踪的生命周期，UI 据此统一展示
//! 加载中 / 成功 / 失败状态。
//!
//! ## 模块划分
//!
//! ### `keys` - 请求键注册表
//! - 枚举所有可追踪的逻辑操作（纯数据）
//!
//! ### `tracker` - 请求生命周期追踪器
//! - 按 RequestKey 记录 Pending / Succeeded / Failed
//! - 保存最近一次响应或错误
//!
//! ### `orchestrator` - 请求编排器
//! - 在调用前后派发生命周期转移
//! - 调用可选的成功 / 失败回调
//! - 吞掉所有错误，不向调用方抛出
//!
//! ### `thunks` - 类型化动作绑定
//! - 每个操作一个薄绑定：选 key、拼调用、委托编排器
//!
//! ## 层次关系
//!
//! ```text
//! thunks (绑定 RequestKey + API 调用)
//!     ↓
//! orchestrator (start → await → complete/fail → 回调)
//!     ↓
//! tracker (RequestKey → RequestState 状态表)
//! ```

pub mod keys;
pub mod orchestrator;
pub mod thunks;
pub mod tracker;

// 重新导出主要类型
pub use keys::RequestKey;
pub use orchestrator::{network_request, RequestCallbacks};
pub use tracker::{RequestState, RequestStatus, RequestTracker};
