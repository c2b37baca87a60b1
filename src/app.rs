//! 应用编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，把各层串成完整的评分工作流：
//!
//! 1. **初始化**：解析路径、创建 LMS 客户端和状态容器
//! 2. **拉取数据**：initialize thunk 成功后把提交列表写进 Store
//! 3. **渲染表格**：把提交列表渲染成可筛选 / 可选择的表格
//! 4. **进入评审**：聚焦提交优先，否则整表进入评审流
//!
//! ## 设计特点
//!
//! - **资源所有者**：唯一持有 LmsClient 和 Store 的模块
//! - **向下委托**：委托 thunks 发请求、table 出渲染、workflow 进评审
//! - **无业务逻辑**：只做调度和日志

use anyhow::{bail, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::app_path;
use crate::clients::LmsClient;
use crate::config::Config;
use crate::error::{AppError, ConfigError};
use crate::models;
use crate::requests::{thunks, RequestCallbacks, RequestKey};
use crate::store::Store;
use crate::table::SubmissionsTable;
use crate::utils::logging;
use crate::workflow;

/// 应用主结构
pub struct App {
    config: Config,
    client: LmsClient,
    store: Arc<Store>,
    location_id: String,
    focused_submission: Option<String>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let location_id = app_path::location_id(&config.current_path, &config.public_path)
            .ok_or_else(|| {
                AppError::Config(ConfigError::MissingLocationId {
                    path: config.current_path.clone(),
                })
            })?;

        let focused_submission =
            app_path::specific_submission_id(&config.current_path, &config.public_path);

        if let Some(uuid) = &focused_submission {
            info!("🔍 检测到聚焦提交: {}", uuid);
        }

        let client = LmsClient::new(&config);
        let store = Arc::new(Store::new());

        Ok(Self {
            config,
            client,
            store,
            location_id,
            focused_submission,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 拉取评估元数据和提交列表
        self.load_initial_data().await;

        if self.store.requests().is_failed(RequestKey::Initialize) {
            let state = self.store.requests().state(RequestKey::Initialize);
            match state.last_error {
                Some(error) => bail!("初始化失败: {}", error),
                None => bail!("初始化失败"),
            }
        }

        // 渲染提交表格
        let mut table = SubmissionsTable::new(
            self.store.submissions(),
            self.store.is_individual(),
            self.focused_submission.clone(),
        );
        table.view.page_size = self.config.page_size;

        let Some(render) = table.render() else {
            warn!("⚠️ 没有提交记录，跳过表格渲染");
            return Ok(());
        };
        log_table(&render);

        // 聚焦提交优先（模拟挂载时的自动点击），否则整表进入评审
        let selection = match table.mount() {
            Some(focused_selection) => focused_selection,
            None => table.view_all_responses(),
        };

        workflow::load_selection_for_review(&self.store, &self.client, selection).await;

        self.log_review_state();

        Ok(())
    }

    /// 拉取初始数据并写入 Store
    async fn load_initial_data(&self) {
        let store_for_success = Arc::clone(&self.store);

        thunks::initialize_app(
            &self.store,
            &self.client,
            &self.location_id,
            RequestCallbacks {
                on_success: Some(Box::new(move |response| {
                    match models::parse_init_payload(response) {
                        Ok(init) => {
                            logging::log_submissions_loaded(
                                init.submissions.len(),
                                init.is_individual,
                            );
                            store_for_success.set_is_individual(init.is_individual);
                            store_for_success.set_submissions(init.submissions);
                        }
                        Err(e) => error!("❌ initialize 响应解析失败: {}", e),
                    }
                })),
                on_failure: Some(Box::new(|error| {
                    error!("❌ 初始化请求失败: {}", error);
                })),
            },
        )
        .await;
    }

    /// 输出评审会话摘要
    fn log_review_state(&self) {
        let review = self.store.review();
        info!("{}", "─".repeat(60));
        info!(
            "📊 评审会话: 共 {} 条，当前第 {} 条",
            review.selection.len(),
            review.active_index + 1
        );
        if let Some(current) = &review.current {
            info!(
                "📝 当前提交详情: {}",
                logging::truncate_text(&current.to_string(), 120)
            );
        }
        info!("{}", "─".repeat(60));
    }
}

/// 把渲染好的表格写入日志
fn log_table(render: &crate::table::TableRender) {
    info!("{}", "=".repeat(60));
    info!("📋 {}", render.headers.join(" | "));
    for row in &render.rows {
        let marker = if row.selected { "[x]" } else { "[ ]" };
        info!("{} {}", marker, row.cells.join(" | "));
    }
    info!(
        "📄 第 {}/{} 页，共 {} 条",
        render.page_index + 1,
        render.page_count.max(1),
        render.item_count
    );
    if let Some(summary) = &render.filter_summary {
        info!("🔎 {}", summary);
    }
    info!("{}", "=".repeat(60));
}
