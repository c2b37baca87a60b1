//! 评审流程 - 流程层
//!
//! 把表格产出的提交选择变成评审会话：
//! 记录选择 → 拉取活跃提交 → 上评分锁。
//! 前后翻页复用同一条加载路径。

use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::LmsClient;
use crate::requests::{thunks, RequestCallbacks};
use crate::store::Store;

/// 载入选中的提交进入评审
///
/// 记录选择并把活跃下标归零，然后加载第一条提交。
///
/// # 参数
/// - `submission_uuids`: 表级动作 / 批量动作 / URL 聚焦产出的 UUID 列表
pub async fn load_selection_for_review(
    store: &Arc<Store>,
    client: &LmsClient,
    submission_uuids: Vec<String>,
) {
    if submission_uuids.is_empty() {
        warn!("⚠️ 评审选择为空，忽略本次载入");
        return;
    }

    info!("📋 载入 {} 条提交进入评审", submission_uuids.len());
    store.update_selection(submission_uuids);

    load_active_submission(store, client).await;
}

/// 评审翻到下一条提交
///
/// # 返回
/// 返回是否发生了移动（已在末尾时为 false）
pub async fn load_next(store: &Arc<Store>, client: &LmsClient) -> bool {
    if !store.advance_selection() {
        return false;
    }
    load_active_submission(store, client).await;
    true
}

/// 评审翻到上一条提交
///
/// # 返回
/// 返回是否发生了移动（已在开头时为 false）
pub async fn load_previous(store: &Arc<Store>, client: &LmsClient) -> bool {
    if !store.retreat_selection() {
        return false;
    }
    load_active_submission(store, client).await;
    true
}

/// 加载当前活跃提交：拉详情 + 上评分锁
async fn load_active_submission(store: &Arc<Store>, client: &LmsClient) {
    let Some(submission_uuid) = store.active_submission_id() else {
        return;
    };

    let store_for_success = Arc::clone(store);
    let uuid_for_failure = submission_uuid.clone();
    thunks::fetch_submission(
        store,
        client,
        &submission_uuid,
        RequestCallbacks {
            on_success: Some(Box::new(move |response| {
                store_for_success.set_current_review(response.clone());
            })),
            on_failure: Some(Box::new(move |error| {
                warn!("❌ 提交 {} 加载失败: {}", uuid_for_failure, error);
            })),
        },
    )
    .await;

    thunks::set_lock(store, client, &submission_uuid, true, RequestCallbacks::default()).await;
}
