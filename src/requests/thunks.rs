//! 类型化动作绑定
//!
//! 每个操作一个薄绑定：选定 RequestKey、拼出对应的 LMS 调用，
//! 然后委托编排器。这一层只做参数整形，不做任何业务逻辑。

use serde_json::Value as JsonValue;

use crate::clients::LmsClient;
use crate::requests::{network_request, RequestCallbacks, RequestKey};
use crate::store::Store;

/// 初始化应用（键：initialize）
///
/// # 参数
/// - `location_id`: 评估位置 ID
pub async fn initialize_app(
    store: &Store,
    client: &LmsClient,
    location_id: &str,
    callbacks: RequestCallbacks,
) {
    network_request(
        store.requests(),
        Some(RequestKey::Initialize),
        client.initialize_app(location_id),
        callbacks,
    )
    .await;
}

/// 拉取单个提交（键：fetchSubmission）
///
/// # 参数
/// - `submission_id`: 目标提交 UUID
pub async fn fetch_submission(
    store: &Store,
    client: &LmsClient,
    submission_id: &str,
    callbacks: RequestCallbacks,
) {
    network_request(
        store.requests(),
        Some(RequestKey::FetchSubmission),
        client.fetch_submission(submission_id),
        callbacks,
    )
    .await;
}

/// 拉取提交状态（键：fetchSubmissionStatus）
///
/// # 参数
/// - `submission_id`: 目标提交 UUID
pub async fn fetch_submission_status(
    store: &Store,
    client: &LmsClient,
    submission_id: &str,
    callbacks: RequestCallbacks,
) {
    network_request(
        store.requests(),
        Some(RequestKey::FetchSubmissionStatus),
        client.fetch_submission_status(submission_id),
        callbacks,
    )
    .await;
}

/// 拉取提交的作答内容（不追踪）
///
/// 这一操作不占用独立的请求键，加载状态由调用方自己挂接。
///
/// # 参数
/// - `submission_id`: 目标提交 UUID
pub async fn fetch_submission_response(
    store: &Store,
    client: &LmsClient,
    submission_id: &str,
    callbacks: RequestCallbacks,
) {
    network_request(
        store.requests(),
        None,
        client.fetch_submission_response(submission_id),
        callbacks,
    )
    .await;
}

/// 设置 / 释放评分锁（键：setLock）
///
/// # 参数
/// - `submission_id`: 目标提交 UUID
/// - `value`: true 表示上锁，false 表示释放
pub async fn set_lock(
    store: &Store,
    client: &LmsClient,
    submission_id: &str,
    value: bool,
    callbacks: RequestCallbacks,
) {
    network_request(
        store.requests(),
        Some(RequestKey::SetLock),
        client.lock_submission(submission_id, value),
        callbacks,
    )
    .await;
}

/// 提交成绩（键：submitGrade）
///
/// # 参数
/// - `submission_id`: 目标提交 UUID
/// - `grade_data`: 成绩数据
pub async fn submit_grade(
    store: &Store,
    client: &LmsClient,
    submission_id: &str,
    grade_data: JsonValue,
    callbacks: RequestCallbacks,
) {
    network_request(
        store.requests(),
        Some(RequestKey::SubmitGrade),
        client.update_grade(submission_id, grade_data),
        callbacks,
    )
    .await;
}
