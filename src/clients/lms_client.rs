/// LMS API 客户端
///
/// 封装所有与 LMS 评分接口相关的调用逻辑。
/// 每个方法都返回解析好的 JSON，失败时返回结构化的 ApiError。
use reqwest::Response;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;

/// LMS API 客户端
pub struct LmsClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl LmsClient {
    /// 创建新的 LMS 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.lms_base_url.trim_end_matches('/').to_string(),
            auth_token: config.lms_auth_token.clone(),
        }
    }

    /// 初始化应用：拉取评估元数据和提交列表
    ///
    /// # 参数
    /// - `location_id`: 评估位置 ID
    pub async fn initialize_app(&self, location_id: &str) -> Result<JsonValue, ApiError> {
        self.get("api/initialize", &[("oraLocation", location_id)])
            .await
    }

    /// 拉取单个提交
    ///
    /// # 参数
    /// - `submission_uuid`: 提交 UUID
    pub async fn fetch_submission(&self, submission_uuid: &str) -> Result<JsonValue, ApiError> {
        self.get("api/submission", &[("submissionUUID", submission_uuid)])
            .await
    }

    /// 拉取提交状态
    ///
    /// # 参数
    /// - `submission_uuid`: 提交 UUID
    pub async fn fetch_submission_status(
        &self,
        submission_uuid: &str,
    ) -> Result<JsonValue, ApiError> {
        self.get("api/submissionStatus", &[("submissionUUID", submission_uuid)])
            .await
    }

    /// 拉取提交的作答内容
    ///
    /// # 参数
    /// - `submission_uuid`: 提交 UUID
    pub async fn fetch_submission_response(
        &self,
        submission_uuid: &str,
    ) -> Result<JsonValue, ApiError> {
        self.get("api/submissionResponse", &[("submissionUUID", submission_uuid)])
            .await
    }

    /// 设置 / 释放评分锁
    ///
    /// # 参数
    /// - `submission_uuid`: 提交 UUID
    /// - `value`: true 表示上锁，false 表示释放
    pub async fn lock_submission(
        &self,
        submission_uuid: &str,
        value: bool,
    ) -> Result<JsonValue, ApiError> {
        let value_str = value.to_string();
        self.post(
            "api/lock",
            &[("submissionUUID", submission_uuid), ("value", &value_str)],
            None,
        )
        .await
    }

    /// 提交成绩
    ///
    /// # 参数
    /// - `submission_uuid`: 提交 UUID
    /// - `grade_data`: 成绩数据
    pub async fn update_grade(
        &self,
        submission_uuid: &str,
        grade_data: JsonValue,
    ) -> Result<JsonValue, ApiError> {
        self.post(
            "api/updateGrade",
            &[("submissionUUID", submission_uuid)],
            Some(grade_data),
        )
        .await
    }

    // ========== 辅助函数 ==========

    /// 发送 GET 请求
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<JsonValue, ApiError> {
        debug!("GET {} {:?}", endpoint, query);

        let response = self
            .http
            .get(self.url(endpoint))
            .header("Authorization", &self.auth_token)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, &e))?;

        Self::parse_response(endpoint, response).await
    }

    /// 发送 POST 请求
    async fn post(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<JsonValue>,
    ) -> Result<JsonValue, ApiError> {
        debug!("POST {} {:?}", endpoint, query);

        let mut request = self
            .http
            .post(self.url(endpoint))
            .header("Authorization", &self.auth_token)
            .query(query);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, &e))?;

        Self::parse_response(endpoint, response).await
    }

    /// 拼接完整 URL
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// 解析响应：非 2xx 转结构化错误，2xx 解析为 JSON
    async fn parse_response(endpoint: &str, response: Response) -> Result<JsonValue, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::bad_status(endpoint, status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::transport(endpoint, &e))
    }
}
