use serde::{Deserialize, Serialize};
use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// API 调用错误
    Api(ApiError),
    /// 数据契约错误
    Data(DataError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Data(e) => write!(f, "数据错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Data(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// API 调用错误
///
/// LMS 返回的结构化错误：接口路径 + HTTP 状态码 + 错误消息。
/// 需要同时存入请求追踪表和传给 on_failure 回调，因此必须是 Clone。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// 接口路径
    pub endpoint: String,
    /// HTTP 状态码（网络层失败时可能缺失）
    pub status: Option<u16>,
    /// 错误消息
    pub message: String,
}

impl ApiError {
    /// 创建新的 API 错误
    pub fn new(
        endpoint: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    /// 从 reqwest 传输错误创建
    pub fn transport(endpoint: impl Into<String>, source: &reqwest::Error) -> Self {
        Self {
            endpoint: endpoint.into(),
            status: source.status().map(|s| s.as_u16()),
            message: source.to_string(),
        }
    }

    /// 从非 2xx 响应创建
    pub fn bad_status(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "LMS请求失败 ({}): HTTP {} - {}",
                self.endpoint, status, self.message
            ),
            None => write!(f, "LMS请求失败 ({}): {}", self.endpoint, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// 数据契约错误
///
/// LMS 返回的数据不符合约定时产生，属于上游缺陷而非可恢复状态
#[derive(Debug)]
pub enum DataError {
    /// 响应缺少必需字段
    MissingField { field: String },
    /// JSON 反序列化失败（包括未知的评分状态值）
    JsonParseFailed {
        context: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::MissingField { field } => write!(f, "响应缺少字段: {}", field),
            DataError::JsonParseFailed { context, source } => {
                write!(f, "JSON解析失败 ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::JsonParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 路径中缺少评估位置 ID
    MissingLocationId { path: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingLocationId { path } => {
                write!(f, "路径中缺少评估位置ID: {}", path)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建缺少字段错误
    pub fn missing_field(field: impl Into<String>) -> Self {
        AppError::Data(DataError::MissingField {
            field: field.into(),
        })
    }

    /// 创建 JSON 解析错误
    pub fn json_parse_failed(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Data(DataError::JsonParseFailed {
            context: context.into(),
            source: Box::new(source),
        })
    }
}

// ========== 从常见错误类型转换 ==========

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Data(DataError::JsonParseFailed {
            context: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
