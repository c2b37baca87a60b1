/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// LMS 服务地址
    pub lms_base_url: String,
    /// LMS 鉴权 Token
    pub lms_auth_token: String,
    /// 应用部署的公共路径前缀（location 解析时会先剥掉）
    pub public_path: String,
    /// 当前访问路径（<public_path><locationId>[/<submissionUUID>]）
    pub current_path: String,
    /// 提交列表每页行数
    pub page_size: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lms_base_url: "http://localhost:18000".to_string(),
            lms_auth_token: String::new(),
            public_path: "/".to_string(),
            current_path: "/".to_string(),
            page_size: 10,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            lms_base_url: std::env::var("LMS_BASE_URL").unwrap_or(default.lms_base_url),
            lms_auth_token: std::env::var("LMS_AUTH_TOKEN").unwrap_or(default.lms_auth_token),
            public_path: std::env::var("PUBLIC_PATH").unwrap_or(default.public_path),
            current_path: std::env::var("ORA_GRADING_PATH").unwrap_or(default.current_path),
            page_size: std::env::var("PAGE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_size),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
