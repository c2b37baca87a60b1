/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志订阅器
///
/// 默认 info 级别，verbose 时开 debug；RUST_LOG 环境变量可覆盖。
/// 重复调用只有第一次生效。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 评分工作台启动");
    info!("📡 LMS 地址: {}", config.lms_base_url);
    info!("📄 当前路径: {}", config.current_path);
    info!("{}", "=".repeat(60));
}

/// 记录提交列表加载结果
///
/// # 参数
/// - `total`: 提交总数
/// - `is_individual`: 是否是个人型评估
pub fn log_submissions_loaded(total: usize, is_individual: bool) {
    let kind = if is_individual { "个人" } else { "团队" };
    info!("✓ 加载 {} 条{}提交", total, kind);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
