//! 路径解析模块
//!
//! 从当前访问路径中解析评估位置 ID 和可选的"聚焦提交" UUID。
//! 纯函数：只读取路径字符串，不产生任何副作用，也不会失败。

use regex::Regex;
use std::sync::OnceLock;

/// 标准 UUID 的 8-4-4-4-12 十六进制格式（大小写均可）
const UUID_PATTERN: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

fn uuid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UUID_PATTERN).expect("UUID 正则模式非法"))
}

/// 剥掉公共路径前缀
fn strip_public_path<'a>(path: &'a str, public_path: &str) -> &'a str {
    path.strip_prefix(public_path).unwrap_or(path)
}

/// 获取评估位置 ID（路径的第一段）
///
/// # 参数
/// - `path`: 当前访问路径
/// - `public_path`: 公共路径前缀
///
/// # 返回
/// 返回位置 ID；路径为空时返回 None
pub fn location_id(path: &str, public_path: &str) -> Option<String> {
    let rest = strip_public_path(path, public_path);
    match rest.split('/').next() {
        Some("") | None => None,
        Some(segment) => Some(segment.to_string()),
    }
}

/// 获取聚焦提交的 UUID（路径的第二段，可选）
///
/// 第二段只有完整匹配标准 UUID 格式时才有效；
/// 缺失、为空或格式非法一律按"不存在"处理，而不是报错。
///
/// # 参数
/// - `path`: 当前访问路径
/// - `public_path`: 公共路径前缀
///
/// # 返回
/// 返回合法的提交 UUID，否则返回 None
pub fn specific_submission_id(path: &str, public_path: &str) -> Option<String> {
    let rest = strip_public_path(path, public_path);
    let segment = rest.split('/').nth(1)?;
    if segment.is_empty() {
        return None;
    }
    if uuid_re().is_match(segment) {
        Some(segment.to_string())
    } else {
        None
    }
}

/// 获取路由模板（`<public_path>:locationId`）
pub fn route_path(public_path: &str) -> String {
    format!("{}:locationId", public_path)
}
