//! URL工具：目标地址规范化、站点源计算、相对地址解析

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{InspectResult, InspectorError};

static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://").unwrap()
});

/// 目标地址规范化：缺少 http(s) 协议时补 `https://`
pub fn normalize_target_url(input: &str) -> InspectResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InspectorError::InvalidInput("target URL is empty".to_string()));
    }

    let full = if SCHEME_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    Ok(Url::parse(&full)?)
}

/// 站点源（协议 + 主机 + 非默认端口），如 `https://example.com`
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// 基于站点源解析相对地址，无法解析时返回 None
pub fn resolve_against(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}
