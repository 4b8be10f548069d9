//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum InspectorError {
    // 单次抓取失败（仅在重试循环内部流转，不向调用方暴露）
    #[error("{0}")]
    Transport(String),
    #[error("Network response was not ok (status: {status})")]
    ProxyStatus { status: u16 },
    #[error("No content received from proxy")]
    MissingContents,

    // 会话级错误：主文档在全部外层重试后仍无法获取
    #[error("Analysis failed after {attempts} attempts for {url}: {last_error}")]
    SessionFetchExhausted {
        url: String,
        attempts: usize,
        last_error: String,
    },

    // 编译相关错误
    #[error("Regex compile failed: {0}")]
    RegexCompile(#[from] RegexError),

    // 网络相关错误
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON parse failed: {0}")]
    Json(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO operation failed: {0}")]
    Io(#[from] IoError),
    #[error("URL parse failed: {0}")]
    Url(#[from] UrlParseError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Inspector not initialized, call init_inspector first")]
    InspectorNotInitialized,
}

impl InspectorError {
    /// 是否为单次尝试级别的瞬时错误（可由重试循环吸收）
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            InspectorError::Transport(_)
                | InspectorError::ProxyStatus { .. }
                | InspectorError::MissingContents
                | InspectorError::Http(_)
                | InspectorError::Json(_)
        )
    }
}

// 全局Result类型
pub type InspectResult<T> = Result<T, InspectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_status_message() {
        let err = InspectorError::ProxyStatus { status: 502 };
        assert_eq!(err.to_string(), "Network response was not ok (status: 502)");
        assert!(err.is_transient());
    }

    #[test]
    fn test_session_error_not_transient() {
        let err = InspectorError::SessionFetchExhausted {
            url: "https://example.com".to_string(),
            attempts: 10,
            last_error: "boom".to_string(),
        };
        assert!(!err.is_transient());
        assert!(err.to_string().contains("10 attempts"));
    }
}
