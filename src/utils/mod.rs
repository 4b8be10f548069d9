//! 工具模块：提供通用工具函数
pub mod url_resolver;
pub mod preview;

pub use self::url_resolver::{normalize_target_url, origin_of, resolve_against};
pub use self::preview::preview_compact;
