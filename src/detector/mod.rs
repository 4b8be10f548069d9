//! 检测模块：动画库分类、CDN解析、技术指纹
pub mod classifier;
pub mod cdn_resolver;
pub mod fingerprinter;

// 导出核心接口
pub use self::classifier::{classify, LibraryClassifier};
pub use self::cdn_resolver::{is_stylesheet_url, resolve_cdn};
pub use self::fingerprinter::{fingerprint, merge_libraries, TechFingerprinter};
