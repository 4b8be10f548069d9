//! 规则模块：分类规则表、黑名单、CDN映射与技术指纹的数据定义
pub mod model;
pub mod library;
pub mod cdn;
pub mod signature;

// 导出核心接口
pub use self::model::{CdnEntry, ClassificationRule, TechSignature, WeightedPattern};
pub use self::library::{BLACKLIST, GENERIC_PATTERNS, LIBRARY_RULES};
pub use self::cdn::{cdn_urls, CDN_MAP};
pub use self::signature::TECH_SIGNATURES;
