//! 提取模块：页面元数据、资源收集、主体重建
pub mod html_extractor;
pub mod asset_collector;
pub mod body_extractor;

pub use self::html_extractor::{HtmlExtractor, PageDocument, RawScript};
pub use self::asset_collector::collect_assets;
pub use self::body_extractor::extract_body;
