//! siteinspector - 站点动画库分析与预览重建工具

// 导出全局错误类型
pub use self::error::{InspectResult, InspectorError};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, InspectorConfig};

// 导出数据模型
pub use self::model::{
    AnalysisResult, AnalysisSession, AnimationFile, Asset, AssetKind, AssetOrigin,
    Classification, CollectedAssets, FetchResult,
};

// 导出规则与编译模块核心接口
pub use self::rule::{ClassificationRule, WeightedPattern, CDN_MAP, LIBRARY_RULES};
pub use self::compiler::{CompiledRuleLibrary, RuleCompiler, BUILTIN_RULES};

// 导出提取模块核心接口
pub use self::extractor::{collect_assets, extract_body, HtmlExtractor, PageDocument};

// 导出抓取模块核心接口
pub use self::fetcher::{HttpProxyClient, ProxyClient, ResourceFetcher};

// 导出检测模块核心接口
pub use self::detector::{classify, fingerprint, resolve_cdn, LibraryClassifier, TechFingerprinter};

// 导出重建模块核心接口
pub use self::reconstructor::{
    animations_only, build_preview, build_prompt, AnimationExtract, AnimationStats,
    DocumentReconstructor, ExportBundle,
};

// 导出分析入口（含全局单例的简化接口）
pub use self::inspector::{analyze, init_inspector, init_inspector_with_config, SiteInspector};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod model;
pub mod rule;
pub mod compiler;
pub mod extractor;
pub mod fetcher;
pub mod detector;
pub mod reconstructor;
pub mod inspector;
pub mod utils;
