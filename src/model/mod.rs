//! 数据模型：资源、分类结果、动画文件与分析会话
pub mod asset;
pub mod analysis;

pub use self::asset::{Asset, AssetKind, AssetOrigin, CollectedAssets};
pub use self::analysis::{
    AnalysisResult, AnalysisSession, AnimationFile, Classification, FetchResult,
};
