//! 重建模块：预览文档、初始化脚本、导出产物
pub mod init_script;
pub mod preview;
pub mod export;

pub use self::export::{animations_only, build_prompt, AnimationExtract, AnimationStats, ExportBundle};
pub use self::preview::{build_preview, DocumentReconstructor};
