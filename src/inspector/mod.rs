//! 分析模块：编排器、会话登记、全局单例
pub mod orchestrator;
pub mod session;
pub mod global;

pub use self::orchestrator::SiteInspector;
pub use self::session::SessionRegistry;
pub use self::global::{analyze, global_inspector, init_inspector, init_inspector_with_config};
