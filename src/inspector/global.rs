//! 全局分析器单例管理
use once_cell::sync::Lazy;
use tokio::sync::OnceCell;

use super::orchestrator::SiteInspector;
use crate::config::{ConfigManager, InspectorConfig};
use crate::error::{InspectResult, InspectorError};
use crate::model::AnalysisSession;

/// 全局分析器实例
static GLOBAL_INSPECTOR: Lazy<OnceCell<SiteInspector>> = Lazy::new(OnceCell::new);

/// 初始化全局分析器（默认配置）
pub fn init_inspector() -> InspectResult<()> {
    init_inspector_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局分析器（重复初始化直接返回）
pub fn init_inspector_with_config(config: InspectorConfig) -> InspectResult<()> {
    if GLOBAL_INSPECTOR.get().is_some() {
        return Ok(());
    }

    let inspector = SiteInspector::new(config)?;
    // 并发初始化时以先完成者为准
    let _ = GLOBAL_INSPECTOR.set(inspector);
    Ok(())
}

/// 获取全局分析器
pub fn global_inspector() -> InspectResult<&'static SiteInspector> {
    GLOBAL_INSPECTOR
        .get()
        .ok_or(InspectorError::InspectorNotInitialized)
}

/// 使用全局分析器分析站点
pub async fn analyze(url: &str) -> InspectResult<AnalysisSession> {
    global_inspector()?.analyze(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_global_lifecycle() {
        assert!(matches!(
            analyze("example.com").await,
            Err(InspectorError::InspectorNotInitialized)
        ));

        init_inspector().unwrap();
        // 重复初始化不报错，保留首个实例
        init_inspector_with_config(ConfigManager::custom().max_site_fetch_attempts(1).build()).unwrap();
        let inspector = global_inspector().unwrap();
        assert_eq!(inspector.config().max_site_fetch_attempts, 10);
    }
}
