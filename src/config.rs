//! 全局配置管理,存储所有可配置项

use std::time::Duration;

/// 默认代理服务地址（返回 `{"contents": ...}` 的 JSON 包装）
pub const DEFAULT_PROXY_BASE: &str = "https://api.allorigins.win";
/// 单个资源文件的最大抓取次数
pub const MAX_FILE_FETCH_ATTEMPTS: usize = 15;
/// 资源文件两次尝试之间的默认间隔
pub const DEFAULT_FILE_RETRY_DELAY: Duration = Duration::from_millis(1000);
/// 主文档的最大抓取次数
pub const MAX_SITE_FETCH_ATTEMPTS: usize = 10;
/// 持久化为动画文件的置信度阈值（严格大于）
pub const PERSISTENCE_THRESHOLD: f64 = 60.0;
/// 高置信度阈值（严格大于）
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 80.0;

/// 全局配置
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    // 代理服务根地址
    pub proxy_base: String,
    // 资源文件重试配置
    pub max_file_fetch_attempts: usize,
    pub file_retry_delay: Duration,
    // 主文档重试配置
    pub max_site_fetch_attempts: usize,
    pub site_retry_delay: Duration,
    // 单次HTTP请求超时
    pub http_timeout: Duration,
    pub user_agent: String,
    // 置信度阈值
    pub persistence_threshold: f64,
    pub high_confidence_threshold: f64,
    // 预览文档中等待CDN资源加载的上限
    pub init_grace_timeout: Duration,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            max_file_fetch_attempts: MAX_FILE_FETCH_ATTEMPTS,
            file_retry_delay: DEFAULT_FILE_RETRY_DELAY,
            max_site_fetch_attempts: MAX_SITE_FETCH_ATTEMPTS,
            site_retry_delay: Duration::from_millis(2000),
            http_timeout: Duration::from_secs(30),
            user_agent: format!("SiteInspector/{}", env!("CARGO_PKG_VERSION")),
            persistence_threshold: PERSISTENCE_THRESHOLD,
            high_confidence_threshold: HIGH_CONFIDENCE_THRESHOLD,
            init_grace_timeout: Duration::from_millis(8000),
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> InspectorConfig {
        InspectorConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: InspectorConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn proxy_base(mut self, base: impl Into<String>) -> Self {
        self.config.proxy_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn max_file_fetch_attempts(mut self, attempts: usize) -> Self {
        self.config.max_file_fetch_attempts = attempts.max(1);
        self
    }

    pub fn file_retry_delay(mut self, delay: Duration) -> Self {
        self.config.file_retry_delay = delay;
        self
    }

    pub fn max_site_fetch_attempts(mut self, attempts: usize) -> Self {
        self.config.max_site_fetch_attempts = attempts.max(1);
        self
    }

    pub fn site_retry_delay(mut self, delay: Duration) -> Self {
        self.config.site_retry_delay = delay;
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn persistence_threshold(mut self, threshold: f64) -> Self {
        self.config.persistence_threshold = threshold.clamp(0.0, 100.0);
        self
    }

    pub fn high_confidence_threshold(mut self, threshold: f64) -> Self {
        self.config.high_confidence_threshold = threshold.clamp(0.0, 100.0);
        self
    }

    pub fn init_grace_timeout(mut self, timeout: Duration) -> Self {
        self.config.init_grace_timeout = timeout;
        self
    }

    pub fn build(self) -> InspectorConfig {
        self.config
    }
}
