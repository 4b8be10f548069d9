//! 抓取模块：代理客户端与重试抓取器
pub mod proxy_client;
pub mod resource_fetcher;

pub use self::proxy_client::{HttpProxyClient, ProxyClient};
pub use self::resource_fetcher::ResourceFetcher;
