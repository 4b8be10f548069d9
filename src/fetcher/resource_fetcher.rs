//! 资源抓取器：带固定间隔重试的单地址抓取
//! 特性：
//! 1. 尝试严格串行，次数上限可配置
//! 2. 固定间隔（无指数退避），最坏耗时 = 次数 × 间隔
//! 3. 永不返回错误，全部失败信息编码在 `FetchResult` 中
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::config::{DEFAULT_FILE_RETRY_DELAY, MAX_FILE_FETCH_ATTEMPTS};
use crate::model::FetchResult;
use crate::utils::preview_compact;

use super::proxy_client::ProxyClient;

/// 资源抓取器（可廉价克隆，底层客户端共享）
pub struct ResourceFetcher<C: ProxyClient> {
    client: Arc<C>,
}

impl<C: ProxyClient> Clone for ResourceFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: ProxyClient> ResourceFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 按默认策略抓取：15 次尝试，间隔 1000ms
    pub async fn fetch_default(&self, url: &str) -> FetchResult {
        self.fetch(url, MAX_FILE_FETCH_ATTEMPTS, DEFAULT_FILE_RETRY_DELAY)
            .await
    }

    /// 抓取单个地址
    /// 参数：
    /// - max_attempts: 最大尝试次数（0 视为 1）
    /// - delay: 两次尝试之间的固定等待
    pub async fn fetch(&self, url: &str, max_attempts: usize, delay: Duration) -> FetchResult {
        let max_attempts = max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            debug!("第{}/{}次尝试抓取：{}", attempt, max_attempts, url);

            match self.client.request(url).await {
                Ok(content) => {
                    debug!(
                        "第{}/{}次尝试成功：{}（{}）",
                        attempt,
                        max_attempts,
                        url,
                        preview_compact(&content, 60)
                    );
                    return FetchResult::ok(content);
                }
                Err(e) => {
                    last_error = e.to_string();
                    warn!(
                        "第{}/{}次尝试失败 {}：{}",
                        attempt, max_attempts, url, last_error
                    );
                    // 非瞬时错误（如地址无法编码）重试无意义
                    if !e.is_transient() {
                        error!("不可重试的错误，放弃抓取：{}", url);
                        return FetchResult::failed(last_error);
                    }
                    if attempt < max_attempts {
                        debug!("等待{}ms后重试", delay.as_millis());
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        error!("{}次尝试全部失败：{}", max_attempts, url);
        FetchResult::failed(last_error)
    }
}
