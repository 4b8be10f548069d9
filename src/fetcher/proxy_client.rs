//! 代理客户端：通过 JSON 包装代理抓取任意目标地址
//! 约定：`GET {proxy_base}/get?url=<编码后的目标地址>` → `{"contents": "<原始文本>"}`
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::InspectorConfig;
use crate::error::{InspectResult, InspectorError};

/// 单次代理请求接口（不含重试，重试由 `ResourceFetcher` 负责）
#[async_trait]
pub trait ProxyClient: Send + Sync {
    async fn request(&self, target: &str) -> InspectResult<String>;
}

#[derive(Debug, Deserialize)]
struct ProxyPayload {
    #[serde(default)]
    contents: Option<String>,
}

/// 基于 reqwest 的默认代理客户端
#[derive(Debug, Clone)]
pub struct HttpProxyClient {
    client: Client,
    proxy_base: String,
}

impl HttpProxyClient {
    pub fn new(config: &InspectorConfig) -> InspectResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            proxy_base: config.proxy_base.trim_end_matches('/').to_string(),
        })
    }

    /// 拼接代理地址（目标地址做查询参数编码）
    pub fn proxy_url(&self, target: &str) -> InspectResult<Url> {
        let endpoint = format!("{}/get", self.proxy_base);
        Ok(Url::parse_with_params(&endpoint, &[("url", target)])?)
    }
}

#[async_trait]
impl ProxyClient for HttpProxyClient {
    async fn request(&self, target: &str) -> InspectResult<String> {
        let proxy_url = self.proxy_url(target)?;

        let response = self
            .client
            .get(proxy_url)
            .send()
            .await
            .map_err(|e| InspectorError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(InspectorError::ProxyStatus {
                status: response.status().as_u16(),
            });
        }

        let payload: ProxyPayload = response.json().await?;
        match payload.contents {
            Some(contents) if !contents.is_empty() => Ok(contents),
            _ => Err(InspectorError::MissingContents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server) -> HttpProxyClient {
        let config = ConfigManager::custom().proxy_base(server.url()).build();
        HttpProxyClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_request_returns_contents() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/get")
            .match_query(Matcher::UrlEncoded(
                "url".into(),
                "https://acme.test/a.css?v=1&x=2".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "contents": ".hero{opacity:0}", "status": { "http_code": 200 } }).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client.request("https://acme.test/a.css?v=1&x=2").await.unwrap();
        assert_eq!(body, ".hero{opacity:0}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_non_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server).request("https://acme.test").await.unwrap_err();
        assert!(matches!(err, InspectorError::ProxyStatus { status: 503 }));
        assert_eq!(err.to_string(), "Network response was not ok (status: 503)");
    }

    #[tokio::test]
    async fn test_request_missing_contents() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"contents": null}"#)
            .create_async()
            .await;

        let err = client_for(&server).request("https://acme.test").await.unwrap_err();
        assert!(matches!(err, InspectorError::MissingContents));
        assert_eq!(err.to_string(), "No content received from proxy");
    }
}
