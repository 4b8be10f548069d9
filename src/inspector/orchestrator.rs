//! 分析编排器
//! 流程：主文档抓取（外层重试）→ 页面提取 → 资源收集 → 逐个抓取并分类 → CDN解析 → 技术指纹 → 主体重建
//! 资源级失败就地吸收（以注释占位），只有主文档失败会作为会话错误返回
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::InspectorConfig;
use crate::detector::{resolve_cdn, LibraryClassifier, TechFingerprinter};
use crate::error::{InspectResult, InspectorError};
use crate::extractor::{collect_assets, extract_body, HtmlExtractor};
use crate::fetcher::{HttpProxyClient, ProxyClient, ResourceFetcher};
use crate::model::{
    AnalysisResult, AnalysisSession, AnimationFile, Asset, AssetKind, Classification,
};
use crate::reconstructor::{DocumentReconstructor, ExportBundle};
use crate::utils::{normalize_target_url, origin_of, preview_compact};

use super::session::SessionRegistry;

const JS_BUNDLE_SEPARATOR: &str = "\n\n// ===== NEXT SCRIPT =====\n\n";
const CSS_BUNDLE_SEPARATOR: &str = "\n\n";

/// 单个资源处理后的产出：包内片段 + 可能的动画文件
struct ProcessedAsset {
    entry: String,
    animation: Option<AnimationFile>,
}

/// 站点分析器
pub struct SiteInspector<C: ProxyClient = HttpProxyClient> {
    config: Arc<InspectorConfig>,
    fetcher: ResourceFetcher<C>,
    classifier: LibraryClassifier,
    fingerprinter: TechFingerprinter,
    sessions: SessionRegistry,
}

impl SiteInspector<HttpProxyClient> {
    /// 使用默认 HTTP 代理客户端创建分析器
    pub fn new(config: InspectorConfig) -> InspectResult<Self> {
        let client = HttpProxyClient::new(&config)?;
        Ok(Self::with_client(client, config))
    }
}

impl<C: ProxyClient> SiteInspector<C> {
    pub fn with_client(client: C, config: InspectorConfig) -> Self {
        let classifier = LibraryClassifier::with_persistence_threshold(config.persistence_threshold);
        Self {
            config: Arc::new(config),
            fetcher: ResourceFetcher::new(client),
            classifier,
            fingerprinter: TechFingerprinter::default(),
            sessions: SessionRegistry::new(),
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// 最近一次成功发布的会话
    pub async fn latest_session(&self) -> Option<Arc<AnalysisSession>> {
        self.sessions.latest().await
    }

    /// 预览文档构建器（沿用当前配置的阈值与等待上限）
    pub fn reconstructor(&self) -> DocumentReconstructor {
        DocumentReconstructor::from_config(&self.config)
    }

    pub fn build_preview(&self, result: &AnalysisResult) -> String {
        self.reconstructor().build_preview(result)
    }

    pub fn export_bundle(&self, result: &AnalysisResult) -> ExportBundle {
        ExportBundle::from_result(result, &self.reconstructor())
    }

    /// 分析入口
    /// 返回的会话总会交给调用方；若期间有更新的会话开始，则不会发布到 latest 槽位
    pub async fn analyze(&self, input: &str) -> InspectResult<AnalysisSession> {
        let target = normalize_target_url(input)?;
        let id = self.sessions.begin();
        info!("会话{}开始分析：{}", id, target);

        let html = self.fetch_document(&target).await?;
        let result = self.build_result(&target, &html).await?;

        let session = AnalysisSession {
            id,
            target_url: target.to_string(),
            result,
        };
        self.sessions.publish(&session).await;
        info!("✅ 分析完成：{}", target);
        Ok(session)
    }

    /// 主文档抓取（仅此步骤参与外层重试）
    async fn fetch_document(&self, target: &Url) -> InspectResult<String> {
        let attempts = self.config.max_site_fetch_attempts;
        let fetched = self
            .fetcher
            .fetch(target.as_str(), attempts, self.config.site_retry_delay)
            .await;

        if fetched.success {
            debug!("主文档内容：{}", preview_compact(&fetched.content, 120));
            return Ok(fetched.content);
        }

        let last_error = fetched.error.unwrap_or_default();
        warn!("主文档{}次尝试全部失败：{}", attempts, last_error);
        Err(InspectorError::SessionFetchExhausted {
            url: target.to_string(),
            attempts,
            last_error,
        })
    }

    async fn build_result(&self, target: &Url, html: &str) -> InspectResult<AnalysisResult> {
        let page = HtmlExtractor::extract(html);
        let base_url = origin_of(target);
        let base = Url::parse(&base_url)?;
        let (internal_links, external_links) = page.count_links(&base, target);
        let assets = collect_assets(&page, &base);

        let mut animation_files = Vec::new();
        let mut css_entries = Vec::new();
        let mut js_entries = Vec::new();

        info!("开始抓取{}个CSS文件", assets.external_styles.len());
        for asset in assets.external_styles.iter().chain(&assets.inline_styles) {
            let processed = self.process_asset(asset).await;
            css_entries.push(processed.entry);
            animation_files.extend(processed.animation);
        }

        info!(
            "分析JavaScript：外链{}个、内联{}个",
            assets.external_scripts.len(),
            assets.inline_scripts.len()
        );
        for asset in assets.external_scripts.iter().chain(&assets.inline_scripts) {
            let processed = self.process_asset(asset).await;
            js_entries.push(processed.entry);
            animation_files.extend(processed.animation);
        }
        info!("📊 高置信度动画文件：{}个", animation_files.len());

        let full_css = css_entries.join(CSS_BUNDLE_SEPARATOR);
        let full_js = js_entries.join(JS_BUNDLE_SEPARATOR);

        let mut result = AnalysisResult {
            title: page.title_or_default(),
            description: page.description_or_default(),
            internal_links,
            external_links,
            images: page.image_urls(&base),
            stylesheets: page.stylesheet_hrefs.len(),
            open_graph_tags: page.open_graph_tags,
            full_html: extract_body(html),
            base_url,
            animation_files,
            ..Default::default()
        };

        result.required_cdn_urls = resolve_cdn(result.detected_libraries());
        let aggregate = [full_js.as_str(), full_css.as_str(), html].join(" ");
        result.tech_guesses = self
            .fingerprinter
            .fingerprint_with_libraries(&aggregate, &result.animation_files);
        result.full_css = full_css;
        result.full_js = full_js;

        Ok(result)
    }

    /// 抓取（外链）并分类单个资源，生成带注释的包内片段
    async fn process_asset(&self, asset: &Asset) -> ProcessedAsset {
        let content = match &asset.inline_text {
            Some(text) => text.clone(),
            None => {
                debug!("开始抓取{}资源：{}", asset.kind.as_str(), asset.url);
                let fetched = self
                    .fetcher
                    .fetch(
                        &asset.url,
                        self.config.max_file_fetch_attempts,
                        self.config.file_retry_delay,
                    )
                    .await;
                if !fetched.success {
                    let error = fetched.error.unwrap_or_default();
                    warn!(
                        "{}资源抓取彻底失败：{} - 错误：{}",
                        asset.kind.as_str(),
                        asset.url,
                        error
                    );
                    return ProcessedAsset {
                        entry: self.failure_marker(asset, &error),
                        animation: None,
                    };
                }
                fetched.content
            }
        };

        let classification = self.classifier.classify(&asset.url, &content);
        let entry = annotate(asset, &classification, &content);
        let animation = self.to_animation_file(asset, &classification, content);
        ProcessedAsset { entry, animation }
    }

    fn to_animation_file(
        &self,
        asset: &Asset,
        classification: &Classification,
        content: String,
    ) -> Option<AnimationFile> {
        let library_label = classification.library.as_deref().unwrap_or("Generic");
        // 通用写法命中同样标记为动画，但置信度上限低于持久化阈值
        if classification.is_animation && classification.confidence > self.config.persistence_threshold {
            info!(
                "检测到{}动画资源：{}（{}）置信度{}%",
                asset.kind.as_str(),
                asset.url,
                library_label,
                classification.confidence
            );
            return Some(AnimationFile {
                url: asset.url.clone(),
                content,
                kind: asset.kind,
                library: classification.library.clone(),
                confidence: classification.confidence,
            });
        }

        if classification.confidence > 0.0 {
            debug!(
                "低置信度动画资源：{}（{}）置信度{}%",
                asset.url, library_label, classification.confidence
            );
        }
        None
    }

    fn failure_marker(&self, asset: &Asset, error: &str) -> String {
        let attempts = self.config.max_file_fetch_attempts;
        match asset.kind {
            AssetKind::Css => format!(
                "/* FETCH FAILED after {} attempts: {} - Error: {} */",
                attempts, asset.url, error
            ),
            AssetKind::Js => format!(
                "// FETCH FAILED after {} attempts: {} - Error: {}",
                attempts, asset.url, error
            ),
        }
    }
}

/// 包内片段的注释头
fn annotate(asset: &Asset, classification: &Classification, content: &str) -> String {
    let confidence = classification.confidence;
    let flag = |label: &str| {
        if classification.is_animation {
            format!("({} - {}%)", label, confidence)
        } else {
            String::new()
        }
    };
    let library = classification.library.as_deref().unwrap_or("None");

    match (asset.kind, asset.index) {
        (AssetKind::Css, None) => format!(
            "/* Fetched from: {} {} */\n{}",
            asset.url,
            flag("ANIMATION FILE"),
            content
        ),
        (AssetKind::Css, Some(i)) => {
            format!("/* Inline style {} {} */\n{}", i, flag("ANIMATION"), content)
        }
        (AssetKind::Js, None) => format!(
            "// Fetched from: {} {}\n// Library: {}\n{}",
            asset.url,
            flag("ANIMATION FILE"),
            library,
            content
        ),
        (AssetKind::Js, Some(i)) => format!(
            "// Inline script {} {}\n// Library: {}\n{}",
            i,
            flag("ANIMATION CODE"),
            library,
            content
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotations() {
        let gsap = Classification {
            is_animation: true,
            library: Some("GSAP".to_string()),
            confidence: 95.0,
        };
        let plain = Classification::none();

        let css = Asset::external("https://a.test/site.css", AssetKind::Css);
        assert_eq!(
            annotate(&css, &plain, "body{}"),
            "/* Fetched from: https://a.test/site.css  */\nbody{}"
        );

        let inline_css = Asset::inline(2, AssetKind::Css, "");
        assert_eq!(
            annotate(&inline_css, &gsap, ".a{}"),
            "/* Inline style 2 (ANIMATION - 95%) */\n.a{}"
        );

        let js = Asset::external("https://a.test/gsap.js", AssetKind::Js);
        assert_eq!(
            annotate(&js, &gsap, "gsap()"),
            "// Fetched from: https://a.test/gsap.js (ANIMATION FILE - 95%)\n// Library: GSAP\ngsap()"
        );

        let inline_js = Asset::inline(0, AssetKind::Js, "");
        assert_eq!(
            annotate(&inline_js, &plain, "x()"),
            "// Inline script 0 \n// Library: None\nx()"
        );
    }
}
