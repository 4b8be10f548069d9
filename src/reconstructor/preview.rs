//! 预览文档重建
//! 固定顺序：base → CDN 标签 → 动画样式 → 常规样式 → 页面主体 → 初始化脚本 → 动画脚本 → 常规脚本
use std::time::Duration;

use tracing::debug;

use crate::config::InspectorConfig;
use crate::detector::is_stylesheet_url;
use crate::model::{AnalysisResult, AssetKind};

use super::init_script::{build_init_script, CDN_LOAD_MARKERS};

const HELPER_CSS: &str = r#"/* Enhanced Animation CSS helpers */
.animate-in { animation-play-state: running !important; }
body.animations-loaded .fade-in { animation: fadeIn 1s ease-in-out; }
body.animations-loaded .slide-up { animation: slideUp 1s ease-out; }

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slideUp {
  from { opacity: 0; transform: translateY(50px); }
  to { opacity: 1; transform: translateY(0); }
}

* { animation-fill-mode: both; }
canvas { display: block; width: 100%; height: 100%; }"#;

/// 预览文档构建器
#[derive(Debug, Clone)]
pub struct DocumentReconstructor {
    high_confidence_threshold: f64,
    init_grace_timeout: Duration,
}

impl Default for DocumentReconstructor {
    fn default() -> Self {
        Self::from_config(&InspectorConfig::default())
    }
}

impl DocumentReconstructor {
    pub fn from_config(config: &InspectorConfig) -> Self {
        Self {
            high_confidence_threshold: config.high_confidence_threshold,
            init_grace_timeout: config.init_grace_timeout,
        }
    }

    /// CDN 资源标签（`.css` 结尾为样式表，其余为脚本）
    pub fn cdn_tags(&self, urls: &[String]) -> String {
        urls.iter()
            .map(|url| {
                if is_stylesheet_url(url) {
                    format!(
                        r#"    <link rel="stylesheet" href="{}" crossorigin="anonymous" {}>"#,
                        url, CDN_LOAD_MARKERS
                    )
                } else {
                    format!(
                        r#"    <script src="{}" crossorigin="anonymous" {}></script>"#,
                        url, CDN_LOAD_MARKERS
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 构建完整的预览文档（纯函数，不会失败）
    pub fn build_preview(&self, result: &AnalysisResult) -> String {
        let high_confidence = result.count_above(self.high_confidence_threshold);
        let animation_css = join_animation_content(result, AssetKind::Css);
        let animation_js = join_animation_content(result, AssetKind::Js);
        let init_script =
            build_init_script(&result.required_cdn_urls, high_confidence, self.init_grace_timeout);

        debug!(
            "构建预览文档：CDN地址{}个、动画文件{}个、高置信度{}个",
            result.required_cdn_urls.len(),
            result.animation_files.len(),
            high_confidence
        );

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <base href="{base_url}">
    <title>UI Preview with Enhanced Animation Detection</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    
    <!-- CDN Libraries for Animations -->
{cdn_tags}
    
    <!-- Animation CSS -->
    <style id="animation-styles">
{animation_css}

{helper_css}
    </style>
    
    <!-- Regular CSS -->
    <style id="regular-styles">
{full_css}
    </style>
</head>
<body>
{full_html}

<!-- Enhanced Animation Initialization Script -->
<script>
{init_script}
</script>

<!-- Animation JavaScript -->
<script>
{animation_js}
</script>

<!-- Regular JavaScript -->
<script>
{full_js}
</script>

<script>
console.log('Enhanced preview ready');
console.log('Analysis method: Basic');
console.log('Animation files detected:', {animation_files});
console.log('High-confidence animations:', {high_confidence});
</script>
</body>
</html>"#,
            base_url = result.base_url,
            cdn_tags = self.cdn_tags(&result.required_cdn_urls),
            animation_css = animation_css,
            helper_css = HELPER_CSS,
            full_css = result.full_css,
            full_html = result.full_html,
            init_script = init_script,
            animation_js = animation_js,
            full_js = result.full_js,
            animation_files = result.animation_files.len(),
            high_confidence = high_confidence,
        )
    }
}

fn join_animation_content(result: &AnalysisResult, kind: AssetKind) -> String {
    result
        .animation_files_of(kind)
        .map(|f| f.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 以默认阈值构建预览文档
pub fn build_preview(result: &AnalysisResult) -> String {
    DocumentReconstructor::default().build_preview(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnimationFile;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            base_url: "https://acme.test".to_string(),
            full_html: r#"<body class="home"><h1 class="hero">Acme</h1></body>"#.to_string(),
            full_css: "/* Fetched from: https://acme.test/site.css  */\n.site{}".to_string(),
            full_js: "// Inline script 0 \n// Library: None\nwindow.regularBundle = true;".to_string(),
            animation_files: vec![
                AnimationFile {
                    url: "https://acme.test/anim.css".to_string(),
                    content: ".anim-marker{}".to_string(),
                    kind: AssetKind::Css,
                    library: Some("AOS".to_string()),
                    confidence: 90.0,
                },
                AnimationFile {
                    url: "https://acme.test/gsap.js".to_string(),
                    content: "window.animationBundle = true;".to_string(),
                    kind: AssetKind::Js,
                    library: Some("GSAP".to_string()),
                    confidence: 75.0,
                },
            ],
            required_cdn_urls: vec![
                "https://unpkg.com/aos@2.3.1/dist/aos.css".to_string(),
                "https://unpkg.com/aos@2.3.1/dist/aos.js".to_string(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_single_base_tag() {
        let html = build_preview(&sample_result());
        assert_eq!(html.matches("<base").count(), 1);
        assert!(html.contains(r#"<base href="https://acme.test">"#));
    }

    #[test]
    fn test_head_order() {
        let html = build_preview(&sample_result());
        let cdn = html.find("https://unpkg.com/aos@2.3.1/dist/aos.css").unwrap();
        let animation = html.find(r#"<style id="animation-styles">"#).unwrap();
        let anim_content = html.find(".anim-marker{}").unwrap();
        let regular = html.find(r#"<style id="regular-styles">"#).unwrap();
        let site_css = html.find(".site{}").unwrap();
        assert!(cdn < animation && animation < anim_content);
        assert!(anim_content < regular && regular < site_css);
        assert!(site_css < html.find("</head>").unwrap());
    }

    #[test]
    fn test_body_order() {
        let html = build_preview(&sample_result());
        let body = html.find(r#"<h1 class="hero">"#).unwrap();
        let init = html.find("async function initializeAnimations()").unwrap();
        let animation_js = html.find("window.animationBundle").unwrap();
        let regular_js = html.find("window.regularBundle").unwrap();
        assert!(body < init && init < animation_js && animation_js < regular_js);
    }

    #[test]
    fn test_cdn_tag_kinds() {
        let tags = DocumentReconstructor::default().cdn_tags(&sample_result().required_cdn_urls);
        let lines: Vec<&str> = tags.lines().collect();
        assert!(lines[0].starts_with(r#"    <link rel="stylesheet" href="https://unpkg.com/aos@2.3.1/dist/aos.css""#));
        assert!(lines[1].starts_with(r#"    <script src="https://unpkg.com/aos@2.3.1/dist/aos.js""#));
        assert!(lines.iter().all(|l| l.contains("data-cdn-resource")));
    }

    #[test]
    fn test_footer_counts() {
        let html = build_preview(&sample_result());
        assert!(html.contains("console.log('Animation files detected:', 2);"));
        assert!(html.contains("console.log('High-confidence animations:', 1);"));
    }

    #[test]
    fn test_empty_result_still_complete() {
        let html = build_preview(&AnalysisResult::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert_eq!(html.matches("<base").count(), 1);
    }
}
