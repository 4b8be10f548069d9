//! 资源收集器：从页面提取结果中整理外部/内联样式与脚本
use tracing::debug;
use url::Url;

use crate::model::{Asset, AssetKind, CollectedAssets};
use crate::utils::resolve_against;

use super::html_extractor::PageDocument;

/// 按文档顺序收集四类资源
/// - 外部地址基于站点源解析，无法解析的丢弃
/// - 内联样式全部保留（含空内容），内联脚本仅保留非空内容
pub fn collect_assets(page: &PageDocument, base: &Url) -> CollectedAssets {
    let external_styles = page
        .stylesheet_hrefs
        .iter()
        .filter_map(|href| match resolve_against(base, href) {
            Some(url) => Some(Asset::external(url.to_string(), AssetKind::Css)),
            None => {
                debug!("跳过无法解析的样式表地址：{}", href);
                None
            }
        })
        .collect();

    let inline_styles = page
        .inline_styles
        .iter()
        .enumerate()
        .map(|(i, text)| Asset::inline(i, AssetKind::Css, text.clone()))
        .collect();

    let mut external_scripts = Vec::new();
    let mut inline_scripts = Vec::new();
    for script in &page.scripts {
        match script.src.as_deref() {
            Some(src) => match resolve_against(base, src) {
                Some(url) => external_scripts.push(Asset::external(url.to_string(), AssetKind::Js)),
                None => debug!("跳过无法解析的脚本地址：{}", src),
            },
            None if !script.text.is_empty() => {
                let index = inline_scripts.len();
                inline_scripts.push(Asset::inline(index, AssetKind::Js, script.text.clone()));
            }
            None => {}
        }
    }

    let assets = CollectedAssets {
        external_styles,
        inline_styles,
        external_scripts,
        inline_scripts,
    };
    debug!(
        "共收集资源{}个（外链CSS{}个、内联CSS{}个、外链JS{}个、内联JS{}个）",
        assets.total(),
        assets.external_styles.len(),
        assets.inline_styles.len(),
        assets.external_scripts.len(),
        assets.inline_scripts.len()
    );
    assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::html_extractor::RawScript;

    fn page() -> PageDocument {
        PageDocument {
            stylesheet_hrefs: vec!["/css/a.css".into(), "https://cdn.test/b.css".into()],
            inline_styles: vec![".x{}".into(), String::new()],
            scripts: vec![
                RawScript { src: Some("js/app.js".into()), text: String::new() },
                RawScript { src: None, text: String::new() },
                RawScript { src: None, text: "gsap.to('.a', {})".into() },
                RawScript { src: None, text: "console.log(1)".into() },
            ],
            ..PageDocument::default()
        }
    }

    #[test]
    fn test_collect_assets() {
        let base = Url::parse("https://acme.test").unwrap();
        let assets = collect_assets(&page(), &base);

        assert_eq!(assets.external_styles[0].url, "https://acme.test/css/a.css");
        assert_eq!(assets.external_styles[1].url, "https://cdn.test/b.css");
        assert_eq!(assets.inline_styles.len(), 2);
        assert_eq!(assets.inline_styles[1].url, "inline-style-1");
        assert_eq!(assets.external_scripts.len(), 1);
        assert_eq!(assets.external_scripts[0].url, "https://acme.test/js/app.js");

        // 空内联脚本被跳过，编号按保留下来的脚本计算
        assert_eq!(assets.inline_scripts.len(), 2);
        assert_eq!(assets.inline_scripts[0].url, "inline-script-0");
        assert_eq!(assets.inline_scripts[1].url, "inline-script-1");
        assert_eq!(assets.inline_scripts[1].inline_text.as_deref(), Some("console.log(1)"));
        assert_eq!(assets.total(), 7);
    }
}
