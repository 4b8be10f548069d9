//! CDN解析：库名集合 -> 在隔离文档中独立运行这些库所需的外部资源

use tracing::debug;

use crate::rule::cdn_urls;

/// 按输入顺序拼接各库的CDN地址
/// - 库名按首次出现去重，保证同一个库的资源只出现一次
/// - 未知库不贡献任何地址
/// - 不同库之间重复的URL不做去重
pub fn resolve_cdn<I, S>(libraries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut urls = Vec::new();

    for library in libraries {
        let library = library.as_ref();
        if seen.iter().any(|s| s == library) {
            continue;
        }
        seen.push(library.to_string());
        urls.extend(cdn_urls(library).iter().map(|u| u.to_string()));
    }

    debug!("库{:?}所需CDN地址：{:?}", seen, urls);
    urls
}

/// 资源是否为样式表（决定生成 `<link>` 还是 `<script>`）
pub fn is_stylesheet_url(url: &str) -> bool {
    url.ends_with(".css")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_gsap() {
        assert_eq!(
            resolve_cdn(["GSAP"]),
            vec![
                "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/gsap.min.js",
                "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/ScrollTrigger.min.js",
                "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/TextPlugin.min.js",
                "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/MotionPathPlugin.min.js",
            ]
        );
    }

    #[test]
    fn test_resolve_empty() {
        assert!(resolve_cdn(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_resolve_order_and_unknown() {
        let urls = resolve_cdn(["AOS", "Nope", "Lottie", "AOS"]);
        assert_eq!(
            urls,
            vec![
                "https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.js",
                "https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.css",
                "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js",
            ]
        );
    }

    #[test]
    fn test_stylesheet_detection() {
        assert!(is_stylesheet_url("https://cdn.jsdelivr.net/npm/swiper@8/swiper-bundle.min.css"));
        assert!(!is_stylesheet_url("https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.js"));
    }
}
