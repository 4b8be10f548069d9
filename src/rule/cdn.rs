//! 库名 -> CDN资源映射

use super::model::CdnEntry;

pub const CDN_MAP: &[CdnEntry] = &[
    CdnEntry {
        library: "GSAP",
        urls: &[
            "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/gsap.min.js",
            "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/ScrollTrigger.min.js",
            "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/TextPlugin.min.js",
            "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/MotionPathPlugin.min.js",
        ],
    },
    CdnEntry {
        library: "Three.js",
        urls: &[
            "https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js",
            "https://cdnjs.cloudflare.com/ajax/libs/dat-gui/0.7.9/dat.gui.min.js",
        ],
    },
    CdnEntry {
        library: "Lottie",
        urls: &["https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js"],
    },
    CdnEntry {
        library: "AOS",
        urls: &[
            "https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.js",
            "https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.css",
        ],
    },
    CdnEntry {
        library: "Anime.js",
        urls: &["https://cdnjs.cloudflare.com/ajax/libs/animejs/3.2.1/anime.min.js"],
    },
    CdnEntry {
        library: "Locomotive Scroll",
        urls: &[
            "https://cdn.jsdelivr.net/npm/locomotive-scroll@4.1.4/dist/locomotive-scroll.min.js",
            "https://cdn.jsdelivr.net/npm/locomotive-scroll@4.1.4/dist/locomotive-scroll.min.css",
        ],
    },
    CdnEntry {
        library: "Barba.js",
        urls: &["https://cdnjs.cloudflare.com/ajax/libs/barba.js/1.0.0/barba.min.js"],
    },
    CdnEntry {
        library: "ScrollMagic",
        urls: &[
            "https://cdnjs.cloudflare.com/ajax/libs/ScrollMagic/2.0.8/ScrollMagic.min.js",
            "https://cdnjs.cloudflare.com/ajax/libs/ScrollMagic/2.0.8/plugins/animation.gsap.min.js",
        ],
    },
    CdnEntry {
        library: "Velocity.js",
        urls: &["https://cdnjs.cloudflare.com/ajax/libs/velocity/2.0.6/velocity.min.js"],
    },
    CdnEntry {
        library: "Swiper",
        urls: &[
            "https://cdn.jsdelivr.net/npm/swiper@8/swiper-bundle.min.js",
            "https://cdn.jsdelivr.net/npm/swiper@8/swiper-bundle.min.css",
        ],
    },
    CdnEntry {
        library: "Particles",
        urls: &["https://cdn.jsdelivr.net/npm/particles.js@2.0.0/particles.min.js"],
    },
    // 分类器可能产出的每个库名都必须在此有条目
    CdnEntry {
        library: "Framer Motion",
        urls: &["https://unpkg.com/framer-motion@10.16.4/dist/framer-motion.js"],
    },
];

/// 查询库的CDN资源，未知库返回空切片
pub fn cdn_urls(library: &str) -> &'static [&'static str] {
    CDN_MAP
        .iter()
        .find(|entry| entry.library == library)
        .map(|entry| entry.urls)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::library::LIBRARY_RULES;

    #[test]
    fn test_every_classifier_library_has_cdn_entry() {
        for rule in LIBRARY_RULES {
            assert!(
                !cdn_urls(rule.library_name).is_empty(),
                "missing CDN entry for {}",
                rule.library_name
            );
        }
    }

    #[test]
    fn test_unknown_library() {
        assert!(cdn_urls("Unknown Lib").is_empty());
    }
}
