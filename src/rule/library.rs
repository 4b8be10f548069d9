//! 动画库分类规则表、基础设施黑名单与通用动画写法

use super::model::{wp, ClassificationRule};

/// URL中出现以下任意子串（忽略大小写）即视为非动画基础设施（统计、客服、广告）
pub const BLACKLIST: &[&str] = &[
    "googletagmanager",
    "google-analytics",
    "gtag",
    "facebook.net",
    "doubleclick",
    "adsystem",
    "googlesyndication",
    "hotjar",
    "intercom",
    "zendesk",
    "crisp.chat",
    "tawk.to",
];

/// 动画库规则表
pub const LIBRARY_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        library_name: "GSAP",
        rules: &[
            wp(r"gsap\.registerPlugin|gsap\.timeline|gsap\.to|gsap\.from", 95),
            wp(r"greensock|tweenmax|tweenlite|timelinemax", 90),
            wp(r"scrolltrigger|motionpath|drawsvg", 85),
            wp(r"gsap", 70),
        ],
    },
    ClassificationRule {
        library_name: "Three.js",
        rules: &[
            wp(r"new THREE\.|THREE\.Scene|THREE\.WebGLRenderer", 95),
            wp(r"PerspectiveCamera|BufferGeometry|MeshBasicMaterial", 90),
            wp(r"three\.js|three\.min\.js", 85),
            wp(r"webgl|canvas.*3d", 60),
        ],
    },
    ClassificationRule {
        library_name: "Lottie",
        rules: &[
            wp(r"lottie\.loadAnimation|bodymovin", 95),
            wp(r"lottie-web|lottie\.js", 85),
            wp(r"lottie", 70),
        ],
    },
    ClassificationRule {
        library_name: "AOS",
        rules: &[
            wp(r"AOS\.init|data-aos", 95),
            wp(r"aos\.js|animate.*on.*scroll", 85),
        ],
    },
    ClassificationRule {
        library_name: "Anime.js",
        rules: &[
            wp(r"anime\(\{|anime\.timeline", 95),
            wp(r"anime\.js|animejs", 85),
        ],
    },
    ClassificationRule {
        library_name: "Locomotive Scroll",
        rules: &[
            wp(r"new LocomotiveScroll|data-scroll", 95),
            wp(r"locomotive-scroll", 85),
        ],
    },
    ClassificationRule {
        library_name: "Framer Motion",
        rules: &[wp(r"framer-motion|motion\.|useAnimation|AnimatePresence", 95)],
    },
];

/// 通用动画写法（仅在没有任何库命中时使用，只作用于内容本身）
pub const GENERIC_PATTERNS: &[&str] = &[
    r"@keyframes|animation:|transform:|transition:",
    r"requestAnimationFrame|setInterval.*animation",
    r"\.animate\(|\.transition\(",
    r"transform.*translate|rotate|scale",
    r"opacity.*transition|visibility.*transition",
    r"cubic-bezier|ease-in|ease-out",
];

/// 每次通用写法命中的得分
pub const GENERIC_MATCH_SCORE: f64 = 10.0;
/// 通用得分需严格超过该值才视为动画
pub const GENERIC_MIN_SCORE: f64 = 20.0;
/// 通用检测的置信度上限
pub const GENERIC_CONFIDENCE_CAP: f64 = 50.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_ordered_by_weight() {
        for rule in LIBRARY_RULES {
            assert!(!rule.rules.is_empty(), "{} has no rules", rule.library_name);
            let weights: Vec<u32> = rule.rules.iter().map(|p| p.weight).collect();
            let mut sorted = weights.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(weights, sorted, "{} rules not in descending weight", rule.library_name);
        }
    }
}
