//! 动画库分类器
//! 对单个资源（URL + 内容）按规则表加权打分，输出是否为动画资源及置信度
//! 纯函数：无内部状态，相同输入必然得到相同输出，任何输入都不会panic或返回错误

use tracing::debug;

use crate::compiler::{CompiledLibraryRule, CompiledRuleLibrary, BUILTIN_RULES};
use crate::config::PERSISTENCE_THRESHOLD;
use crate::model::Classification;
use crate::rule::library::{GENERIC_CONFIDENCE_CAP, GENERIC_MATCH_SCORE, GENERIC_MIN_SCORE};

/// 单个库的打分结果
#[derive(Debug, Clone, Copy, PartialEq)]
struct LibraryScore {
    library: &'static str,
    confidence: f64,
}

/// 动画库分类器
#[derive(Debug, Clone, Copy)]
pub struct LibraryClassifier {
    rules: &'static CompiledRuleLibrary,
    // 置信度严格大于该值才标记为动画
    persistence_threshold: f64,
}

impl Default for LibraryClassifier {
    fn default() -> Self {
        Self::with_persistence_threshold(PERSISTENCE_THRESHOLD)
    }
}

impl LibraryClassifier {
    pub fn with_persistence_threshold(persistence_threshold: f64) -> Self {
        Self {
            rules: &*BUILTIN_RULES,
            persistence_threshold,
        }
    }

    /// 分类入口
    pub fn classify(&self, url: &str, content: &str) -> Classification {
        let url_lower = url.to_lowercase();

        // 1. 黑名单短路
        if self.is_blacklisted(&url_lower) {
            debug!("黑名单资源，跳过分类：{}", url);
            return Classification::none();
        }

        // 2. 按库打分，取最高置信度
        let haystack = format!("{} {}", url_lower, content.to_lowercase());
        let mut best: Option<LibraryScore> = None;
        for library in &self.rules.libraries {
            let Some(score) = Self::score_library(library, &haystack) else {
                continue;
            };
            if score.confidence > best.map_or(0.0, |b| b.confidence) {
                best = Some(score);
            }
        }

        // 3. 无任何库命中时使用通用动画写法兜底
        let best_confidence = best.map_or(0.0, |b| b.confidence);
        if best_confidence == 0.0 {
            let generic_score = self.generic_score(&content.to_lowercase());
            if generic_score > GENERIC_MIN_SCORE {
                return Classification {
                    is_animation: true,
                    library: None,
                    confidence: generic_score.min(GENERIC_CONFIDENCE_CAP),
                };
            }
        }

        Classification {
            is_animation: best_confidence > self.persistence_threshold,
            library: best.map(|b| b.library.to_string()),
            confidence: best_confidence,
        }
    }

    fn is_blacklisted(&self, url_lower: &str) -> bool {
        self.rules
            .blacklist
            .iter()
            .any(|item| url_lower.contains(item.as_str()))
    }

    /// 单库打分：`confidence = min(100, Σ(weight × 命中次数) / 命中规则数)`
    /// 规则按顺序求值，完全落在前序规则已命中文本范围内的匹配不再计数
    /// （例如 `gsap.registerplugin` 中的 `gsap` 不会被通用规则 `gsap` 重复计分）
    fn score_library(library: &CompiledLibraryRule, haystack: &str) -> Option<LibraryScore> {
        let mut claimed = ClaimedSpans::default();
        let mut total_score = 0.0;
        let mut match_count = 0usize;

        for pattern in &library.patterns {
            let spans: Vec<(usize, usize)> = pattern
                .regex
                .find_iter(haystack)
                .map(|m| (m.start(), m.end()))
                .filter(|&(start, end)| !claimed.covers(start, end))
                .collect();

            if spans.is_empty() {
                continue;
            }

            total_score += pattern.weight * spans.len() as f64;
            match_count += 1;
            claimed.extend(spans);
        }

        if match_count == 0 {
            return None;
        }

        Some(LibraryScore {
            library: library.library_name,
            confidence: (total_score / match_count as f64).min(100.0),
        })
    }

    /// 通用动画写法得分：总命中次数 × 10
    fn generic_score(&self, content_lower: &str) -> f64 {
        let total_matches: usize = self
            .rules
            .generic_patterns
            .iter()
            .map(|regex| regex.find_iter(content_lower).count())
            .sum();
        total_matches as f64 * GENERIC_MATCH_SCORE
    }
}

/// 已被前序规则命中的文本区间（有序、互不相交）
#[derive(Debug, Default)]
struct ClaimedSpans {
    spans: Vec<(usize, usize)>,
}

impl ClaimedSpans {
    fn covers(&self, start: usize, end: usize) -> bool {
        let idx = self.spans.partition_point(|&(s, _)| s <= start);
        idx > 0 && self.spans[idx - 1].1 >= end
    }

    fn extend(&mut self, new_spans: Vec<(usize, usize)>) {
        self.spans.extend(new_spans);
        self.spans.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(self.spans.len());
        for (start, end) in self.spans.drain(..) {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        self.spans = merged;
    }
}

/// 使用内置规则分类
pub fn classify(url: &str, content: &str) -> Classification {
    LibraryClassifier::default().classify(url, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsap_register_plugin() {
        let result = classify("inline-script-0", "gsap.registerPlugin");
        assert_eq!(result.library.as_deref(), Some("GSAP"));
        assert!(result.confidence >= 95.0);
        assert!(result.is_animation);
    }

    #[test]
    fn test_gsap_with_plugin_names() {
        // 95 (registerplugin) + 85 (scrolltrigger) over two rules
        let result = classify("inline-script-0", "gsap.registerPlugin(ScrollTrigger)");
        assert_eq!(result.library.as_deref(), Some("GSAP"));
        assert_eq!(result.confidence, 90.0);
    }

    #[test]
    fn test_repeated_low_weight_matches_inflate_confidence() {
        // 3 × 70 on a single rule, capped at 100
        let result = classify("https://example.com/app.js", "gsap gsap gsap");
        assert_eq!(result.library.as_deref(), Some("GSAP"));
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_url_contributes_to_score() {
        let result = classify("https://cdn.example.com/lottie-web.js", "");
        assert_eq!(result.library.as_deref(), Some("Lottie"));
        // lottie-web 85, bare lottie inside lottie-web is already claimed
        assert_eq!(result.confidence, 85.0);
    }

    #[test]
    fn test_blacklisted_url_short_circuits() {
        let result = classify(
            "https://www.GoogleTagManager.com/gtm.js",
            "gsap.registerPlugin(ScrollTrigger); gsap.timeline()",
        );
        assert_eq!(result, Classification::none());
    }

    #[test]
    fn test_no_match_at_all() {
        let result = classify("https://example.com/site.css", "body { color: red; }");
        assert!(!result.is_animation);
        assert_eq!(result.library, None);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_generic_heuristic_capped_at_50() {
        let css = "@keyframes spin {} .a { transition: all 1s ease-in-out; transform: rotate(3deg) }";
        let result = classify("inline-style-0", css);
        assert!(result.is_animation);
        assert_eq!(result.library, None);
        assert_eq!(result.confidence, 50.0);
    }

    #[test]
    fn test_generic_heuristic_below_threshold() {
        let result = classify("inline-style-0", ".a { transition: none }");
        assert_eq!(result, Classification::none());
    }

    #[test]
    fn test_low_confidence_library_not_animation() {
        // 仅 Three.js 的 webgl 规则命中：60，不超过阈值
        let result = classify("inline-script-1", "if (supportsWebGL) {}");
        assert_eq!(result.library.as_deref(), Some("Three.js"));
        assert_eq!(result.confidence, 60.0);
        assert!(!result.is_animation);
    }

    #[test]
    fn test_custom_persistence_threshold() {
        let classifier = LibraryClassifier::with_persistence_threshold(50.0);
        let result = classifier.classify("inline-script-1", "if (supportsWebGL) {}");
        assert_eq!(result.confidence, 60.0);
        assert!(result.is_animation);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let content = "new THREE.Scene(); const cam = new THREE.PerspectiveCamera();";
        let first = classify("https://example.com/three.min.js", content);
        let second = classify("https://example.com/three.min.js", content);
        assert_eq!(first, second);
        assert_eq!(first.library.as_deref(), Some("Three.js"));
    }

    #[test]
    fn test_confidence_always_in_range() {
        let samples = [
            ("", ""),
            ("https://x.com/a.js", "gsap gsap gsap gsap gsap gsap gsap gsap"),
            ("inline-style-0", "@keyframes a{} @keyframes b{} @keyframes c{} @keyframes d{} @keyframes e{} @keyframes f{}"),
            ("https://x.com/aos.js", "AOS.init(); data-aos data-aos data-aos"),
            ("https://x.com/🙂.js", "ÄÖÜ anime({ anime.timeline"),
        ];
        for (url, content) in samples {
            let result = classify(url, content);
            assert!((0.0..=100.0).contains(&result.confidence), "{url}: {}", result.confidence);
        }
    }

    #[test]
    fn test_claimed_spans_merge() {
        let mut claimed = ClaimedSpans::default();
        claimed.extend(vec![(10, 20), (0, 4)]);
        claimed.extend(vec![(18, 25)]);
        assert!(claimed.covers(0, 4));
        assert!(claimed.covers(12, 24));
        assert!(!claimed.covers(3, 6));
        assert!(!claimed.covers(30, 31));
    }
}
