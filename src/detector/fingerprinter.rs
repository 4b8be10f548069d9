//! 技术指纹识别
//! 与分类器的置信度模型相互独立：特征正则在聚合文本中命中一次即纳入

use tracing::debug;

use crate::compiler::{CompiledRuleLibrary, BUILTIN_RULES};
use crate::model::AnimationFile;

/// 技术指纹识别器
#[derive(Debug, Clone, Copy)]
pub struct TechFingerprinter {
    rules: &'static CompiledRuleLibrary,
}

impl Default for TechFingerprinter {
    fn default() -> Self {
        Self {
            rules: &*BUILTIN_RULES,
        }
    }
}

impl TechFingerprinter {
    /// 扫描聚合文本（完整HTML + CSS + JS），按指纹表顺序返回命中的技术
    pub fn fingerprint(&self, aggregate_text: &str) -> Vec<String> {
        self.rules
            .signatures
            .iter()
            .filter(|sig| sig.regex.is_match(aggregate_text))
            .map(|sig| sig.name.to_string())
            .collect()
    }

    /// 指纹扫描后并入分类器在动画文件中识别出的库名（去重，保持首次出现顺序）
    pub fn fingerprint_with_libraries(
        &self,
        aggregate_text: &str,
        animation_files: &[AnimationFile],
    ) -> Vec<String> {
        let mut technologies = self.fingerprint(aggregate_text);
        merge_libraries(&mut technologies, animation_files);
        debug!("识别到的技术：{:?}", technologies);
        technologies
    }
}

/// 将动画文件的库名追加到技术列表（已存在的跳过）
pub fn merge_libraries(technologies: &mut Vec<String>, animation_files: &[AnimationFile]) {
    for file in animation_files {
        if let Some(library) = &file.library {
            if !technologies.iter().any(|t| t == library) {
                technologies.push(library.clone());
            }
        }
    }
}

/// 使用内置指纹表扫描
pub fn fingerprint(aggregate_text: &str) -> Vec<String> {
    TechFingerprinter::default().fingerprint(aggregate_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetKind;

    fn animation_file(library: &str) -> AnimationFile {
        AnimationFile {
            url: "inline-script-0".to_string(),
            content: String::new(),
            kind: AssetKind::Js,
            library: Some(library.to_string()),
            confidence: 95.0,
        }
    }

    #[test]
    fn test_fingerprint_in_table_order() {
        let text = "<div class='swiper'></div> <script src='/js/jquery.min.js'></script> React.createElement";
        assert_eq!(fingerprint(text), vec!["React", "jQuery", "Swiper"]);
    }

    #[test]
    fn test_fingerprint_empty_text() {
        assert!(fingerprint("").is_empty());
    }

    #[test]
    fn test_vue_mustache_signature() {
        assert_eq!(fingerprint("<p>{{ message }}</p>"), vec!["Vue"]);
    }

    #[test]
    fn test_merge_libraries_skips_existing() {
        let techs = TechFingerprinter::default().fingerprint_with_libraries(
            "gsap.to('.box', {x: 100})",
            &[animation_file("GSAP"), animation_file("Anime.js"), animation_file("Anime.js")],
        );
        assert_eq!(techs, vec!["GSAP", "Anime.js"]);
    }
}
