//! 分析结果模型

use serde::{Deserialize, Serialize};

use super::asset::AssetKind;

/// 单次资源抓取结果（失败信息编码在返回值中，不抛出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub success: bool,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchResult {
    pub fn ok(content: String) -> Self {
        Self {
            success: true,
            content,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error.into()),
        }
    }
}

/// 资源分类结果，置信度范围 [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub is_animation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    pub confidence: f64,
}

impl Classification {
    /// 未识别任何动画特征
    pub fn none() -> Self {
        Self {
            is_animation: false,
            library: None,
            confidence: 0.0,
        }
    }
}

/// 高置信度动画资源（置信度超过持久化阈值才会生成）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationFile {
    pub url: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    pub confidence: f64,
}

impl AnimationFile {
    pub fn is_inline(&self) -> bool {
        self.url.contains("inline")
    }
}

/// 一次完整分析的聚合结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    pub tech_guesses: Vec<String>,
    pub internal_links: usize,
    pub external_links: usize,
    pub images: Vec<String>,
    pub stylesheets: usize,
    pub open_graph_tags: usize,
    #[serde(rename = "fullHTML")]
    pub full_html: String,
    #[serde(rename = "fullCSS")]
    pub full_css: String,
    #[serde(rename = "fullJS")]
    pub full_js: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub animation_files: Vec<AnimationFile>,
    pub required_cdn_urls: Vec<String>,
}

impl AnalysisResult {
    /// 置信度严格高于阈值的动画文件数量
    pub fn count_above(&self, threshold: f64) -> usize {
        self.animation_files
            .iter()
            .filter(|f| f.confidence > threshold)
            .count()
    }

    /// 动画文件中出现过的库名（按首次出现顺序去重）
    pub fn detected_libraries(&self) -> Vec<String> {
        let mut libraries: Vec<String> = Vec::new();
        for file in &self.animation_files {
            if let Some(library) = &file.library {
                if !libraries.contains(library) {
                    libraries.push(library.clone());
                }
            }
        }
        libraries
    }

    pub fn animation_files_of(&self, kind: AssetKind) -> impl Iterator<Item = &AnimationFile> {
        self.animation_files.iter().filter(move |f| f.kind == kind)
    }
}

/// 一次分析会话（不可变值，由 `SiteInspector::analyze` 返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSession {
    pub id: u64,
    pub target_url: String,
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(library: Option<&str>, confidence: f64, kind: AssetKind) -> AnimationFile {
        AnimationFile {
            url: "https://cdn.example.com/a.js".to_string(),
            content: String::new(),
            kind,
            library: library.map(str::to_string),
            confidence,
        }
    }

    #[test]
    fn test_detected_libraries_first_seen_order() {
        let result = AnalysisResult {
            animation_files: vec![
                file(Some("GSAP"), 90.0, AssetKind::Js),
                file(None, 70.0, AssetKind::Css),
                file(Some("AOS"), 95.0, AssetKind::Css),
                file(Some("GSAP"), 100.0, AssetKind::Js),
            ],
            ..Default::default()
        };
        assert_eq!(result.detected_libraries(), vec!["GSAP", "AOS"]);
        assert_eq!(result.count_above(80.0), 3);
        assert_eq!(result.animation_files_of(AssetKind::Css).count(), 2);
    }

    #[test]
    fn test_result_json_field_names() {
        let result = AnalysisResult {
            base_url: "https://example.com".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["baseURL"], "https://example.com");
        assert!(json.get("requiredCdnUrls").is_some());
        assert!(json.get("fullCSS").is_some());
    }
}
