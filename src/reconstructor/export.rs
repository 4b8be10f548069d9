//! 导出产物：原始包、预览文档、纯动画提取、统计与提示词文本
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{HIGH_CONFIDENCE_THRESHOLD, PERSISTENCE_THRESHOLD};
use crate::error::InspectResult;
use crate::model::{AnalysisResult, AnimationFile, AssetKind};

use super::preview::DocumentReconstructor;

pub const HTML_FILE: &str = "analyzed-site.html";
pub const CSS_FILE: &str = "analyzed-site.css";
pub const JS_FILE: &str = "analyzed-site.js";
pub const PREVIEW_FILE: &str = "complete-site-with-enhanced-animations.html";
pub const ANIMATIONS_CSS_FILE: &str = "animations-only.css";
pub const ANIMATIONS_JS_FILE: &str = "animations-only.js";
pub const PROMPT_FILE: &str = "design_prompt.txt";

/// 动画质量统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationStats {
    pub total_files: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub css_animations: usize,
    pub js_animations: usize,
    pub libraries: Vec<String>,
    pub has_inline_animations: bool,
    pub estimated_completeness: usize,
}

impl AnimationStats {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let files = &result.animation_files;
        let high = files
            .iter()
            .filter(|f| f.confidence > HIGH_CONFIDENCE_THRESHOLD)
            .count();
        let medium = files
            .iter()
            .filter(|f| f.confidence > PERSISTENCE_THRESHOLD && f.confidence <= HIGH_CONFIDENCE_THRESHOLD)
            .count();

        Self {
            total_files: files.len(),
            high_confidence: high,
            medium_confidence: medium,
            css_animations: result.animation_files_of(AssetKind::Css).count(),
            js_animations: result.animation_files_of(AssetKind::Js).count(),
            libraries: result.detected_libraries(),
            has_inline_animations: files.iter().any(AnimationFile::is_inline),
            estimated_completeness: (high * 30 + medium * 15).min(100),
        }
    }
}

/// 仅包含动画文件的 CSS/JS 提取
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationExtract {
    pub css: String,
    pub js: String,
}

pub fn animations_only(result: &AnalysisResult) -> AnimationExtract {
    let label = |f: &AnimationFile| f.library.clone().unwrap_or_else(|| "Animation".to_string());

    let css = result
        .animation_files_of(AssetKind::Css)
        .map(|f| format!("/* {} - {} - Confidence: {}% */\n{}", label(f), f.url, f.confidence, f.content))
        .collect::<Vec<_>>()
        .join("\n\n");
    let js = result
        .animation_files_of(AssetKind::Js)
        .map(|f| format!("// {} - {} - Confidence: {}%\n{}", label(f), f.url, f.confidence, f.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    AnimationExtract { css, js }
}

/// 设计复刻提示词（固定模板，库列表不去重）
pub fn build_prompt(result: &AnalysisResult) -> String {
    let libraries = result
        .animation_files
        .iter()
        .filter_map(|f| f.library.as_deref())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let libraries = if libraries.is_empty() {
        "None detected".to_string()
    } else {
        libraries
    };

    format!(
        "Here is the HTML and CSS code representing the pixel-perfect design of the website I want to create. Adapt it completely to the specified framework (e.g., React, Svelte, Vue). Do not alter the design or omit any elements.

IMPORTANT: This site uses the following animation libraries: {libraries}

High-confidence animations detected: {high}

Here are the CDN URLs for these libraries:
{cdn}

Here is the HTML code:
```html
{html}
```

Here is the CSS code:
```css
{css}
```

Here is the JavaScript code (including animations):
```javascript
{js}
```",
        libraries = libraries,
        high = result.count_above(HIGH_CONFIDENCE_THRESHOLD),
        cdn = result.required_cdn_urls.join("\n"),
        html = result.full_html,
        css = result.full_css,
        js = result.full_js,
    )
}

/// 全部导出产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub html: String,
    pub css: String,
    pub js: String,
    pub preview: String,
    pub animations_css: String,
    pub animations_js: String,
    pub prompt: String,
}

impl ExportBundle {
    pub fn from_result(result: &AnalysisResult, reconstructor: &DocumentReconstructor) -> Self {
        let animations = animations_only(result);
        Self {
            html: result.full_html.clone(),
            css: result.full_css.clone(),
            js: result.full_js.clone(),
            preview: reconstructor.build_preview(result),
            animations_css: animations.css,
            animations_js: animations.js,
            prompt: build_prompt(result),
        }
    }

    /// (文件名, 内容) 列表
    pub fn artifacts(&self) -> [(&'static str, &str); 7] {
        [
            (HTML_FILE, self.html.as_str()),
            (CSS_FILE, self.css.as_str()),
            (JS_FILE, self.js.as_str()),
            (PREVIEW_FILE, self.preview.as_str()),
            (ANIMATIONS_CSS_FILE, self.animations_css.as_str()),
            (ANIMATIONS_JS_FILE, self.animations_js.as_str()),
            (PROMPT_FILE, self.prompt.as_str()),
        ]
    }

    /// 写入目录（不存在则创建），返回写入的文件路径
    pub async fn write_to_dir(&self, dir: impl AsRef<Path>) -> InspectResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let mut written = Vec::with_capacity(7);
        for (name, content) in self.artifacts() {
            let path = dir.join(name);
            tokio::fs::write(&path, content).await?;
            written.push(path);
        }
        info!("已写出{}个导出文件到 {}", written.len(), dir.display());
        Ok(written)
    }
}
