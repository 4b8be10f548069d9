//! 资源模型：页面中收集到的样式表与脚本

use serde::{Deserialize, Serialize};

/// 资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Css => "css",
            AssetKind::Js => "js",
        }
    }
}

/// 资源来源：外链（有URL）或内联（有文本，无URL）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetOrigin {
    External,
    Inline,
}

/// 单个资源
/// - 外链资源：`url` 为解析后的绝对地址，`inline_text` 为空
/// - 内联资源：`url` 为 `inline-style-{i}` / `inline-script-{i}` 标签，`index` 为发现序号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
    pub origin: AssetOrigin,
    pub kind: AssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip)]
    pub inline_text: Option<String>,
}

impl Asset {
    pub fn external(url: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            url: url.into(),
            origin: AssetOrigin::External,
            kind,
            index: None,
            inline_text: None,
        }
    }

    pub fn inline(index: usize, kind: AssetKind, text: impl Into<String>) -> Self {
        let url = match kind {
            AssetKind::Css => format!("inline-style-{}", index),
            AssetKind::Js => format!("inline-script-{}", index),
        };
        Self {
            url,
            origin: AssetOrigin::Inline,
            kind,
            index: Some(index),
            inline_text: Some(text.into()),
        }
    }
}

/// 资源收集结果（顺序即发现顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedAssets {
    pub external_styles: Vec<Asset>,
    pub inline_styles: Vec<Asset>,
    pub external_scripts: Vec<Asset>,
    pub inline_scripts: Vec<Asset>,
}

impl CollectedAssets {
    pub fn total(&self) -> usize {
        self.external_styles.len()
            + self.inline_styles.len()
            + self.external_scripts.len()
            + self.inline_scripts.len()
    }
}
