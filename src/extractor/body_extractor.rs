//! 页面主体重建：保留 body 结构与属性，剔除已单独收集的脚本/样式
use std::cell::RefCell;
use std::rc::Rc;

use lol_html::html_content::ContentType;
use lol_html::{element, HtmlRewriter, Settings};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const BODY_START_MARKER: &str = "<!--siteinspector:body-start-->";
const BODY_END_MARKER: &str = "<!--siteinspector:body-end-->";

static DOCTYPE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*<!doctype[^>]*>").unwrap());

/// 提取页面 body
/// - 有属性：`<body name="value" ...>{inner}</body>`
/// - 无属性：仅返回内部标记
pub fn extract_body(html: &str) -> String {
    let body_attrs: Rc<RefCell<Option<Vec<(String, String)>>>> = Rc::new(RefCell::new(None));
    let attrs_sink = body_attrs.clone();

    let mut output = Vec::with_capacity(html.len());
    let settings = Settings {
        strict: false,
        element_content_handlers: vec![
            // `</head>` 可省略，只删除头部子元素，head 标签本身保留内容
            element!("head", |el| {
                el.remove_and_keep_content();
                Ok(())
            }),
            element!("head > title", |el| {
                el.remove();
                Ok(())
            }),
            element!("head > meta", |el| {
                el.remove();
                Ok(())
            }),
            element!("head > link", |el| {
                el.remove();
                Ok(())
            }),
            element!("head > noscript", |el| {
                el.remove();
                Ok(())
            }),
            element!("script", |el| {
                el.remove();
                Ok(())
            }),
            element!("style", |el| {
                el.remove();
                Ok(())
            }),
            element!("base", |el| {
                el.remove();
                Ok(())
            }),
            element!(r#"link[rel="stylesheet"]"#, |el| {
                el.remove();
                Ok(())
            }),
            element!("html", |el| {
                el.remove_and_keep_content();
                Ok(())
            }),
            element!("body", move |el| {
                let mut slot = attrs_sink.borrow_mut();
                // 仅第一个 body 生效
                if slot.is_none() {
                    let attrs = el
                        .attributes()
                        .iter()
                        .map(|a| (a.name(), a.value()))
                        .collect();
                    *slot = Some(attrs);
                    el.prepend(BODY_START_MARKER, ContentType::Html);
                    el.append(BODY_END_MARKER, ContentType::Html);
                }
                Ok(())
            }),
        ],
        ..Settings::default()
    };

    let mut rewriter = HtmlRewriter::new(settings, |chunk: &[u8]| output.extend_from_slice(chunk));
    if let Err(e) = rewriter.write(html.as_bytes()) {
        debug!("主体重建提前终止：{}", e);
    }
    if let Err(e) = rewriter.end() {
        debug!("主体重建收尾失败：{}", e);
    }

    let rewritten = String::from_utf8_lossy(&output).into_owned();
    let inner = slice_between_markers(&rewritten).unwrap_or_else(|| {
        debug!("未找到<body>元素，使用整个文档");
        DOCTYPE_REGEX.replace(&rewritten, "").trim().to_string()
    });

    let attrs = body_attrs.borrow_mut().take().unwrap_or_default();
    if attrs.is_empty() {
        inner
    } else {
        format!("<body {}>{}</body>", render_attributes(&attrs), inner)
    }
}

/// 截取 body 内部标记；`</body>` 省略时截到文档末尾
fn slice_between_markers(rewritten: &str) -> Option<String> {
    let start = rewritten.find(BODY_START_MARKER)? + BODY_START_MARKER.len();
    let inner = match rewritten.rfind(BODY_END_MARKER) {
        Some(end) if end >= start => &rewritten[start..end],
        _ => rewritten[start..].trim_end(),
    };
    Some(inner.to_string())
}

fn render_attributes(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(r#"{}="{}""#, name, value.replace('"', "&quot;")))
        .collect::<Vec<_>>()
        .join(" ")
}
