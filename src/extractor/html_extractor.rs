//! HTML 标签提取器
//! 单次流式解析页面，提取标题、描述、链接、图片、Open Graph 标签、样式表与脚本
use std::cell::RefCell;
use std::rc::Rc;

use lol_html::{element, text, HtmlRewriter, Settings};
use tracing::debug;
use url::Url;

use crate::utils::resolve_against;

/// 页面中的原始脚本标签
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawScript {
    pub src: Option<String>,
    pub text: String,
}

/// 页面提取结果（顺序即文档顺序）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub anchor_hrefs: Vec<String>,
    pub image_srcs: Vec<String>,
    pub open_graph_tags: usize,
    pub stylesheet_hrefs: Vec<String>,
    pub inline_styles: Vec<String>,
    pub scripts: Vec<RawScript>,
}

impl PageDocument {
    /// 标题，缺失或为空时使用默认值
    pub fn title_or_default(&self) -> String {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("No title found")
            .to_string()
    }

    /// 描述，缺失或为空时使用默认值
    pub fn description_or_default(&self) -> String {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Not found")
            .to_string()
    }

    /// 统计站内/站外链接数（无法解析的链接计为站外）
    pub fn count_links(&self, base: &Url, target: &Url) -> (usize, usize) {
        let internal = self
            .anchor_hrefs
            .iter()
            .filter(|href| {
                resolve_against(base, href)
                    .map(|u| u.host_str().is_some() && u.host_str() == target.host_str())
                    .unwrap_or(false)
            })
            .count();
        (internal, self.anchor_hrefs.len() - internal)
    }

    /// 图片绝对地址（无法解析的丢弃）
    pub fn image_urls(&self, base: &Url) -> Vec<String> {
        self.image_srcs
            .iter()
            .filter_map(|src| resolve_against(base, src))
            .map(String::from)
            .collect()
    }
}

/// 解析过程中的累积状态
#[derive(Debug, Default)]
struct ExtractState {
    doc: PageDocument,
    title_elements: usize,
    title_text: String,
}

/// 对外暴露的HTML提取器
#[derive(Debug, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    /// 流式解析HTML（容错：畸形HTML/大小写标签/残缺标签）
    pub fn extract(html: &str) -> PageDocument {
        let state = Rc::new(RefCell::new(ExtractState::default()));

        let title_el = state.clone();
        let title_text = state.clone();
        let description = state.clone();
        let og = state.clone();
        let anchors = state.clone();
        let images = state.clone();
        let links = state.clone();
        let style_el = state.clone();
        let style_text = state.clone();
        let script_el = state.clone();
        let script_text = state.clone();

        let settings = Settings {
            strict: false,
            element_content_handlers: vec![
                // 仅第一个 <title> 生效（SVG 内的 <title> 不覆盖页面标题）
                element!("title", move |_el| {
                    title_el.borrow_mut().title_elements += 1;
                    Ok(())
                }),
                text!("title", move |t| {
                    let mut st = title_text.borrow_mut();
                    if st.title_elements == 1 {
                        st.title_text.push_str(t.as_str());
                    }
                    Ok(())
                }),
                element!(r#"meta[name="description"]"#, move |el| {
                    let mut st = description.borrow_mut();
                    if st.doc.description.is_none() {
                        st.doc.description = el.get_attribute("content");
                    }
                    Ok(())
                }),
                element!(r#"meta[property^="og:"]"#, move |_el| {
                    og.borrow_mut().doc.open_graph_tags += 1;
                    Ok(())
                }),
                element!("a[href]", move |el| {
                    let href = el.get_attribute("href").unwrap_or_default();
                    anchors.borrow_mut().doc.anchor_hrefs.push(href);
                    Ok(())
                }),
                element!("img", move |el| {
                    if let Some(src) = el.get_attribute("src").filter(|s| !s.is_empty()) {
                        images.borrow_mut().doc.image_srcs.push(src);
                    }
                    Ok(())
                }),
                element!(r#"link[rel="stylesheet"]"#, move |el| {
                    if let Some(href) = el.get_attribute("href").filter(|h| !h.is_empty()) {
                        links.borrow_mut().doc.stylesheet_hrefs.push(href);
                    }
                    Ok(())
                }),
                element!("style", move |_el| {
                    style_el.borrow_mut().doc.inline_styles.push(String::new());
                    Ok(())
                }),
                text!("style", move |t| {
                    if let Some(last) = style_text.borrow_mut().doc.inline_styles.last_mut() {
                        last.push_str(t.as_str());
                    }
                    Ok(())
                }),
                element!("script", move |el| {
                    let src = el.get_attribute("src").filter(|s| !s.is_empty());
                    script_el.borrow_mut().doc.scripts.push(RawScript {
                        src,
                        text: String::new(),
                    });
                    Ok(())
                }),
                text!("script", move |t| {
                    if let Some(last) = script_text.borrow_mut().doc.scripts.last_mut() {
                        last.text.push_str(t.as_str());
                    }
                    Ok(())
                }),
            ],
            ..Settings::default()
        };

        let mut rewriter = HtmlRewriter::new(settings, |_: &[u8]| {});
        if let Err(e) = rewriter.write(html.as_bytes()) {
            debug!("HTML提取提前终止：{}", e);
        }
        if let Err(e) = rewriter.end() {
            debug!("HTML提取收尾失败：{}", e);
        }

        let mut st = std::mem::take(&mut *state.borrow_mut());
        if st.title_elements > 0 {
            st.doc.title = Some(decode_basic_entities(st.title_text.trim()));
        }
        st.doc
    }
}

/// 解码标题文本中常见的HTML实体
fn decode_basic_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
