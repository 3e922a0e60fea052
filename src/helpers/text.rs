//! Text helpers for templates: markdown to HTML or plain text, slugs, labels

use lazy_static::lazy_static;
use regex::Regex;

use super::html::html_escape;
use crate::content::{github_slug, MarkdownRenderer};

lazy_static! {
    static ref TAG: Regex = Regex::new(r"(?m)</?[^>]+(>|$)").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"(?m)[\r\n]\s*[\r\n]").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&nbsp;|&amp;|&lt;|&gt;|&quot;|&#39;").unwrap();
    static ref EDGE_SEPARATORS: Regex = Regex::new(r"^[\s_]+|[\s_]+$").unwrap();
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[_\s]+").unwrap();
}

/// Elements whose content is rendered in block mode
const BLOCK_CONTAINERS: &[&str] = &[
    "div",
    "section",
    "article",
    "aside",
    "main",
    "header",
    "footer",
    "nav",
    "blockquote",
    "figure",
    "details",
];

/// Whether markdown placed inside `tag` may contain block elements
pub fn is_block_container(tag: &str) -> bool {
    BLOCK_CONTAINERS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Render markdown into a `<tag>` element.
///
/// Returns `None` for absent or empty content so the caller skips the
/// element entirely.
///
/// # Examples
/// ```ignore
/// markdownify(Some("Hello *world*"), "span", None) // -> <span>Hello <em>world</em></span>
/// ```
pub fn markdownify(content: Option<&str>, tag: &str, class: Option<&str>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;
    let renderer = MarkdownRenderer::new();

    let html = if is_block_container(tag) {
        renderer.render_block(content)
    } else {
        renderer.render_inline(content)
    };

    let class_attr = class
        .filter(|c| !c.is_empty())
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    Some(format!("<{tag}{class_attr}>{html}</{tag}>"))
}

/// Inline-render markdown and reduce it to plain text
pub fn plainify(content: Option<&str>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;

    let html = MarkdownRenderer::new().render_inline(content);
    let without_tags = TAG.replace_all(&html, "");
    let without_blank_lines = BLANK_LINES.replace_all(&without_tags, "");

    Some(decode_entities(&without_blank_lines))
}

/// Decode the entities the renderer produces
fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &regex::Captures| {
            match &caps[0] {
                "&nbsp;" => " ",
                "&amp;" => "&",
                "&lt;" => "<",
                "&gt;" => ">",
                "&quot;" => "\"",
                _ => "'",
            }
            .to_string()
        })
        .into_owned()
}

/// URL-safe anchor for arbitrary text; `None` for empty input
pub fn slugify(content: Option<&str>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;
    Some(github_slug(content))
}

/// `"our_services  team"` -> `"Our services team"`
pub fn humanize(content: Option<&str>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;

    let trimmed = EDGE_SEPARATORS.replace_all(content, "");
    let spaced = SEPARATOR_RUN.replace_all(&trimmed, " ");

    let first = spaced.chars().next();
    Some(match first {
        Some(c) if c.is_ascii_lowercase() => c.to_ascii_uppercase().to_string() + &spaced[1..],
        _ => spaced.into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdownify_empty_is_none() {
        assert_eq!(markdownify(None, "span", None), None);
        assert_eq!(markdownify(Some(""), "div", None), None);
    }

    #[test]
    fn test_markdownify_inline() {
        assert_eq!(
            markdownify(Some("Grow **faster**"), "h1", Some("hero-title")).unwrap(),
            r#"<h1 class="hero-title">Grow <strong>faster</strong></h1>"#
        );
        assert_eq!(
            markdownify(Some("Plain"), "span", None).unwrap(),
            "<span>Plain</span>"
        );
    }

    #[test]
    fn test_markdownify_block() {
        let html = markdownify(Some("First\n\n- one\n- two"), "div", None).unwrap();
        assert!(html.starts_with("<div><p>First</p>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.ends_with("</div>"));

        let html = markdownify(Some("Para"), "SECTION", None).unwrap();
        assert_eq!(html, "<SECTION><p>Para</p>\n</SECTION>");
    }

    #[test]
    fn test_plainify() {
        assert_eq!(
            plainify(Some("**Fast** & [reliable](/about) <br> hosting")).unwrap(),
            "Fast & reliable  hosting"
        );
        assert_eq!(plainify(Some("Tom & \"Jerry\"")).unwrap(), "Tom & \"Jerry\"");
        assert_eq!(plainify(Some("One\n\nTwo")).unwrap(), "OneTwo");
        assert_eq!(plainify(None), None);
        assert_eq!(plainify(Some("")), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("&lt;a&gt;&nbsp;&amp;&quot;&#39;&copy;"),
            "<a> &\"'&copy;"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify(Some("Our Services")).as_deref(), Some("our-services"));
        assert_eq!(slugify(Some("FAQ & Help!")).as_deref(), Some("faq--help"));
        assert_eq!(slugify(Some("")), None);
        assert_eq!(slugify(None), None);
    }

    #[test]
    fn test_humanize() {
        assert_eq!(
            humanize(Some("__our_services  team_")).as_deref(),
            Some("Our services team")
        );
        assert_eq!(humanize(Some("Already fine")).as_deref(), Some("Already fine"));
        assert_eq!(humanize(None), None);
    }
}
