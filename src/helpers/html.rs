//! HTML helper functions

use super::url::{is_external, with_base_path};

/// Generate an anchor tag; off-site links open in a new tab
///
/// # Examples
/// ```ignore
/// link_to("/landing", "/about/", "About") // -> <a href="/landing/about/">About</a>
/// ```
pub fn link_to(base_path: &str, path: &str, text: &str) -> String {
    let href = with_base_path(base_path, path);

    if is_external(path) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            html_escape(&href),
            text
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, html_escape(&href), text)
    }
}

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag("/landing", "images/hero.png", Some("Hero"))
/// ```
pub fn image_tag(base_path: &str, path: &str, alt: Option<&str>) -> String {
    let src = with_base_path(base_path, path);
    format!(
        r#"<img src="{}" alt="{}">"#,
        html_escape(&src),
        html_escape(alt.unwrap_or(""))
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to() {
        assert_eq!(link_to("/site", "about/", "About"), r#"<a href="/site/about/">About</a>"#);
        assert!(link_to("/site", "https://github.com", "GitHub").contains(r#"target="_blank""#));
    }

    #[test]
    fn test_image_tag() {
        assert_eq!(
            image_tag("", "images/logo.svg", Some("Acme \"Co\"")),
            r#"<img src="/images/logo.svg" alt="Acme &quot;Co&quot;">"#
        );
        assert_eq!(
            image_tag("/site", "data:image/gif;base64,R0lG", None),
            r#"<img src="data:image/gif;base64,R0lG" alt="">"#
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>\"Q&A\"</b>"), "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;");
    }
}
