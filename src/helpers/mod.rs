//! Helper functions for the presentation layer
//!
//! Markdown-to-HTML conversion for section data, plain-text excerpts,
//! anchors, and base-path aware asset URLs.

mod date;
mod html;
mod text;
mod url;

pub use date::*;
pub use html::*;
pub use text::*;
pub use url::*;

use crate::config::SiteConfig;

/// Helpers bound to one site's base path
#[derive(Debug, Clone)]
pub struct Helpers {
    base_path: String,
}

impl Helpers {
    /// Create helpers using the config's base path after environment overrides
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            base_path: config.resolved_base_path(),
        }
    }

    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Get asset URL helper
    pub fn url_for(&self, path: &str) -> String {
        with_base_path(&self.base_path, path)
    }

    /// Get link_to helper
    pub fn link_to(&self, path: &str, text: &str) -> String {
        link_to(&self.base_path, path, text)
    }

    /// Get image_tag helper
    pub fn image_tag(&self, path: &str, alt: Option<&str>) -> String {
        image_tag(&self.base_path, path, alt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_use_base_path() {
        let helpers = Helpers::with_base_path("/landing");
        assert_eq!(helpers.url_for("logo.svg"), "/landing/logo.svg");
        assert_eq!(
            helpers.image_tag("hero.png", Some("Hero")),
            r#"<img src="/landing/hero.png" alt="Hero">"#
        );
        assert_eq!(
            helpers.link_to("/contact/", "Contact"),
            r#"<a href="/landing/contact/">Contact</a>"#
        );
    }
}
