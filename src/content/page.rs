//! Page models

use serde::Serialize;
use std::path::PathBuf;

use super::FrontMatter;

/// A page with its body rendered to HTML.
///
/// Returned for index pages (`_index.md`) and for regular pages looked up
/// by slug. When the requested content does not exist this holds the
/// not-found document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    /// Front-matter data
    pub frontmatter: FrontMatter,

    /// Raw markdown body
    pub content: String,

    /// Rendered HTML body
    pub html: String,
}

impl RenderedPage {
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.title()
    }

    /// Whether this is the not-found document
    pub fn is_not_found(&self) -> bool {
        self.frontmatter.is_not_found()
    }
}

/// One entry of a content collection
#[derive(Debug, Clone, Serialize)]
pub struct SinglePage {
    /// Front-matter data
    pub frontmatter: FrontMatter,

    /// URL segment: the `url` field without surrounding slashes, or the file stem
    pub slug: String,

    /// Raw markdown body
    pub content: String,

    /// Source file path
    pub source: PathBuf,
}

impl SinglePage {
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.title()
    }
}
