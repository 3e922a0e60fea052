//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Directory
    /// Content roots searched in order when a reference is not a direct path
    pub content_roots: Vec<String>,
    /// Collection directory used when looking up regular pages by slug
    pub pages_dir: String,
    /// File name of the not-found document inside a content root
    pub not_found: String,

    // URL
    /// Prefix for non-absolute asset paths (see `helpers::with_base_path`)
    pub base_path: String,

    // Writing
    pub new_page_name: String,
    pub render_drafts: bool,
    pub future: bool,

    // Date format (Moment.js style) for listings
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Pagesmith".to_string(),

            content_roots: vec!["content".to_string(), "src/content".to_string()],
            pages_dir: "content".to_string(),
            not_found: "404.md".to_string(),

            base_path: String::new(),

            new_page_name: ":title.md".to_string(),
            render_drafts: false,
            future: false,

            date_format: "YYYY-MM-DD".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Base path after environment overrides
    pub fn resolved_base_path(&self) -> String {
        resolve_base_path(self, |key| std::env::var(key).ok())
    }
}

/// Work out the asset base path.
///
/// `SITE_BASE_PATH` wins. A GitHub Actions build of `owner/repo` is served
/// from `/repo`. Otherwise the configured `base_path` is used.
pub fn resolve_base_path<F>(config: &SiteConfig, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = env("SITE_BASE_PATH") {
        return normalize_base_path(&explicit);
    }

    if env("GITHUB_ACTIONS").as_deref() == Some("true") {
        let repo = env("GITHUB_REPOSITORY")
            .and_then(|r| r.split('/').nth(1).map(str::to_string))
            .unwrap_or_default();
        if !repo.is_empty() {
            return format!("/{}", repo);
        }
    }

    normalize_base_path(&config.base_path)
}

/// "docs/" -> "/docs", "/" -> ""
fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
