//! pagesmith: content loading for static marketing sites
//!
//! Markdown files with YAML front-matter are resolved across a list of
//! content roots, split into metadata and body, and rendered to HTML
//! fragments for the presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{ContentError, ContentLoader, FrontMatter, RenderedPage, SinglePage};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory; relative references resolve against it
    pub base_dir: PathBuf,
}

impl Site {
    /// Open a site, loading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Content loader for this site
    pub fn loader(&self) -> ContentLoader<'_> {
        ContentLoader::new(self)
    }

    /// Template helpers for this site
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(&self.config)
    }
}
