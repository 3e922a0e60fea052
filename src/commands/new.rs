//! Create a new content page

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::Site;

/// Options for a new page
#[derive(Debug, Default)]
pub struct NewPage<'a> {
    pub title: &'a str,
    pub draft: bool,
    pub url: Option<&'a str>,
}

/// Create a page in the pages directory and return its path
pub fn create_page(site: &Site, page: &NewPage<'_>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let target_dir = site
        .loader()
        .resolver()
        .resolve_dir(&site.config.pages_dir)
        .unwrap_or_else(|| site.base_dir.join(&site.config.pages_dir));
    fs::create_dir_all(&target_dir)?;

    let slug = slug::slugify(page.title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", page.title);
    }

    let filename = site
        .config
        .new_page_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());
    let file_path = target_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut fm = FrontMatter::default();
    fm.insert("title", Value::from(page.title));
    fm.insert("date", Value::from(now.format("%Y-%m-%d %H:%M:%S").to_string()));
    if page.draft {
        fm.insert("draft", Value::Bool(true));
    }
    if let Some(url) = page.url {
        fm.insert("url", Value::from(url));
    }

    let content = format!("---\n{}---\n", serde_yaml::to_string(&fm)?);
    fs::write(&file_path, content)?;

    tracing::info!("Created {:?}", file_path);
    Ok(file_path)
}
