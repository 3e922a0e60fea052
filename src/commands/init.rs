//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::CONFIG_FILE;

const CONFIG: &str = r#"# Site
title: Pagesmith

# Content
content_roots:
  - content
  - src/content
pages_dir: content
not_found: 404.md

# URL
base_path: ''

# Writing
new_page_name: :title.md
render_drafts: false
future: false
date_format: YYYY-MM-DD
"#;

const INDEX: &str = r#"---
title: Home
banner:
  title: Build your next idea **faster**
  content: Everything you need to launch, in one place.
  button:
    label: Get started
    link: /contact/
features:
  - title: Fast
    content: Static pages served from the edge.
  - title: Simple
    content: Content lives in plain *markdown* files.
---
"#;

const NOT_FOUND: &str = r#"---
title: Not Found
layout: "404"
---
The page you are looking for does not exist. Go back to the [home page](/).
"#;

/// Initialize a new site in the given directory.
///
/// Existing files are left untouched. Returns the files that were written.
pub fn init_site(target_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target_dir.join("content"))?;

    let now = chrono::Local::now();
    let about = format!(
        r#"---
title: About
date: {}
---
## Who we are

A small team building tools for the web.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    let files = [
        (CONFIG_FILE, CONFIG.to_string()),
        ("content/_index.md", INDEX.to_string()),
        ("content/404.md", NOT_FOUND.to_string()),
        ("content/about.md", about),
    ];

    let mut written = Vec::new();
    for (rel, text) in files {
        let path = target_dir.join(rel);
        if path.exists() {
            tracing::info!("Keeping existing {:?}", path);
            continue;
        }
        fs::write(&path, text)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_is_loadable() {
        let dir = TempDir::new().unwrap();
        let written = init_site(dir.path()).unwrap();
        assert_eq!(written.len(), 4);

        let site = Site::new(dir.path()).unwrap();
        let loader = site.loader();

        let home = loader.load_list_page("content/_index.md").unwrap();
        assert_eq!(home.title(), Some("Home"));
        assert!(home.frontmatter.get("features").unwrap().is_array());

        let pages = loader.load_single_pages("content").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "about");

        let missing = loader.load_regular_page("nope").unwrap();
        assert!(missing.is_not_found());
        assert!(missing.html.contains(r#"<a href="/">home page</a>"#));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/_index.md"), "mine").unwrap();

        let written = init_site(dir.path()).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("content/_index.md")).unwrap(),
            "mine"
        );
    }
}
