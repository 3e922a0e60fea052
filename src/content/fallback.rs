//! Not-found document

use super::{ContentError, FrontMatter, PathResolver};
use crate::config::SiteConfig;

/// Built-in not-found document, used when no content root has one
const DEFAULT_NOT_FOUND: &str = r#"---
title: Not Found
layout: "404"
---
Page not found.
"#;

/// Load the not-found document.
///
/// Tries `<root>/<not_found>` under every content root in order and falls
/// back to the built-in document. A real file with broken front-matter is
/// an error, not a reason to use the built-in one.
pub fn not_found(
    resolver: &PathResolver,
    config: &SiteConfig,
) -> Result<(FrontMatter, String), ContentError> {
    for root in &config.content_roots {
        let reference = format!("{}/{}", root.trim_end_matches('/'), config.not_found);
        if let Some(file) = resolver.resolve(&reference)? {
            tracing::debug!("Using not-found document {:?}", file.path);
            let (fm, body) = FrontMatter::split(&file.raw)
                .map_err(|e| ContentError::front_matter(&file.path, e))?;
            return Ok((fm, body.to_string()));
        }
    }

    tracing::debug!("Using built-in not-found document");
    builtin()
}

fn builtin() -> Result<(FrontMatter, String), ContentError> {
    let (fm, body) = FrontMatter::split(DEFAULT_NOT_FOUND)
        .map_err(|e| ContentError::front_matter("<built-in 404>", e))?;
    Ok((fm, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_not_found() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let resolver = PathResolver::new(dir.path(), &config);

        let (fm, body) = not_found(&resolver, &config).unwrap();
        assert_eq!(fm.title(), Some("Not Found"));
        assert_eq!(fm.layout().as_deref(), Some("404"));
        assert!(fm.is_not_found());
        assert_eq!(body, "Page not found.\n");
    }

    #[test]
    fn test_not_found_file_overrides_builtin() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/content")).unwrap();
        fs::write(
            dir.path().join("src/content/404.md"),
            "---\ntitle: Lost?\nlayout: 404\n---\nTry the [home page](/).\n",
        )
        .unwrap();

        let config = SiteConfig::default();
        let resolver = PathResolver::new(dir.path(), &config);
        let (fm, body) = not_found(&resolver, &config).unwrap();
        assert_eq!(fm.title(), Some("Lost?"));
        assert!(fm.is_not_found());
        assert_eq!(body, "Try the [home page](/).\n");
    }

    #[test]
    fn test_first_root_wins() {
        let dir = TempDir::new().unwrap();
        for (root, title) in [("content", "Primary"), ("src/content", "Secondary")] {
            fs::create_dir_all(dir.path().join(root)).unwrap();
            fs::write(
                dir.path().join(root).join("404.md"),
                format!("---\ntitle: {}\n---\n", title),
            )
            .unwrap();
        }

        let config = SiteConfig::default();
        let resolver = PathResolver::new(dir.path(), &config);
        let (fm, _) = not_found(&resolver, &config).unwrap();
        assert_eq!(fm.title(), Some("Primary"));
    }

    #[test]
    fn test_broken_not_found_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/404.md"), "---\ntitle: [oops\n---\n").unwrap();

        let config = SiteConfig::default();
        let resolver = PathResolver::new(dir.path(), &config);
        let err = not_found(&resolver, &config).unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
    }
}
