//! URL helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `https:`, `mailto:`, `//cdn...`
    static ref ABSOLUTE_URL: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z\d+\-.]*:|^//").unwrap();
}

/// Prefix an asset path with the site base path
///
/// # Examples
/// ```ignore
/// with_base_path("/landing", "images/hero.png") // -> "/landing/images/hero.png"
/// with_base_path("/landing", "https://cdn.example.com/a.png") // unchanged
/// ```
pub fn with_base_path(base_path: &str, path: &str) -> String {
    if path.is_empty() || ABSOLUTE_URL.is_match(path) || path.starts_with("data:") {
        return path.to_string();
    }

    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if base_path.is_empty() || normalized.starts_with(&format!("{}/", base_path)) {
        return normalized;
    }

    format!("{}{}", base_path, normalized)
}

/// Whether `path` points off-site
pub fn is_external(path: &str) -> bool {
    ABSOLUTE_URL.is_match(path)
}
