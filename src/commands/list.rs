//! List the pages of a content collection

use anyhow::Result;

use crate::helpers::{format_date, PublishDate};
use crate::Site;

/// Print the published pages in `directory`
pub fn run(site: &Site, directory: &str) -> Result<()> {
    let lines = listing(site, directory)?;
    println!("Pages in {} ({}):", directory, lines.len());
    for line in lines {
        println!("  {}", line);
    }
    Ok(())
}

/// One line per published page, sorted by slug
pub fn listing(site: &Site, directory: &str) -> Result<Vec<String>> {
    let mut pages = site.loader().load_single_pages(directory)?;
    pages.sort_by(|a, b| a.slug.cmp(&b.slug));

    let lines = pages
        .iter()
        .map(|page| {
            let date = match PublishDate::from_value(page.frontmatter.date()) {
                PublishDate::At(date) => format_date(&date, &site.config.date_format),
                _ => "-".to_string(),
            };
            format!(
                "{} - {} [{}]",
                date,
                page.title().unwrap_or(&page.slug),
                page.slug
            )
        })
        .collect();

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_listing_sorted_by_slug() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("pricing.md"),
            "---\ntitle: Pricing\ndate: 2024-03-01\n---\n",
        )
        .unwrap();
        fs::write(content.join("about.md"), "---\ndate: not a date\n---\n").unwrap();
        fs::write(content.join("_index.md"), "---\ntitle: Home\n---\n").unwrap();

        let site = Site::new(dir.path()).unwrap();
        let lines = listing(&site, "content").unwrap();

        assert_eq!(
            lines,
            vec!["- - about [about]", "2024-03-01 - Pricing [pricing]"]
        );
    }

    #[test]
    fn test_listing_missing_directory() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(listing(&site, "content/blog").unwrap().is_empty());
    }
}
