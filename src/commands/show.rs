//! Render a single page to stdout

use anyhow::Result;

use crate::content::RenderedPage;
use crate::Site;

/// What to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// An index page by reference, e.g. `content/_index.md`
    ListPage(&'a str),
    /// A regular page by slug, e.g. `about`
    RegularPage(&'a str),
}

/// Print the rendered page as HTML, or as JSON with its front-matter
pub fn run(site: &Site, target: Target<'_>, json: bool) -> Result<()> {
    println!("{}", render(site, target, json)?);
    Ok(())
}

pub fn render(site: &Site, target: Target<'_>, json: bool) -> Result<String> {
    let loader = site.loader();
    let page: RenderedPage = match target {
        Target::ListPage(reference) => loader.load_list_page(reference)?,
        Target::RegularPage(slug) => loader.load_regular_page(slug)?,
    };

    if page.is_not_found() {
        tracing::warn!("{:?} not found, showing the not-found page", target);
    }

    if json {
        Ok(serde_json::to_string_pretty(&page)?)
    } else {
        Ok(page.html)
    }
}
