//! Content loader - assembles pages from the content roots

use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{
    fallback, ContentError, FrontMatter, MarkdownRenderer, PathResolver, RenderedPage,
    SinglePage,
};
use crate::helpers::PublishDate;
use crate::Site;

/// Loads pages for the presentation layer
pub struct ContentLoader<'a> {
    site: &'a Site,
    resolver: PathResolver,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            resolver: PathResolver::new(&site.base_dir, &site.config),
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    /// Load an index page such as `content/_index.md`.
    ///
    /// Falls back to the not-found document when the reference does not
    /// resolve. The body is always rendered.
    pub fn load_list_page(&self, reference: &str) -> Result<RenderedPage, ContentError> {
        let (frontmatter, content) = match self.resolver.resolve(reference)? {
            Some(file) => {
                let (fm, body) = FrontMatter::split(&file.raw)
                    .map_err(|e| ContentError::front_matter(&file.path, e))?;
                (fm, body.to_string())
            }
            None => self.not_found()?,
        };

        Ok(self.render(frontmatter, content))
    }

    /// Load the published pages directly inside a content directory.
    ///
    /// Order follows directory enumeration; callers that need a stable
    /// order sort the result themselves.
    pub fn load_single_pages(&self, directory: &str) -> Result<Vec<SinglePage>, ContentError> {
        self.load_single_pages_at(directory, &Local::now())
    }

    /// [`Self::load_single_pages`] with an explicit publishing time
    pub fn load_single_pages_at(
        &self,
        directory: &str,
        now: &DateTime<Local>,
    ) -> Result<Vec<SinglePage>, ContentError> {
        let Some(dir) = self.resolver.resolve_dir(directory) else {
            return Ok(Vec::new());
        };

        let mut pages = Vec::new();

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_collection_member(path) {
                continue;
            }

            let page = load_single_page(path)?;
            if self.is_published(&page, now) {
                pages.push(page);
            } else {
                tracing::debug!("Skipping unpublished page {:?}", path);
            }
        }

        Ok(pages)
    }

    /// Load a page from the pages directory by slug, or the not-found document
    pub fn load_regular_page(&self, slug: &str) -> Result<RenderedPage, ContentError> {
        let pages = self.load_single_pages(&self.site.config.pages_dir)?;

        let (frontmatter, content) = match pages.into_iter().find(|p| p.slug == slug) {
            Some(page) => (page.frontmatter, page.content),
            None => {
                tracing::debug!("No page with slug {:?}", slug);
                self.not_found()?
            }
        };

        Ok(self.render(frontmatter, content))
    }

    /// The not-found document (front-matter and raw body)
    pub fn not_found(&self) -> Result<(FrontMatter, String), ContentError> {
        fallback::not_found(&self.resolver, &self.site.config)
    }

    fn render(&self, frontmatter: FrontMatter, content: String) -> RenderedPage {
        let html = self.renderer.render_block(&content);
        RenderedPage {
            frontmatter,
            content,
            html,
        }
    }

    fn is_published(&self, page: &SinglePage, now: &DateTime<Local>) -> bool {
        let fm = &page.frontmatter;
        if fm.is_draft() && !self.site.config.render_drafts {
            return false;
        }
        if fm.is_not_found() {
            return false;
        }
        self.site.config.future || PublishDate::from_value(fm.date()).is_published(now)
    }
}

/// Load a single collection entry from a file
fn load_single_page(path: &Path) -> Result<SinglePage, ContentError> {
    let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    let (frontmatter, body) =
        FrontMatter::split(&raw).map_err(|e| ContentError::front_matter(path, e))?;

    let slug = match frontmatter.url() {
        Some(url) => url_slug(url).to_string(),
        None => file_slug(path),
    };

    Ok(SinglePage {
        slug,
        content: body.to_string(),
        frontmatter,
        source: path.to_path_buf(),
    })
}

/// One leading and one trailing `/` removed: `/team/` -> `team`
fn url_slug(url: &str) -> &str {
    let url = url.strip_prefix('/').unwrap_or(url);
    url.strip_suffix('/').unwrap_or(url)
}

/// `.md`/`.mdx` files that are not `_`-prefixed
fn is_collection_member(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('_') && (name.ends_with(".md") || name.ends_with(".mdx"))
}

/// File name with the markdown extension stripped
fn file_slug(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.strip_suffix(".mdx")
        .or_else(|| name.strip_suffix(".md"))
        .unwrap_or(name.as_ref())
        .to_string()
}
