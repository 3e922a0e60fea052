//! Content module - resolves, parses and renders markdown content

mod error;
mod fallback;
mod frontmatter;
pub mod loader;
mod markdown;
mod page;
pub mod resolver;

pub use error::ContentError;
pub use fallback::not_found;
pub use frontmatter::{is_truthy, FrontMatter, FrontMatterError, NOT_FOUND_LAYOUT};
pub use loader::ContentLoader;
pub use markdown::{github_slug, MarkdownRenderer, Slugger};
pub use page::{RenderedPage, SinglePage};
pub use resolver::{PathResolver, ResolvedFile, Strategy};
