//! Configuration module

mod site;

pub use site::resolve_base_path;
pub use site::SiteConfig;
