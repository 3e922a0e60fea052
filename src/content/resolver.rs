//! Content path resolution
//!
//! A reference such as `content/_index.md`, `src/content/about.md` or plain
//! `about.md` is looked up through an ordered list of strategies: first the
//! reference as a direct path, then the normalized reference under each
//! configured content root. The first hit wins.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::ContentError;
use crate::config::SiteConfig;

/// A content file located by the resolver
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    /// Absolute (or base-dir joined) path of the file
    pub path: PathBuf,
    /// Raw file text
    pub raw: String,
}

/// One way of turning a reference into a candidate path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// The reference as given, relative to the base directory
    DirectPath,
    /// The normalized reference under a content root
    ContentRoot(PathBuf),
}

impl Strategy {
    /// Candidate path for `reference`
    pub fn candidate(&self, base_dir: &Path, reference: &str, roots: &[String]) -> PathBuf {
        match self {
            Strategy::DirectPath => base_dir.join(reference),
            Strategy::ContentRoot(root) => {
                base_dir.join(root).join(normalize_reference(reference, roots))
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DirectPath => write!(f, "direct path"),
            Strategy::ContentRoot(root) => write!(f, "content root {:?}", root),
        }
    }
}

/// Resolves content references against the site's base directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
    roots: Vec<String>,
    strategies: Vec<Strategy>,
}

impl PathResolver {
    /// Create a resolver for `base_dir` using the configured content roots
    pub fn new(base_dir: impl Into<PathBuf>, config: &SiteConfig) -> Self {
        Self::with_roots(base_dir, config.content_roots.clone())
    }

    pub fn with_roots(base_dir: impl Into<PathBuf>, roots: Vec<String>) -> Self {
        let strategies = std::iter::once(Strategy::DirectPath)
            .chain(roots.iter().map(|r| Strategy::ContentRoot(PathBuf::from(r))))
            .collect();

        Self {
            base_dir: base_dir.into(),
            roots,
            strategies,
        }
    }

    /// Strategies in the order they are tried
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Candidate path a single strategy would try
    pub fn candidate(&self, strategy: &Strategy, reference: &str) -> PathBuf {
        strategy.candidate(&self.base_dir, reference, &self.roots)
    }

    /// Find and read a content file. `Ok(None)` when no strategy hits.
    pub fn resolve(&self, reference: &str) -> Result<Option<ResolvedFile>, ContentError> {
        let Some(path) = self.find(reference, Path::is_file) else {
            tracing::debug!("No content file for {:?}", reference);
            return Ok(None);
        };

        let raw = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
        Ok(Some(ResolvedFile { path, raw }))
    }

    /// Find a content directory
    pub fn resolve_dir(&self, reference: &str) -> Option<PathBuf> {
        let found = self.find(reference, Path::is_dir);
        if found.is_none() {
            tracing::debug!("No content directory for {:?}", reference);
        }
        found
    }

    fn find(&self, reference: &str, accept: fn(&Path) -> bool) -> Option<PathBuf> {
        self.strategies.iter().find_map(|strategy| {
            let candidate = self.candidate(strategy, reference);
            if accept(&candidate) {
                tracing::debug!("Resolved {:?} via {} -> {:?}", reference, strategy, candidate);
                Some(candidate)
            } else {
                tracing::trace!("{} missed {:?}", strategy, candidate);
                None
            }
        })
    }
}

/// Strip content-root prefixes and leading slashes.
///
/// `content/_index.md` and `src/content/_index.md` both become `_index.md`;
/// a bare root name becomes the empty path.
pub fn normalize_reference<'a>(reference: &'a str, roots: &[String]) -> &'a str {
    let mut roots: Vec<&str> = roots
        .iter()
        .map(|r| r.trim_matches(|c| c == '/' || c == '\\'))
        .filter(|r| !r.is_empty())
        .collect();
    roots.sort_by_key(|r| std::cmp::Reverse(r.len()));

    let mut rest = reference.trim_start_matches(['/', '\\']);
    for root in roots {
        if let Some(tail) = strip_root(rest, root) {
            rest = tail;
            break;
        }
    }

    rest.trim_start_matches(['/', '\\'])
}

/// `root/tail` or `root\tail` -> `tail`, `root` -> ``
fn strip_root<'a>(reference: &'a str, root: &str) -> Option<&'a str> {
    let head = reference.get(..root.len())?;
    if !same_path(head, root) {
        return None;
    }

    let tail = &reference[root.len()..];
    if tail.is_empty() {
        Some(tail)
    } else if tail.starts_with(['/', '\\']) {
        Some(&tail[1..])
    } else {
        None
    }
}

/// Compare path strings treating `/` and `\` alike
fn same_path(a: &str, b: &str) -> bool {
    let sep = |c: char| if c == '\\' { '/' } else { c };
    a.chars().map(sep).eq(b.chars().map(sep))
}
