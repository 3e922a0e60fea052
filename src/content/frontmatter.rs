//! Front-matter parsing

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::ContentError;

/// Opening and closing delimiter of a front-matter block
const DELIMITER: &str = "---";

/// Layout value that marks a not-found document
pub const NOT_FOUND_LAYOUT: &str = "404";

/// Front-matter parse errors
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front-matter block is not closed with `---`")]
    Unterminated,

    #[error("failed to parse YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("front-matter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("unsupported front-matter language: {0}")]
    UnsupportedLanguage(String),
}

/// Front-matter data from a content file.
///
/// An open mapping: `draft`, `layout`, `date` and `url` drive the pipeline,
/// everything else is page data handed to the presentation layer untouched.
/// Key order follows the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter(Map<String, Value>);

impl FrontMatter {
    /// Split front-matter from content.
    ///
    /// Returns (front_matter, body). A leading byte order mark is dropped;
    /// other text without an opening `---` line is returned unchanged with
    /// an empty mapping.
    pub fn split(raw: &str) -> Result<(Self, &str), FrontMatterError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let Some(after_open) = raw.strip_prefix(DELIMITER) else {
            return Ok((Self::default(), raw));
        };

        let (open_line, block) = match after_open.find('\n') {
            Some(pos) => (&after_open[..pos], &after_open[pos + 1..]),
            None => (after_open, ""),
        };

        // `----` is a thematic break
        let lang = open_line.trim_end_matches('\r').trim();
        if lang.starts_with('-') {
            return Ok((Self::default(), raw));
        }

        let (matter_end, body_start) = find_closing(block).ok_or(FrontMatterError::Unterminated)?;
        let matter = &block[..matter_end];
        let body = &block[body_start..];

        let fm = match lang {
            "" | "yaml" | "yml" => Self::from_yaml(matter)?,
            "json" => Self::from_json(matter)?,
            other => return Err(FrontMatterError::UnsupportedLanguage(other.to_string())),
        };

        Ok((fm, body))
    }

    fn from_yaml(matter: &str) -> Result<Self, FrontMatterError> {
        if matter.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value = serde_yaml::from_str(matter)?;
        match value {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => match serde_json::to_value(&value)? {
                Value::Object(map) => Ok(Self(map)),
                other => Err(FrontMatterError::NotAMapping(json_kind(&other))),
            },
            serde_yaml::Value::Sequence(_) => Err(FrontMatterError::NotAMapping("a sequence")),
            serde_yaml::Value::Tagged(_) => Err(FrontMatterError::NotAMapping("a tagged value")),
            _ => Err(FrontMatterError::NotAMapping("a scalar")),
        }
    }

    fn from_json(matter: &str) -> Result<Self, FrontMatterError> {
        if matter.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_str::<Value>(matter)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(FrontMatterError::NotAMapping(json_kind(&other))),
        }
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Decode into a page-specific typed view
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ContentError> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Drafts use loose truthiness: `draft: yes`, `draft: 1` count too
    pub fn is_draft(&self) -> bool {
        self.get("draft").map(is_truthy).unwrap_or(false)
    }

    /// Layout name; numeric layouts (`layout: 404`) are stringified
    pub fn layout(&self) -> Option<String> {
        match self.get("layout")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Whether this document is a not-found page
    pub fn is_not_found(&self) -> bool {
        self.layout().as_deref() == Some(NOT_FOUND_LAYOUT)
    }

    pub fn date(&self) -> Option<&Value> {
        self.get("date")
    }

    /// Explicit URL override, if set to a non-empty string
    pub fn url(&self) -> Option<&str> {
        self.get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// Find the closing delimiter line.
/// Returns (end of matter, start of body); one line break after `---` is consumed.
fn find_closing(block: &str) -> Option<(usize, usize)> {
    let mut start = 0;
    loop {
        let line_end = block[start..].find('\n').map(|i| start + i);
        let line = &block[start..line_end.unwrap_or(block.len())];

        if line.trim_end_matches('\r') == DELIMITER {
            let body_start = line_end.map(|i| i + 1).unwrap_or(block.len());
            return Some((start, body_start));
        }

        start = line_end? + 1;
    }
}

/// JavaScript-style truthiness
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
