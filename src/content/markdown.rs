//! Markdown rendering
//!
//! Two modes: block rendering for page bodies (GFM extensions plus heading
//! anchors) and inline rendering for short strings embedded inside an
//! existing element (no paragraph wrapping, no block constructs).

use lazy_static::lazy_static;
use pulldown_cmark::{
    html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Bare URLs that GFM would autolink
    static ref BARE_URL: Regex =
        Regex::new(r#"(?:https?://|www\.)[^\s<]*[^\s<?!.,:;*_~)\]'"]"#).unwrap();
    /// `[label]: destination` link reference definitions
    static ref LINK_DEFINITION: Regex = Regex::new(r"^\[[^\]]+\]:").unwrap();
    /// Raw `<a ...>` and `</a>` tags
    static ref ANCHOR_OPEN: Regex = Regex::new(r"(?i)^<a(\s|>)").unwrap();
    static ref ANCHOR_CLOSE: Regex = Regex::new(r"(?i)^</a\s*>").unwrap();
}

/// Markdown renderer
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    heading_ids: bool,
    autolink: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            heading_ids: true,
            autolink: true,
        }
    }

    /// Create with custom settings
    pub fn with_options(heading_ids: bool, autolink: bool) -> Self {
        Self {
            heading_ids,
            autolink,
        }
    }

    /// Render a full markdown document to HTML
    pub fn render_block(&self, markdown: &str) -> String {
        // Front-matter is split off before rendering, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = TextMergeStream::new(Parser::new_ext(markdown, options));

        let mut events: Vec<Event> = parser.collect();
        if self.heading_ids {
            events = assign_heading_ids(events);
        }
        if self.autolink {
            events = autolink(events);
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Render markdown inline constructs only
    pub fn render_inline(&self, markdown: &str) -> String {
        let source = neutralize_block_markers(markdown);
        let parser = TextMergeStream::new(Parser::new_ext(&source, Options::ENABLE_STRIKETHROUGH));

        let mut events: Vec<Event> = Vec::new();
        let mut paragraphs = 0;
        for event in parser {
            match event {
                Event::Start(Tag::Paragraph) => {
                    if paragraphs > 0 {
                        events.push(Event::Text(CowStr::Borrowed("\n\n")));
                    }
                    paragraphs += 1;
                }
                Event::End(TagEnd::Paragraph)
                | Event::Start(Tag::HtmlBlock)
                | Event::End(TagEnd::HtmlBlock) => {}
                _ => events.push(event),
            }
        }
        if self.autolink {
            events = autolink(events);
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading anchor generator with GitHub-style slugs.
///
/// Repeated slugs within one document get `-1`, `-2`, ... suffixes.
#[derive(Debug, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, unique among the slugs this slugger has produced
    pub fn slug(&mut self, text: &str) -> String {
        let original = github_slug(text);
        let mut result = original.clone();

        while self.occurrences.contains_key(&result) {
            let count = self.occurrences.entry(original.clone()).or_insert(0);
            *count += 1;
            result = format!("{}-{}", original, count);
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }

    /// Mark an explicit id as taken
    pub fn reserve(&mut self, id: &str) {
        self.occurrences.entry(id.to_string()).or_insert(0);
    }
}

/// GitHub-style slug: lowercase, punctuation removed, spaces become dashes
pub fn github_slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ' '))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Fill in `id` for every heading that does not carry one
fn assign_heading_ids(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut slugger = Slugger::new();
    let mut out: Vec<Event> = Vec::with_capacity(events.len());
    // (index of the heading start in `out`, heading text)
    let mut open: Option<(usize, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { id: Some(ref id), .. }) => {
                slugger.reserve(id);
                out.push(event);
            }
            Event::Start(Tag::Heading { id: None, .. }) => {
                open = Some((out.len(), String::new()));
                out.push(event);
            }
            Event::Text(ref text) | Event::Code(ref text) => {
                if let Some((_, heading_text)) = open.as_mut() {
                    heading_text.push_str(text);
                }
                out.push(event);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((index, heading_text)) = open.take() {
                    let slug = slugger.slug(&heading_text);
                    if let Some(Event::Start(Tag::Heading { id, .. })) = out.get_mut(index) {
                        *id = Some(CowStr::from(slug));
                    }
                }
                out.push(event);
            }
            _ => out.push(event),
        }
    }

    out
}

/// Turn bare URLs in text into links, outside links (markdown or raw `<a>`),
/// images and code blocks
fn autolink(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out: Vec<Event> = Vec::with_capacity(events.len());
    let mut link_depth = 0usize;
    let mut in_code_block = false;

    for event in events {
        match event {
            Event::Start(Tag::Link { .. }) | Event::Start(Tag::Image { .. }) => {
                link_depth += 1;
                out.push(event);
            }
            Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => {
                link_depth = link_depth.saturating_sub(1);
                out.push(event);
            }
            Event::InlineHtml(ref html) => {
                if ANCHOR_OPEN.is_match(html) {
                    link_depth += 1;
                } else if ANCHOR_CLOSE.is_match(html) {
                    link_depth = link_depth.saturating_sub(1);
                }
                out.push(event);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                out.push(event);
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push(event);
            }
            Event::Text(text) if link_depth == 0 && !in_code_block && BARE_URL.is_match(&text) => {
                link_text(&text, &mut out);
            }
            _ => out.push(event),
        }
    }

    out
}

fn link_text(text: &str, out: &mut Vec<Event<'_>>) {
    let mut last = 0;
    for found in BARE_URL.find_iter(text) {
        if found.start() > last {
            out.push(Event::Text(CowStr::from(text[last..found.start()].to_string())));
        }

        let url = found.as_str();
        let dest = if url.starts_with("www.") {
            format!("http://{}", url)
        } else {
            url.to_string()
        };

        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(dest),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(CowStr::from(url.to_string())));
        out.push(Event::End(TagEnd::Link));
        last = found.end();
    }

    if last < text.len() {
        out.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
}

/// Escape line-leading markers so the parser sees nothing but paragraphs.
///
/// Headings, quotes, list bullets, ordered markers, rules, setext underlines,
/// fences and link definitions render as the literal text they were written
/// as. Indents of four columns or more are dropped so they are not code.
fn neutralize_block_markers(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() + 16);

    for line in markdown.split_inclusive('\n') {
        let content = line.trim_start_matches([' ', '\t']);
        let indent = &line[..line.len() - content.len()];
        if indent.len() < 4 && !indent.contains('\t') {
            out.push_str(indent);
        }

        match block_marker(content.trim_end()) {
            Marker::None => out.push_str(content),
            Marker::Leading => {
                out.push('\\');
                out.push_str(content);
            }
            Marker::AfterDigits(digits) => {
                out.push_str(&content[..digits]);
                out.push('\\');
                out.push_str(&content[digits..]);
            }
        }
    }

    out
}

enum Marker {
    None,
    Leading,
    AfterDigits(usize),
}

fn block_marker(line: &str) -> Marker {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return Marker::None;
    };
    let second = chars.next();

    match first {
        '#' | '>' => Marker::Leading,
        '-' | '+' | '*' if second.map_or(true, |c| c == ' ' || c == '\t') => Marker::Leading,
        '-' | '*' | '_' | '=' if is_rule(line, first) => Marker::Leading,
        '`' | '~' if line.starts_with("```") || line.starts_with("~~~") => Marker::Leading,
        '[' if LINK_DEFINITION.is_match(line) => Marker::Leading,
        '0'..='9' => {
            let digits = line.chars().take_while(char::is_ascii_digit).count();
            let rest = &line[digits..];
            let is_ordered = digits <= 9
                && rest.starts_with(['.', ')'])
                && rest[1..]
                    .chars()
                    .next()
                    .map_or(true, |c| c == ' ' || c == '\t');
            if is_ordered {
                Marker::AfterDigits(digits)
            } else {
                Marker::None
            }
        }
        _ => Marker::None,
    }
}

/// `---`, `* * *`, `===`: a line made only of one marker character
fn is_rule(line: &str, marker: char) -> bool {
    let min = if matches!(marker, '-' | '=') { 1 } else { 3 };
    let count = line.chars().filter(|c| *c == marker).count();
    count >= min && line.chars().all(|c| c == marker || c == ' ' || c == '\t')
}
