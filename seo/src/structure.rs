//! Structural auditor
//!
//! Flags sections and paragraphs that are too long to read comfortably.
//! The body is split into top-level blocks; paragraphs nested in lists,
//! blockquotes or tables are part of their container and are not audited.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{html_to_text, word_count};

/// Running word total above which a section needs a subheading
pub const MAX_SECTION_WORDS: usize = 300;

/// Word count above which a single paragraph is too long
pub const MAX_PARAGRAPH_WORDS: usize = 150;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)\b[^>]*?(/?)>").expect("tag pattern is valid")
});

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static UNTERMINATED_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*$").expect("unterminated tag pattern is valid"));

/// Kind of readability defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    SectionTooLongWithoutHeading,
    ParagraphTooLong,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::SectionTooLongWithoutHeading => write!(f, "section_too_long_without_heading"),
            IssueKind::ParagraphTooLong => write!(f, "paragraph_too_long"),
        }
    }
}

/// A readability defect found in the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralIssue {
    pub kind: IssueKind,
    /// The measured word count the issue refers to
    pub words: usize,
    pub message: String,
}

impl StructuralIssue {
    pub fn section_too_long(words: usize) -> Self {
        Self {
            kind: IssueKind::SectionTooLongWithoutHeading,
            words,
            message: format!(
                "Section has {} words without a subheading. Add an H2 or H3 heading at least every {} words.",
                words, MAX_SECTION_WORDS
            ),
        }
    }

    pub fn paragraph_too_long(words: usize) -> Self {
        Self {
            kind: IssueKind::ParagraphTooLong,
            words,
            message: format!(
                "Paragraph has {} words. Keep paragraphs under {} words.",
                words, MAX_PARAGRAPH_WORDS
            ),
        }
    }
}

/// Audit the body for overlong sections and paragraphs.
///
/// Issues are returned in document order. A section over the limit yields one
/// issue for every paragraph that keeps it over the limit, each carrying the
/// running total at that point. Omitted end tags are implied; truncated
/// markup (an unterminated tag or comment) yields no issues.
pub fn audit_structure(body_html: &str) -> Vec<StructuralIssue> {
    let blocks = match top_level_blocks(body_html) {
        Ok(blocks) => blocks,
        Err(e) => {
            tracing::debug!(error = %e, "Skipping structural audit of malformed markup");
            return Vec::new();
        }
    };

    let mut issues = Vec::new();
    let mut words_since_heading = 0;

    for block in blocks {
        match block.kind {
            BlockKind::Heading(2) | BlockKind::Heading(3) => words_since_heading = 0,
            BlockKind::Paragraph => {
                let words = word_count(&html_to_text(block.inner));
                words_since_heading += words;

                if words_since_heading > MAX_SECTION_WORDS {
                    issues.push(StructuralIssue::section_too_long(words_since_heading));
                }
                if words > MAX_PARAGRAPH_WORDS {
                    issues.push(StructuralIssue::paragraph_too_long(words));
                }
            }
            _ => {}
        }
    }

    issues
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MarkupError {
    #[error("tag starting at byte {0} is never terminated")]
    UnterminatedTag(usize),

    #[error("comment starting at byte {0} is never terminated")]
    UnterminatedComment(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Heading(u8),
    Paragraph,
    Other,
}

impl BlockKind {
    fn from_tag(name: &str) -> Self {
        match name {
            "p" => BlockKind::Paragraph,
            "h1" => BlockKind::Heading(1),
            "h2" => BlockKind::Heading(2),
            "h3" => BlockKind::Heading(3),
            "h4" => BlockKind::Heading(4),
            "h5" => BlockKind::Heading(5),
            "h6" => BlockKind::Heading(6),
            _ => BlockKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    pub kind: BlockKind,
    /// Markup between the opening and closing tag
    pub inner: &'a str,
}

/// Split serialized rich text into its top-level elements.
///
/// Text between top-level elements is ignored. Tag names are matched
/// case-insensitively; void elements never open a nesting level. Omitted
/// end tags are implied the way an HTML parser implies them, stray end tags
/// are dropped and elements still open at the end of input are closed
/// there. Only truncated markup is an error.
pub(crate) fn top_level_blocks(html: &str) -> Result<Vec<Block<'_>>, MarkupError> {
    let comments: Vec<(usize, usize)> = COMMENT_RE
        .find_iter(html)
        .map(|m| (m.start(), m.end()))
        .collect();
    let in_comment = |pos: usize| comments.iter().any(|&(s, e)| s <= pos && pos < e);

    if let Some((pos, _)) = html.match_indices("<!--").find(|&(pos, _)| !in_comment(pos)) {
        return Err(MarkupError::UnterminatedComment(pos));
    }
    if let Some(m) = UNTERMINATED_TAG_RE.find(html) {
        if !in_comment(m.start()) {
            return Err(MarkupError::UnterminatedTag(m.start()));
        }
    }

    let mut splitter = BlockSplitter::new(html);

    for caps in TAG_RE.captures_iter(html) {
        let Some(tag) = caps.get(0) else { continue };
        if in_comment(tag.start()) {
            continue;
        }
        let name = caps[2].to_ascii_lowercase();

        if !caps[1].is_empty() {
            splitter.close(&name, tag.start());
        } else if !caps[3].is_empty() || VOID_ELEMENTS.contains(&name.as_str()) {
            splitter.void(&name, tag.start());
        } else {
            splitter.open(name, tag.start(), tag.end());
        }
    }

    Ok(splitter.finish())
}

/// Elements whose start tag closes an open `<p>`
const CLOSES_PARAGRAPH: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "menu", "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// Elements an implied end tag never reaches past
const SCOPE_BOUNDARIES: &[&str] = &[
    "applet", "button", "caption", "marquee", "object", "table", "td", "template", "th",
];

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

struct BlockSplitter<'a> {
    html: &'a str,
    blocks: Vec<Block<'a>>,
    stack: Vec<String>,
    current: Option<(BlockKind, usize)>,
}

impl<'a> BlockSplitter<'a> {
    fn new(html: &'a str) -> Self {
        Self {
            html,
            blocks: Vec::new(),
            stack: Vec::new(),
            current: None,
        }
    }

    fn open(&mut self, name: String, tag_start: usize, tag_end: usize) {
        self.imply_end_tags(&name, tag_start);
        if self.stack.is_empty() {
            self.current = Some((BlockKind::from_tag(&name), tag_end));
        }
        self.stack.push(name);
    }

    fn void(&mut self, name: &str, tag_start: usize) {
        self.imply_end_tags(name, tag_start);
        if self.stack.is_empty() {
            self.blocks.push(Block {
                kind: BlockKind::Other,
                inner: "",
            });
        }
    }

    fn close(&mut self, name: &str, tag_start: usize) {
        match self.stack.iter().rposition(|open| open == name) {
            Some(index) => self.close_from(index, tag_start),
            None => tracing::trace!(tag = %name, "Ignoring stray end tag"),
        }
    }

    fn finish(mut self) -> Vec<Block<'a>> {
        if !self.stack.is_empty() {
            self.close_from(0, self.html.len());
        }
        self.blocks
    }

    /// Close the elements a new `name` start tag ends implicitly
    fn imply_end_tags(&mut self, name: &str, at: usize) {
        if CLOSES_PARAGRAPH.contains(&name) {
            self.close_in_scope(&["p"], &[], at);
        }
        match name {
            "li" => self.close_in_scope(&["li"], &["ol", "ul"], at),
            "dd" | "dt" => self.close_in_scope(&["dd", "dt"], &["dl"], at),
            "tr" => self.close_open(&["tr"], &["table", "tbody", "thead", "tfoot"], at),
            "td" | "th" => self.close_open(&["td", "th"], &["tr", "table"], at),
            "tbody" | "thead" | "tfoot" => {
                self.close_open(&["tbody", "thead", "tfoot"], &["table"], at)
            }
            "option" => self.close_open(&["option"], &["select", "datalist", "optgroup"], at),
            _ if HEADINGS.contains(&name) => {
                let heading_open = self
                    .stack
                    .last()
                    .is_some_and(|top| HEADINGS.contains(&top.as_str()));
                if heading_open {
                    self.close_from(self.stack.len() - 1, at);
                }
            }
            _ => {}
        }
    }

    fn close_in_scope(&mut self, names: &[&str], boundaries: &[&str], at: usize) {
        let boundaries: Vec<&str> = boundaries.iter().chain(SCOPE_BOUNDARIES).copied().collect();
        self.close_open(names, &boundaries, at);
    }

    /// Close the innermost open element named in `names`, unless one of
    /// `boundaries` is open inside it
    fn close_open(&mut self, names: &[&str], boundaries: &[&str], at: usize) {
        let found = self
            .stack
            .iter()
            .rev()
            .map(String::as_str)
            .take_while(|open| !boundaries.contains(open))
            .position(|open| names.contains(&open));
        if let Some(depth) = found {
            self.close_from(self.stack.len() - 1 - depth, at);
        }
    }

    fn close_from(&mut self, index: usize, end: usize) {
        self.stack.truncate(index);
        if self.stack.is_empty() {
            if let Some((kind, start)) = self.current.take() {
                self.blocks.push(Block {
                    kind,
                    inner: &self.html[start..end],
                });
            }
        }
    }
}
