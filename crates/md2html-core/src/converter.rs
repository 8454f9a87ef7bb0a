//! Line-by-line Markdown to HTML conversion
//!
//! Each input line is classified (heading, list item, or text), then fed
//! through a small state machine that tracks which block is open and emits
//! the matching opening and closing tags.

use crate::error::ConvertError;
use crate::html::{Block, Fragment, render};
use crate::inline;
use regex::Regex;
use std::io::Read;
use std::sync::LazyLock;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) (.*)$").expect("heading pattern is valid"));

/// What a single (right-trimmed) input line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`..`######` followed by a space
    Heading { level: u8, text: &'a str },
    /// `- item`
    UnorderedItem(&'a str),
    /// `* item`
    OrderedItem(&'a str),
    /// Anything else, including blank lines
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a line; headings win over list items, list items over text
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = HEADING_PATTERN.captures(line) {
            let hashes = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return LineKind::Heading {
                level: hashes.len() as u8,
                text,
            };
        }
        if let Some(item) = line.strip_prefix("- ") {
            return LineKind::UnorderedItem(item);
        }
        if let Some(item) = line.strip_prefix("* ") {
            return LineKind::OrderedItem(item);
        }
        LineKind::Text(line)
    }
}

/// Single-pass converter state
///
/// At most one list is open at a time, but a list may open inside a
/// paragraph that already has content; such a paragraph stays open across
/// the list and its next content line is preceded by `<br/>`.
#[derive(Debug, Default)]
pub struct LineConverter {
    /// Open list, `Block::UnorderedList` or `Block::OrderedList`
    list: Option<Block>,
    /// Whether a paragraph is open; an open paragraph always has content
    paragraph: bool,
    /// Emitted output, one fragment per line
    fragments: Vec<Fragment>,
}

impl LineConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line of the document (trailing whitespace already removed)
    pub fn push_line(&mut self, line: &str) {
        match LineKind::classify(line) {
            LineKind::Heading { level, text } => {
                self.close_list();
                self.close_paragraph();
                self.fragments.push(Fragment::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineKind::UnorderedItem(item) => self.push_item(Block::UnorderedList, item),
            LineKind::OrderedItem(item) => self.push_item(Block::OrderedList, item),
            LineKind::Text(text) => self.push_text(text),
        }
    }

    /// Close the open list, then the open paragraph, and return the fragments
    pub fn finish(mut self) -> Vec<Fragment> {
        self.close_list();
        self.close_paragraph();
        self.fragments
    }

    fn push_item(&mut self, list: Block, item: &str) {
        if self.list != Some(list) {
            self.close_list();
            self.fragments.push(Fragment::Open(list));
            self.list = Some(list);
        }
        self.fragments.push(Fragment::ListItem(item.to_string()));
    }

    fn push_text(&mut self, line: &str) {
        self.close_list();

        let line = inline::substitute(line);
        if line.is_empty() {
            self.close_paragraph();
            return;
        }

        if self.paragraph {
            self.fragments.push(Fragment::LineBreak);
        } else {
            self.fragments.push(Fragment::Open(Block::Paragraph));
            self.paragraph = true;
        }
        let text = inline::format_emphasis(&line).into_owned();
        self.fragments.push(Fragment::Text(text));
    }

    fn close_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.fragments.push(Fragment::Close(list));
        }
    }

    fn close_paragraph(&mut self) {
        if std::mem::take(&mut self.paragraph) {
            self.fragments.push(Fragment::Close(Block::Paragraph));
        }
    }
}

/// Split text into lines ending at `\n`, `\r\n` or a lone `\r`
///
/// A trailing line ending does not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, tail) = match rest.find(['\r', '\n']) {
            Some(i) if rest[i..].starts_with("\r\n") => (&rest[..i], &rest[i + 2..]),
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        rest = tail;
        Some(line)
    })
}

/// Convert a sequence of right-trimmed lines into HTML fragments
pub fn convert_lines<I, S>(lines: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut converter = LineConverter::new();
    for line in lines {
        converter.push_line(line.as_ref());
    }
    converter.finish()
}

/// Convert a whole Markdown document to HTML
///
/// Lines are split with `split_lines` and stripped of trailing whitespace
/// before conversion.
pub fn markdown_to_html(markdown: &str) -> String {
    render(&convert_lines(split_lines(markdown).map(str::trim_end)))
}

/// Convert a UTF-8 Markdown document read from `reader` to HTML
pub fn convert_reader<R: Read>(mut reader: R) -> Result<String, ConvertError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let markdown = std::str::from_utf8(&bytes).map_err(|source| {
        // valid prefix always ends on a char boundary
        let prefix = std::str::from_utf8(&bytes[..source.valid_up_to()]).unwrap_or_default();
        let at_line_start = prefix.is_empty() || prefix.ends_with(['\r', '\n']);
        ConvertError::InvalidUtf8 {
            line: split_lines(prefix).count() + usize::from(at_line_start),
            source,
        }
    })?;
    Ok(markdown_to_html(markdown))
}
