//! HTML fragments and writer
//!
//! The converter emits one `Fragment` per output line; `render` joins them
//! into the final document. Text is written verbatim, without escaping.

use std::fmt;

/// Block-level container that stays open across lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph,
    UnorderedList,
    OrderedList,
}

impl Block {
    /// HTML tag name for this block
    pub fn tag(self) -> &'static str {
        match self {
            Block::Paragraph => "p",
            Block::UnorderedList => "ul",
            Block::OrderedList => "ol",
        }
    }
}

/// A single line of HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Opening tag of a block (`<p>`, `<ul>`, `<ol>`)
    Open(Block),
    /// Closing tag of a block
    Close(Block),
    /// `<hN>text</hN>`
    Heading { level: u8, text: String },
    /// `<li>text</li>`
    ListItem(String),
    /// `<br/>` between two content lines of one paragraph
    LineBreak,
    /// Paragraph content line
    Text(String),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Open(block) => write!(f, "<{}>", block.tag()),
            Fragment::Close(block) => write!(f, "</{}>", block.tag()),
            Fragment::Heading { level, text } => write!(f, "<h{level}>{text}</h{level}>"),
            Fragment::ListItem(text) => write!(f, "<li>{text}</li>"),
            Fragment::LineBreak => f.write_str("<br/>"),
            Fragment::Text(text) => f.write_str(text),
        }
    }
}

/// Render fragments as a document: one fragment per line, newline-terminated
pub fn render(fragments: &[Fragment]) -> String {
    let mut output = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&fragment.to_string());
    }
    output.push('\n');
    output
}
