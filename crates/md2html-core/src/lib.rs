//! md2html-core: Core library for converting a small Markdown subset to HTML
//!
//! This crate provides:
//! - Line classification and the block state machine (`LineConverter`)
//! - Inline substitutions (digest, redact, bold, emphasis)
//! - HTML fragment model and writer
//!
//! # Example
//!
//! ```
//! use md2html_core::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text.\n");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>\nSome <b>bold</b> text.\n</p>\n");
//! ```

pub mod converter;
pub mod error;
pub mod html;
pub mod inline;

pub use converter::{
    LineConverter, LineKind, convert_lines, convert_reader, markdown_to_html, split_lines,
};
pub use error::ConvertError;
pub use html::{Block, Fragment, render};
