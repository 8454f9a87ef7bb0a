//! Conversion errors

use std::io;
use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised while reading a Markdown document
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid UTF-8 on line {line}: {source}")]
    InvalidUtf8 {
        /// 1-based number of the line holding the first invalid byte
        line: usize,
        #[source]
        source: Utf8Error,
    },
}
