//! # Comment Stripping
//!
//! Prepares raw source for the tokenizer by removing comments from the text
//! as a whole, before it is split into lines.
//!
//! ## Order of Removal
//!
//! 1. Line comments: `//` up to, but not including, the next `\n`.
//! 2. Block comments: `/*` up to the nearest `*/`, or to the end of the text
//!    when no `*/` follows. Blocks do not nest.
//!
//! Because line comments go first, a `//` inside a block comment takes the
//! rest of that line with it, `*/` included.
//!
//! ## Line Numbering
//!
//! Newlines inside a block comment are removed with it. Every line after a
//! multi-line block comment therefore moves up by the number of newlines the
//! comment contained, and the tokenizer reports lines of the stripped text,
//! not of the input.

use lazy_static::lazy_static;
use regex::Regex;

/// A trait for preprocessing different types of input
pub trait Preprocessor<T, U = T> {
    /// Process the input of type T and return the processed result
    fn process(&self, input: T) -> U;
}

lazy_static! {
    static ref LINE_COMMENT: Regex = Regex::new(r"//[^\n]*").expect("line comment pattern");
    static ref BLOCK_COMMENT: Regex =
        Regex::new(r"(?s)/\*.*?(?:\*/|\z)").expect("block comment pattern");
}

/// Removes `//` and `/* */` comments from source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentStripper;

impl CommentStripper {
    pub fn new() -> Self {
        Self
    }

    fn remove_line_comments(&self, input: &str) -> String {
        LINE_COMMENT.replace_all(input, "").into_owned()
    }

    fn remove_block_comments(&self, input: &str) -> String {
        BLOCK_COMMENT.replace_all(input, "").into_owned()
    }
}

impl Preprocessor<&str, String> for CommentStripper {
    #[tracing::instrument(level = "debug", skip(self, input))]
    fn process(&self, input: &str) -> String {
        let without_line = self.remove_line_comments(input);
        self.remove_block_comments(&without_line)
    }
}

/// Strips comments with a default [`CommentStripper`].
///
/// ```
/// use cxxlex::preprocessor::strip_comments;
///
/// assert_eq!(strip_comments("a; // note\nb; /* x\ny */ c;"), "a; \nb;  c;");
/// ```
pub fn strip_comments(input: &str) -> String {
    CommentStripper::new().process(input)
}
