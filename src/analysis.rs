//! The full lexing pipeline: comment stripping followed by tokenization.
//!
//! ```text
//! raw source → CommentStripper → cleaned text → Tokenizer → Analysis
//! ```

use serde::Serialize;

use crate::{
    preprocessor::{CommentStripper, Preprocessor},
    summary::TokenCount,
    tokenizer::{Token, Tokenizer},
};

/// Tokens in scan order together with their per-category counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub counts: TokenCount,
}

impl Analysis {
    pub fn total(&self) -> usize {
        self.counts.total()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Analyzer {
    stripper: CommentStripper,
    tokenizer: Tokenizer,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips comments from `source` and tokenizes the result.
    ///
    /// Line numbers refer to the stripped text. A block comment spanning `n`
    /// lines removes its `n - 1` newlines as well, so every token after it is
    /// reported `n - 1` lines earlier than in `source`.
    #[tracing::instrument(level = "debug", skip(self, source), fields(len = source.len()))]
    pub fn analyze(&self, source: &str) -> Analysis {
        let cleaned = self.stripper.process(source);
        self.tokenizer.tokenize(&cleaned)
    }
}

/// Runs the pipeline with a default [`Analyzer`].
pub fn analyze(source: &str) -> Analysis {
    Analyzer::new().analyze(source)
}
