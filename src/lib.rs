//! # cxxlex: Lexical Analysis for C++ Source
//!
//! cxxlex turns C++ source text into a flat sequence of classified tokens,
//! each tagged with the line it was found on, and counts how many tokens fall
//! into every category.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Code → Comment Stripper → Tokenizer → Summary → Report
//! ```
//!
//! ### Stage 1: Comment Stripping
//!
//! The [`preprocessor`] module removes `//` and `/* */` comments from the whole
//! text before it is split into lines.
//!
//! ### Stage 2: Tokenization
//!
//! The [`tokenizer`] module scans the cleaned text line by line with an ordered
//! set of matchers and classifies every span as a keyword, identifier, number,
//! operator, punctuation or unknown character.
//!
//! ### Stage 3: Summary Aggregation
//!
//! The [`summary`] module keeps one counter per category, updated as tokens are
//! classified. [`analysis`] ties the stages together.
//!
//! ### Stage 4: Reporting
//!
//! The [`report`] module renders the tokens and summary as the plain-text
//! listing and parses such listings back.
//!
//! ## Example
//!
//! ```rust
//! use cxxlex::{analyze, Category};
//!
//! let analysis = analyze("int x = 1; // counter");
//! assert_eq!(analysis.total(), 5);
//! assert_eq!(analysis.counts.get(Category::Keyword), 1);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod preprocessor;
pub mod report;
pub mod summary;
pub mod tokenizer;

// Re-exports
pub use analysis::{analyze, Analysis, Analyzer};
pub use error::*;
pub use summary::TokenCount;
pub use tokenizer::{Category, Token, Tokenizer};
