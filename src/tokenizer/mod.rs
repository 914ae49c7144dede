//! # Tokenizer Component
//!
//! Turns comment-free C++ text into a flat sequence of classified tokens with
//! line attribution.
//!
//! ## Scanning
//!
//! The text is split on `\n` and every line is scanned left to right. At each
//! position the matchers are tried in a fixed order and the first one that
//! accepts the input wins:
//!
//! 1. keyword, bounded by word boundaries ([`keyword`])
//! 2. identifier, `[a-zA-Z_][a-zA-Z0-9_]*` ([`token::parse_identifier`])
//! 3. number, `[0-9]+(\.[0-9]+)?` ([`literal`])
//! 4. operator, longest lexeme first ([`symbol`])
//! 5. punctuation ([`symbol`])
//! 6. whitespace, dropped ([`whitespace`])
//!
//! A character none of them accepts becomes a one-character `UNKNOWN` token,
//! so the tokenizer is defined for every input.
//!
//! ## Classification
//!
//! Each matched span is classified by [`token::classify`], which consults the
//! keyword, operator and punctuation tables before the number and identifier
//! patterns.
//!
//! ## Component Structure
//!
//! * [`token`]: token and category types, classification and the [`Tokenizer`]
//! * [`keyword`]: the reserved word table
//! * [`symbol`]: operator and punctuation tables
//! * [`literal`]: numeric literals
//! * [`whitespace`]: intra-line whitespace
//!
//! ## Usage Example
//!
//! ```rust
//! use cxxlex::tokenizer::{Category, Tokenizer};
//!
//! let analysis = Tokenizer::new().tokenize("int x = 42;");
//! assert_eq!(analysis.tokens.len(), 5);
//! assert_eq!(analysis.tokens[0].category, Category::Keyword);
//! assert_eq!(analysis.counts.total(), 5);
//! ```

pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;

pub use token::{classify, Category, Token, Tokenizer};
