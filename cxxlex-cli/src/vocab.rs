//! The fixed lexeme tables, for listing.

use clap::ValueEnum;
use cxxlex::tokenizer::{
    keyword::Keyword,
    symbol::{Operator, Punctuation},
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VocabCategory {
    Keyword,
    Operator,
    Punctuation,
}

impl VocabCategory {
    pub const ALL: [VocabCategory; 3] = [
        VocabCategory::Keyword,
        VocabCategory::Operator,
        VocabCategory::Punctuation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            VocabCategory::Keyword => "Keywords",
            VocabCategory::Operator => "Operators",
            VocabCategory::Punctuation => "Punctuations",
        }
    }

    /// Lexemes of this table in declaration order.
    pub fn lexemes(self) -> Vec<String> {
        match self {
            VocabCategory::Keyword => Keyword::iter().map(|k| k.as_ref().to_string()).collect(),
            VocabCategory::Operator => Operator::iter().map(|o| o.as_ref().to_string()).collect(),
            VocabCategory::Punctuation => Punctuation::iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }
}

/// Renders one block per table: a `Title (n):` line and the lexemes, space separated.
pub fn render(categories: &[VocabCategory]) -> String {
    categories
        .iter()
        .map(|category| {
            let lexemes = category.lexemes();
            format!(
                "{} ({}):\n{}\n",
                category.title(),
                lexemes.len(),
                lexemes.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(VocabCategory::Keyword.lexemes().len(), 97);
        assert_eq!(VocabCategory::Operator.lexemes().len(), 36);
        assert_eq!(VocabCategory::Punctuation.lexemes().len(), 12);
    }

    #[test]
    fn test_lexemes_are_spellings() {
        assert!(VocabCategory::Keyword.lexemes().iter().any(|k| k == "static_assert"));
        assert!(VocabCategory::Operator.lexemes().iter().any(|o| o == "<<="));
        assert!(VocabCategory::Punctuation.lexemes().iter().any(|p| p == "{"));
    }

    #[test]
    fn test_render() {
        let output = render(&[VocabCategory::Punctuation]);
        assert_eq!(output, "Punctuations (12):\n( ) { } [ ] ; : , . ? #\n");

        let output = render(&VocabCategory::ALL);
        assert!(output.starts_with("Keywords (97):\n"));
        assert!(output.contains("\n\nOperators (36):\n"));
    }
}
