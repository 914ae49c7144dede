//! Per-category token counts.

use serde::{ser::SerializeMap, Serialize};
use strum::IntoEnumIterator;

use crate::tokenizer::{Category, Token};

/// Summary key holding the total.
pub const TOTAL_LABEL: &str = "Total Tokens";

/// Occurrence count for every [`Category`], all starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCount {
    counts: [usize; Category::COUNT],
}

impl TokenCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = Self::default();
        for token in tokens {
            counts.increment(token.category);
        }
        counts
    }

    pub fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Categories with their counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::iter().map(move |category| (category, self.get(category)))
    }
}

// Serialized with the labels the report summary uses:
// {"Total Tokens": 7, "Keywords": 2, ...}
impl Serialize for TokenCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::COUNT + 1))?;
        map.serialize_entry(TOTAL_LABEL, &self.total())?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let counts = TokenCount::new();
        assert_eq!(counts.total(), 0);
        assert!(counts.iter().all(|(_, count)| count == 0));
        assert_eq!(counts.iter().count(), Category::COUNT);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let mut counts = TokenCount::new();
        counts.increment(Category::Keyword);
        counts.increment(Category::Keyword);
        counts.increment(Category::Unknown);
        counts.increment(Category::Number);

        assert_eq!(counts.get(Category::Keyword), 2);
        assert_eq!(counts.get(Category::Unknown), 1);
        assert_eq!(counts.get(Category::Operator), 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), counts.total());
    }

    #[test]
    fn test_from_tokens() {
        let tokens = vec![
            Token::new("int", Category::Keyword, 1),
            Token::new("x", Category::Identifier, 1),
            Token::new(";", Category::Punctuation, 1),
        ];
        let counts = TokenCount::from_tokens(&tokens);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(Category::Identifier), 1);
    }

    #[test]
    fn test_serialize_uses_labels() {
        let mut counts = TokenCount::new();
        counts.increment(Category::Operator);

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Total Tokens": 1,
                "Keywords": 0,
                "Identifiers": 0,
                "Numbers": 0,
                "Operators": 1,
                "Punctuations": 0,
                "Unknowns": 0,
            })
        );
    }
}
