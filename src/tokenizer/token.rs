use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    combinator::{all_consuming, map, recognize},
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};

use super::{
    keyword::{is_word_char, is_word_start, parse_keyword, Keyword},
    literal::{is_number, parse_number},
    symbol::{parse_operator, parse_punctuation, Operator, Punctuation},
    whitespace::parse_whitespace,
};
use crate::{analysis::Analysis, summary::TokenCount};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// The class a token is sorted into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
    /// Anything no matcher accepts.
    Unknown,
}

impl Category {
    pub const COUNT: usize = 6;

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Plural label used in report summaries, e.g. `Keywords`.
    pub fn label(self) -> &'static str {
        match self {
            Category::Keyword => "Keywords",
            Category::Identifier => "Identifiers",
            Category::Number => "Numbers",
            Category::Operator => "Operators",
            Category::Punctuation => "Punctuations",
            Category::Unknown => "Unknowns",
        }
    }
}

/// A classified lexeme and the line of the cleaned text it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub category: Category,
    /// 1-based line in the comment-stripped text.
    pub line: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, category: Category, line: usize) -> Self {
        Self {
            value: value.into(),
            category,
            line,
        }
    }
}

/// Classifies a matched span.
///
/// The vocabulary tables are consulted before the patterns, so a span spelled
/// like a keyword is a keyword even when the identifier matcher produced it,
/// and `.` is an operator rather than punctuation.
pub fn classify(lexeme: &str) -> Category {
    if Keyword::is_keyword(lexeme) {
        Category::Keyword
    } else if Operator::is_operator(lexeme) {
        Category::Operator
    } else if Punctuation::is_punctuation(lexeme) {
        Category::Punctuation
    } else if is_number(lexeme) {
        Category::Number
    } else if is_identifier(lexeme) {
        Category::Identifier
    } else {
        Category::Unknown
    }
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn parse_identifier(input: &str) -> ParserResult<&str> {
    context(
        "identifier",
        recognize(pair(take_while1(is_word_start), take_while(is_word_char))),
    )(input)
}

fn is_identifier(lexeme: &str) -> bool {
    all_consuming(parse_identifier)(lexeme).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Lexeme<'a> {
    Span(&'a str),
    Whitespace,
}

/// One scan step: the first matcher that accepts the input wins.
fn next_lexeme(input: &str) -> ParserResult<Lexeme<'_>> {
    alt((
        map(recognize(parse_keyword), Lexeme::Span),
        map(parse_identifier, Lexeme::Span),
        map(parse_number, Lexeme::Span),
        map(recognize(parse_operator), Lexeme::Span),
        map(recognize(parse_punctuation), Lexeme::Span),
        map(parse_whitespace, |_| Lexeme::Whitespace),
    ))(input)
}

/// Splits off the first character as an unrecognized span.
fn unknown_char(input: &str) -> (&str, Lexeme<'_>) {
    let width = input.chars().next().map_or(input.len(), char::len_utf8);
    let (span, rest) = input.split_at(width);
    (rest, Lexeme::Span(span))
}

/// Scans comment-free text into classified tokens.
///
/// The tokenizer holds no state; every call builds its own token list and
/// counts, so one instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenizes `cleaned` line by line.
    ///
    /// Lines are the pieces between `\n` characters and are numbered from 1,
    /// so a line with nothing but whitespace still advances the numbering.
    /// No token spans a newline. Characters that no matcher accepts become
    /// one-character [`Category::Unknown`] tokens; this never fails.
    #[tracing::instrument(level = "debug", skip(self, cleaned))]
    pub fn tokenize(&self, cleaned: &str) -> Analysis {
        let mut tokens = Vec::new();
        let mut counts = TokenCount::default();

        for (index, line) in cleaned.split('\n').enumerate() {
            let line_number = index + 1;
            let mut remaining = line;

            while !remaining.is_empty() {
                let (rest, lexeme) =
                    next_lexeme(remaining).unwrap_or_else(|_| unknown_char(remaining));

                if let Lexeme::Span(value) = lexeme {
                    let category = classify(value);
                    counts.increment(category);
                    tokens.push(Token::new(value, category, line_number));
                }

                remaining = rest;
            }
        }

        tracing::debug!(tokens = tokens.len(), "tokenized input");
        Analysis { tokens, counts }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn values(analysis: &Analysis) -> Vec<&str> {
        analysis.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn test_identifier() {
        let (rest, id) = parse_identifier("my_var123 other").unwrap();
        assert_eq!(id, "my_var123");
        assert_eq!(rest, " other");

        assert!(parse_identifier("9lives").is_err());
    }

    #[test]
    fn test_classify() {
        let test_cases = [
            ("while", Category::Keyword),
            ("whilst", Category::Identifier),
            ("_", Category::Identifier),
            ("42", Category::Number),
            ("4.2", Category::Number),
            ("<<=", Category::Operator),
            (".", Category::Operator),
            ("::", Category::Operator),
            (":", Category::Punctuation),
            ("#", Category::Punctuation),
            ("@", Category::Unknown),
            ("\"", Category::Unknown),
        ];

        for (lexeme, expected) in test_cases.iter() {
            assert_eq!(classify(lexeme), *expected, "lexeme {:?}", lexeme);
        }
    }

    #[test]
    fn test_tokenizer_with_lines() {
        let analysis = Tokenizer::new().tokenize("int x;\n\n  y = 1.5;");

        assert_eq!(
            analysis.tokens,
            vec![
                Token::new("int", Category::Keyword, 1),
                Token::new("x", Category::Identifier, 1),
                Token::new(";", Category::Punctuation, 1),
                Token::new("y", Category::Identifier, 3),
                Token::new("=", Category::Operator, 3),
                Token::new("1.5", Category::Number, 3),
                Token::new(";", Category::Punctuation, 3),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let analysis = Tokenizer::new().tokenize("integer intx int");
        assert_eq!(values(&analysis), vec!["integer", "intx", "int"]);
        assert_eq!(analysis.tokens[0].category, Category::Identifier);
        assert_eq!(analysis.tokens[1].category, Category::Identifier);
        assert_eq!(analysis.tokens[2].category, Category::Keyword);
    }

    #[test]
    fn test_longest_operator() {
        let analysis = Tokenizer::new().tokenize("a <<= b");
        assert_eq!(values(&analysis), vec!["a", "<<=", "b"]);
        assert_eq!(analysis.tokens[1].category, Category::Operator);
    }

    #[test]
    fn test_adjacent_operators() {
        let analysis = Tokenizer::new().tokenize("i+++j");
        assert_eq!(values(&analysis), vec!["i", "++", "+", "j"]);

        let analysis = Tokenizer::new().tokenize("std::cout<<x->y");
        assert_eq!(values(&analysis), vec!["std", "::", "cout", "<<", "x", "->", "y"]);
    }

    #[test]
    fn test_unknown_characters() {
        let analysis = Tokenizer::new().tokenize("@");
        assert_eq!(analysis.tokens, vec![Token::new("@", Category::Unknown, 1)]);

        let analysis = Tokenizer::new().tokenize("x = 'A' $ é");
        assert_eq!(values(&analysis), vec!["x", "=", "'", "A", "'", "$", "é"]);
        assert_eq!(analysis.counts.get(Category::Unknown), 4);
    }

    #[test]
    fn test_string_literal_is_split() {
        let analysis = Tokenizer::new().tokenize(r#"cout << "Zero";"#);
        assert_eq!(values(&analysis), vec!["cout", "<<", "\"", "Zero", "\"", ";"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let analysis = Tokenizer::new().tokenize("");
        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.counts.total(), 0);

        let analysis = Tokenizer::new().tokenize(" \t\n\r\n   ");
        assert!(analysis.tokens.is_empty());
        for category in Category::iter() {
            assert_eq!(analysis.counts.get(category), 0);
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let analysis = Tokenizer::new().tokenize("a\r\nb");
        assert_eq!(
            analysis.tokens,
            vec![
                Token::new("a", Category::Identifier, 1),
                Token::new("b", Category::Identifier, 2),
            ]
        );
    }

    #[test]
    fn test_counts_follow_tokens() {
        let analysis = Tokenizer::new().tokenize("for (int i = 0; i < 10; i++) {}");
        assert_eq!(analysis.counts.get(Category::Keyword), 2);
        assert_eq!(analysis.counts.get(Category::Identifier), 3);
        assert_eq!(analysis.counts.get(Category::Number), 2);
        assert_eq!(analysis.counts.get(Category::Operator), 3);
        assert_eq!(analysis.counts.get(Category::Punctuation), 6);
        assert_eq!(analysis.counts.total(), analysis.tokens.len());
    }

    #[test]
    fn test_category_display_and_label() {
        assert_eq!(Category::Punctuation.to_string(), "PUNCTUATION");
        assert_eq!(Category::Unknown.to_string(), "UNKNOWN");
        assert_eq!(Category::Number.label(), "Numbers");
        assert_eq!("KEYWORD".parse::<Category>().unwrap(), Category::Keyword);
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::new("x", Category::Identifier, 3);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value": "x", "type": "IDENTIFIER", "line": 3})
        );
    }
}
