//! # Symbol Vocabulary
//!
//! Operators and punctuation recognized by the lexer.
//!
//! * [`Operator`]: arithmetic, comparison, logical, bitwise, assignment and
//!   access operators
//! * [`Punctuation`]: single-character structural symbols
//!
//! ## Parsing Strategy
//!
//! [`parse_operator`] matches longest-first: every three-character operator is
//! tried before any two-character one, and those before the single-character
//! ones. `a <<= b` therefore yields `<<=` and never `<<` followed by `=`.
//!
//! `.` belongs to both tables. The operator matcher runs first, and
//! classification checks the operator table before the punctuation table, so a
//! lone `.` is always an operator.
//!
//! `Display` is written by hand from `AsRefStr`; strum's derived `Display`
//! treats braces in the lexeme as format placeholders.

use std::{fmt, str::FromStr};

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::value,
    error::context,
};

use super::token::ParserResult;

/// Operator lexemes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIter, strum::AsRefStr,
)]
pub enum Operator {
    /// Left shift assignment (`<<=`)
    #[strum(serialize = "<<=")]
    ShiftLeftAssign,
    /// Right shift assignment (`>>=`)
    #[strum(serialize = ">>=")]
    ShiftRightAssign,

    /// Equality (`==`)
    #[strum(serialize = "==")]
    EqualEqual,
    /// Inequality (`!=`)
    #[strum(serialize = "!=")]
    NotEqual,
    /// Less than or equal (`<=`)
    #[strum(serialize = "<=")]
    LessEqual,
    /// Greater than or equal (`>=`)
    #[strum(serialize = ">=")]
    GreaterEqual,
    /// Increment (`++`)
    #[strum(serialize = "++")]
    PlusPlus,
    /// Decrement (`--`)
    #[strum(serialize = "--")]
    MinusMinus,
    /// Logical AND (`&&`)
    #[strum(serialize = "&&")]
    And,
    /// Logical OR (`||`)
    #[strum(serialize = "||")]
    Or,
    /// Left shift (`<<`)
    #[strum(serialize = "<<")]
    ShiftLeft,
    /// Right shift (`>>`)
    #[strum(serialize = ">>")]
    ShiftRight,
    #[strum(serialize = "+=")]
    PlusAssign,
    #[strum(serialize = "-=")]
    MinusAssign,
    #[strum(serialize = "*=")]
    MultiplyAssign,
    #[strum(serialize = "/=")]
    DivideAssign,
    #[strum(serialize = "%=")]
    ModuloAssign,
    #[strum(serialize = "&=")]
    BitAndAssign,
    #[strum(serialize = "|=")]
    BitOrAssign,
    #[strum(serialize = "^=")]
    BitXorAssign,
    /// Member access through pointer (`->`)
    #[strum(serialize = "->")]
    Arrow,
    /// Scope resolution (`::`)
    #[strum(serialize = "::")]
    Scope,

    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "%")]
    Modulo,
    /// Assignment (`=`)
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ">")]
    Greater,
    /// Logical NOT (`!`)
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "&")]
    BitAnd,
    #[strum(serialize = "|")]
    BitOr,
    #[strum(serialize = "^")]
    BitXor,
    /// Bitwise complement (`~`)
    #[strum(serialize = "~")]
    BitNot,
    /// Member access (`.`)
    #[strum(serialize = ".")]
    Dot,
}

impl Operator {
    pub fn is_operator(lexeme: &str) -> bool {
        Operator::from_str(lexeme).is_ok()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Punctuation lexemes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIter, strum::AsRefStr,
)]
pub enum Punctuation {
    #[strum(serialize = "(")]
    OpenParen,
    #[strum(serialize = ")")]
    CloseParen,
    #[strum(serialize = "{")]
    OpenBrace,
    #[strum(serialize = "}")]
    CloseBrace,
    #[strum(serialize = "[")]
    OpenBracket,
    #[strum(serialize = "]")]
    CloseBracket,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = ",")]
    Comma,
    /// Shadowed by [`Operator::Dot`] during classification.
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "?")]
    Question,
    #[strum(serialize = "#")]
    Hash,
}

impl Punctuation {
    pub fn is_punctuation(lexeme: &str) -> bool {
        Punctuation::from_str(lexeme).is_ok()
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Parses an operator, preferring the longest lexeme available.
///
/// # Examples
///
/// ```
/// # use cxxlex::tokenizer::symbol::{parse_operator, Operator};
/// let (rest, op) = parse_operator("<<= b").unwrap();
/// assert_eq!(op, Operator::ShiftLeftAssign);
/// assert_eq!(rest, " b");
/// ```
pub fn parse_operator(input: &str) -> ParserResult<Operator> {
    context(
        "operator",
        alt((
            // three characters
            alt((
                value(Operator::ShiftLeftAssign, tag("<<=")),
                value(Operator::ShiftRightAssign, tag(">>=")),
            )),
            // two characters
            alt((
                value(Operator::EqualEqual, tag("==")),
                value(Operator::NotEqual, tag("!=")),
                value(Operator::LessEqual, tag("<=")),
                value(Operator::GreaterEqual, tag(">=")),
                value(Operator::PlusPlus, tag("++")),
                value(Operator::MinusMinus, tag("--")),
                value(Operator::And, tag("&&")),
                value(Operator::Or, tag("||")),
                value(Operator::ShiftLeft, tag("<<")),
                value(Operator::ShiftRight, tag(">>")),
                value(Operator::PlusAssign, tag("+=")),
                value(Operator::MinusAssign, tag("-=")),
                value(Operator::MultiplyAssign, tag("*=")),
                value(Operator::DivideAssign, tag("/=")),
                value(Operator::ModuloAssign, tag("%=")),
                value(Operator::BitAndAssign, tag("&=")),
                value(Operator::BitOrAssign, tag("|=")),
                value(Operator::BitXorAssign, tag("^=")),
                value(Operator::Arrow, tag("->")),
                value(Operator::Scope, tag("::")),
            )),
            // single character
            alt((
                value(Operator::Plus, tag("+")),
                value(Operator::Minus, tag("-")),
                value(Operator::Multiply, tag("*")),
                value(Operator::Divide, tag("/")),
                value(Operator::Modulo, tag("%")),
                value(Operator::Assign, tag("=")),
                value(Operator::Less, tag("<")),
                value(Operator::Greater, tag(">")),
                value(Operator::Not, tag("!")),
                value(Operator::BitAnd, tag("&")),
                value(Operator::BitOr, tag("|")),
                value(Operator::BitXor, tag("^")),
                value(Operator::BitNot, tag("~")),
                value(Operator::Dot, tag(".")),
            )),
        )),
    )(input)
}

/// Parses a single punctuation character.
pub fn parse_punctuation(input: &str) -> ParserResult<Punctuation> {
    context(
        "punctuation",
        alt((
            value(Punctuation::OpenParen, tag("(")),
            value(Punctuation::CloseParen, tag(")")),
            value(Punctuation::OpenBrace, tag("{")),
            value(Punctuation::CloseBrace, tag("}")),
            value(Punctuation::OpenBracket, tag("[")),
            value(Punctuation::CloseBracket, tag("]")),
            value(Punctuation::Semicolon, tag(";")),
            value(Punctuation::Colon, tag(":")),
            value(Punctuation::Comma, tag(",")),
            value(Punctuation::Dot, tag(".")),
            value(Punctuation::Question, tag("?")),
            value(Punctuation::Hash, tag("#")),
        )),
    )(input)
}
