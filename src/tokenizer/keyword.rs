//! # Keyword Vocabulary
//!
//! The reserved words of the C++ dialect the lexer recognizes, covering the
//! C++20 set plus the transactional-memory and reflection extensions
//! (`atomic_cancel`, `synchronized`, `reflexpr`, ...).
//!
//! ## Parsing Strategy
//!
//! Keywords are matched against a whole word, so `integer` is never split into
//! the keyword `int` followed by `eger`. A word that is not in the vocabulary
//! makes [`parse_keyword`] fail and lets the identifier matcher take over.
//!
//! The [`Keyword`] enum derives `strum` traits for string conversion
//! (`EnumString`, `AsRefStr`, `Display`) and iteration (`EnumIter`).

use std::str::FromStr;

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::{map_res, recognize},
    error::context,
    sequence::pair,
};

use super::token::ParserResult;

/// A reserved word of the C++ vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Alignas,
    Alignof,
    And,
    #[strum(serialize = "and_eq")]
    AndEq,
    Asm,
    #[strum(serialize = "atomic_cancel")]
    AtomicCancel,
    #[strum(serialize = "atomic_commit")]
    AtomicCommit,
    #[strum(serialize = "atomic_noexcept")]
    AtomicNoexcept,
    Auto,
    Bitand,
    Bitor,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    #[strum(serialize = "char8_t")]
    Char8T,
    #[strum(serialize = "char16_t")]
    Char16T,
    #[strum(serialize = "char32_t")]
    Char32T,
    Class,
    Compl,
    Concept,
    Const,
    Consteval,
    Constexpr,
    Constinit,
    #[strum(serialize = "const_cast")]
    ConstCast,
    Continue,
    #[strum(serialize = "co_await")]
    CoAwait,
    #[strum(serialize = "co_return")]
    CoReturn,
    #[strum(serialize = "co_yield")]
    CoYield,
    Decltype,
    Default,
    Delete,
    Do,
    Double,
    #[strum(serialize = "dynamic_cast")]
    DynamicCast,
    Else,
    Enum,
    Explicit,
    Export,
    Extern,
    False,
    Float,
    For,
    Friend,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Mutable,
    Namespace,
    New,
    Noexcept,
    Not,
    #[strum(serialize = "not_eq")]
    NotEq,
    Nullptr,
    Operator,
    Or,
    #[strum(serialize = "or_eq")]
    OrEq,
    Private,
    Protected,
    Public,
    Reflexpr,
    Register,
    #[strum(serialize = "reinterpret_cast")]
    ReinterpretCast,
    Requires,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    #[strum(serialize = "static_assert")]
    StaticAssert,
    #[strum(serialize = "static_cast")]
    StaticCast,
    Struct,
    Switch,
    Synchronized,
    Template,
    This,
    #[strum(serialize = "thread_local")]
    ThreadLocal,
    Throw,
    True,
    Try,
    Typedef,
    Typeid,
    Typename,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    #[strum(serialize = "wchar_t")]
    WcharT,
    While,
    Xor,
    #[strum(serialize = "xor_eq")]
    XorEq,
}

impl Keyword {
    /// Returns `true` when `word` is exactly one of the reserved words.
    pub fn is_keyword(word: &str) -> bool {
        Keyword::from_str(word).is_ok()
    }
}

pub(crate) fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parses a keyword bounded by word boundaries.
///
/// The whole word at the start of `input` is read first and only accepted
/// when it spells a keyword, so a keyword prefix of a longer identifier never
/// matches.
///
/// # Examples
///
/// ```
/// # use cxxlex::tokenizer::keyword::{parse_keyword, Keyword};
/// let (rest, keyword) = parse_keyword("int x;").unwrap();
/// assert_eq!(keyword, Keyword::Int);
/// assert_eq!(rest, " x;");
///
/// assert!(parse_keyword("integer").is_err());
/// ```
pub fn parse_keyword(input: &str) -> ParserResult<Keyword> {
    context(
        "keyword",
        map_res(
            recognize(pair(take_while1(is_word_start), take_while(is_word_char))),
            Keyword::from_str,
        ),
    )(input)
}
