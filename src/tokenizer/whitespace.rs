//! Whitespace inside a line. It separates tokens and is dropped by the
//! tokenizer; newlines never reach this parser because the input is split
//! into lines first.

use nom::{bytes::complete::take_while1, error::context};

use super::token::ParserResult;

pub fn parse_whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace", take_while1(char::is_whitespace))(input)
}
