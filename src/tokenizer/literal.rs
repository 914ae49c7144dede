//! Numeric literals: one or more digits with an optional fractional part.
//!
//! Exponents, hexadecimal and type suffixes are not part of the grammar;
//! `1e5` scans as the number `1` followed by the identifier `e5`.

use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    error::context,
    sequence::pair,
};

use super::token::ParserResult;

/// Parses `[0-9]+(\.[0-9]+)?` and returns the matched text.
///
/// A trailing `.` without digits is left in the input.
pub fn parse_number(input: &str) -> ParserResult<&str> {
    context(
        "number",
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
    )(input)
}

/// Returns `true` when the whole of `lexeme` is a number.
pub fn is_number(lexeme: &str) -> bool {
    all_consuming(parse_number)(lexeme).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_decimal() {
        let test_cases = [
            ("42;", "42", ";"),
            ("3.14159)", "3.14159", ")"),
            ("0", "0", ""),
            ("10.", "10", "."),
            ("1.2.3", "1.2", ".3"),
            ("7e3", "7", "e3"),
            ("0x1F", "0", "x1F"),
        ];

        for (input, number, rest) in test_cases.iter() {
            let (remaining, matched) = parse_number(input).unwrap();
            assert_eq!(matched, *number);
            assert_eq!(remaining, *rest);
        }
    }

    #[test]
    fn test_not_a_number() {
        assert!(parse_number(".5").is_err());
        assert!(parse_number("x1").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("12"));
        assert!(is_number("12.5"));
        assert!(!is_number("12."));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("1f"));
    }
}
