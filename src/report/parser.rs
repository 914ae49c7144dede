use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tokenizer::{Category, Token};

/// A summary entry read back from a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Count(usize),
    Text(String),
}

/// The token table and summary recovered from a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    pub tokens: Vec<Token>,
    pub summary: BTreeMap<String, SummaryValue>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Preamble,
    Tokens,
    Summary,
}

/// Reads a report back into tokens and summary entries.
///
/// Accepts both the padded layout [`ReportFormatter`](super::ReportFormatter)
/// writes and the unpadded `line | value | TYPE` rows an external lexer
/// produces. A table row is split at its first and last `|`, so `|` and `||`
/// values survive. Rows with a non-numeric line or an unknown type and summary
/// lines without a `:` are skipped.
pub fn parse_report(text: &str) -> ParsedReport {
    let mut report = ParsedReport::default();
    let mut section = Section::Preamble;

    for line in text.lines() {
        if line.starts_with("Line | Token") {
            section = Section::Tokens;
            continue;
        }
        if line.starts_with("Summary:") {
            section = Section::Summary;
            continue;
        }
        if line.starts_with("-----") || line.trim().is_empty() {
            continue;
        }

        match section {
            Section::Preamble => {}
            Section::Tokens => {
                if let Some(token) = parse_token_row(line) {
                    report.tokens.push(token);
                }
            }
            Section::Summary => {
                if let Some((key, value)) = parse_summary_line(line) {
                    report.summary.insert(key, value);
                }
            }
        }
    }

    tracing::debug!(
        tokens = report.tokens.len(),
        summary = report.summary.len(),
        "parsed report"
    );
    report
}

fn parse_token_row(row: &str) -> Option<Token> {
    let (line, rest) = row.split_once('|')?;
    let (value, category) = rest.rsplit_once('|')?;

    let line = line.trim().parse::<usize>().ok()?;
    let category = category.trim().parse::<Category>().ok()?;
    Some(Token::new(value.trim(), category, line))
}

fn parse_summary_line(line: &str) -> Option<(String, SummaryValue)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.contains(':') {
        return None;
    }

    let value = match value.parse::<usize>() {
        Ok(count) => SummaryValue::Count(count),
        Err(_) => SummaryValue::Text(value.to_string()),
    };
    Some((key.to_string(), value))
}
