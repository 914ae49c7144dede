use std::collections::BTreeMap;

use cxxlex::{Token, report::SummaryValue};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::{BackendOutput, Method};

/// Form body of both analyze endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// C++ source to analyze
    pub code: String,
}

/// Response of `/analyze`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub success: bool,
    /// Report text
    pub output: String,
    /// Stdout of the external lexer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    /// Stderr of the external lexer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_error: Option<String>,
    pub method: Method,
}

impl From<BackendOutput> for AnalyzeResponse {
    fn from(output: BackendOutput) -> Self {
        Self {
            success: true,
            output: output.report,
            raw_output: output.raw_output,
            raw_error: output.raw_error,
            method: output.method,
        }
    }
}

/// A token as returned by `/analyze_json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenItem {
    pub value: String,
    /// `KEYWORD`, `IDENTIFIER`, `NUMBER`, `OPERATOR`, `PUNCTUATION` or `UNKNOWN`
    #[serde(rename = "type")]
    pub token_type: String,
    pub line: usize,
}

impl From<Token> for TokenItem {
    fn from(token: Token) -> Self {
        Self {
            value: token.value,
            token_type: token.category.to_string(),
            line: token.line,
        }
    }
}

/// Response of `/analyze_json`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeJsonResponse {
    pub success: bool,
    pub tokens: Vec<TokenItem>,
    /// `Total Tokens` and one count per category label
    #[schema(value_type = Object)]
    pub summary: BTreeMap<String, SummaryValue>,
    pub method: Method,
}

impl From<BackendOutput> for AnalyzeJsonResponse {
    fn from(output: BackendOutput) -> Self {
        Self {
            success: true,
            tokens: output
                .parsed
                .tokens
                .into_iter()
                .map(TokenItem::from)
                .collect(),
            summary: output.parsed.summary,
            method: output.method,
        }
    }
}
