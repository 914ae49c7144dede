//! Lexer backends.
//!
//! A backend turns source code into a report text plus the tokens and summary
//! behind it. [`NativeBackend`] runs the in-process lexer; [`ExternalBackend`]
//! drives a separately built lexer executable through its interactive prompt
//! and reads the report file it leaves behind.

pub mod external;
pub mod native;

use std::time::Duration;

use async_trait::async_trait;
use cxxlex::report::ParsedReport;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub use external::{ExternalBackend, ExternalLexerConfig};
pub use native::NativeBackend;

/// Which backend produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    External,
    Native,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::External => "external",
            Method::Native => "native",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a backend run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendOutput {
    /// The report text as the user sees it.
    pub report: String,
    /// Tokens and summary behind the report.
    pub parsed: ParsedReport,
    /// Captured stdout of an external process.
    pub raw_output: Option<String>,
    /// Captured stderr of an external process.
    pub raw_error: Option<String>,
    pub method: Method,
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Lexer executable unavailable: {0}")]
    Unavailable(String),
    #[error("Lexer timed out after {0:?}")]
    Timeout(Duration),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Report error: {0}")]
    Report(#[from] cxxlex::report::ReportError),
}

#[async_trait]
pub trait LexerBackend: Send + Sync {
    fn method(&self) -> Method;

    async fn run(&self, code: &str) -> Result<BackendOutput, BackendError>;
}
