use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] cxxlex::Error),

    #[error("Report error: {0}")]
    Report(#[from] cxxlex::report::ReportError),

    #[error("Failed to read {path}: {source}")]
    Input { path: String, source: io::Error },
}

pub type CliResult<T> = Result<T, CliError>;
