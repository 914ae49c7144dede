use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}
