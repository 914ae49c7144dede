//! Plain-text token report: writing it and reading it back.
//!
//! The layout is the one the command line and HTTP front ends present to users
//! and the one an external lexer writes to its report file, so
//! [`parse_report`] accepts what [`ReportFormatter`] produces.

pub mod config;
pub mod error;
pub mod formatter;
pub mod parser;

pub use config::ReportConfig;
pub use error::ReportError;
pub use formatter::ReportFormatter;
pub use parser::{parse_report, ParsedReport, SummaryValue};
