use serde::{Deserialize, Serialize};

/// Layout options for the text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Lines written above the token table.
    #[serde(default = "default_banner")]
    pub banner: Vec<String>,
    /// Width the token value column is padded to.
    #[serde(default = "default_value_width")]
    pub value_width: usize,
    /// Whether the summary lists the `Unknowns` count.
    #[serde(default = "default_include_unknown")]
    pub include_unknown: bool,
}

fn default_banner() -> Vec<String> {
    vec![
        "Developed for Compiler Design Course".to_string(),
        "=".repeat(37),
    ]
}

fn default_value_width() -> usize {
    19
}

fn default_include_unknown() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            value_width: default_value_width(),
            include_unknown: default_include_unknown(),
        }
    }
}
