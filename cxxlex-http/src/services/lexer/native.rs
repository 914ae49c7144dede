use std::{collections::BTreeMap, path::PathBuf};

use async_trait::async_trait;
use cxxlex::{
    Analyzer, Category, TokenCount,
    report::{ParsedReport, ReportConfig, ReportFormatter, SummaryValue},
    summary::TOTAL_LABEL,
};
use tracing::{info, warn};

use super::{BackendError, BackendOutput, LexerBackend, Method};

/// Runs the in-process lexer.
#[derive(Debug, Default)]
pub struct NativeBackend {
    analyzer: Analyzer,
    formatter: ReportFormatter,
    report_path: Option<PathBuf>,
}

impl NativeBackend {
    /// `report_path`, when set, receives a copy of every report.
    pub fn new(report: ReportConfig, report_path: Option<PathBuf>) -> Self {
        Self {
            analyzer: Analyzer::new(),
            formatter: ReportFormatter::new(report),
            report_path,
        }
    }

    fn summary(&self, counts: &TokenCount) -> BTreeMap<String, SummaryValue> {
        let include_unknown = self.formatter.config().include_unknown;
        let mut summary = BTreeMap::new();
        summary.insert(TOTAL_LABEL.to_string(), SummaryValue::Count(counts.total()));
        for (category, count) in counts.iter() {
            if category == Category::Unknown && !include_unknown {
                continue;
            }
            summary.insert(category.label().to_string(), SummaryValue::Count(count));
        }
        summary
    }

    async fn save(&self, report: &str) {
        let Some(path) = &self.report_path else {
            return;
        };
        match tokio::fs::write(path, report).await {
            Ok(()) => info!("Results saved to {}", path.display()),
            Err(err) => warn!("Failed to save report to {}: {}", path.display(), err),
        }
    }
}

#[async_trait]
impl LexerBackend for NativeBackend {
    fn method(&self) -> Method {
        Method::Native
    }

    #[tracing::instrument(level = "debug", skip(self, code), fields(len = code.len()))]
    async fn run(&self, code: &str) -> Result<BackendOutput, BackendError> {
        let analysis = self.analyzer.analyze(code);
        let report = self.formatter.format(&analysis)?;
        self.save(&report).await;

        let summary = self.summary(&analysis.counts);
        Ok(BackendOutput {
            report,
            parsed: ParsedReport {
                tokens: analysis.tokens,
                summary,
            },
            raw_output: None,
            raw_error: None,
            method: Method::Native,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_native_run() {
        let backend = NativeBackend::new(ReportConfig::default(), None);
        let output = backend.run("int x = 42;").await.unwrap();

        assert_eq!(output.method, Method::Native);
        assert_eq!(output.parsed.tokens.len(), 5);
        assert_eq!(
            output.parsed.summary.get("Total Tokens"),
            Some(&SummaryValue::Count(5))
        );
        assert_eq!(output.parsed.summary.len(), 7);
        assert!(output.report.contains("Total Tokens: 5"));
        assert!(output.raw_output.is_none());
    }

    #[tokio::test]
    async fn test_native_summary_without_unknowns() {
        let config = ReportConfig {
            include_unknown: false,
            ..Default::default()
        };
        let backend = NativeBackend::new(config, None);
        let output = backend.run("@").await.unwrap();

        assert!(!output.parsed.summary.contains_key("Unknowns"));
        assert_eq!(
            output.parsed.summary.get("Total Tokens"),
            Some(&SummaryValue::Count(1))
        );
    }

    #[tokio::test]
    async fn test_native_saves_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.txt");
        let backend = NativeBackend::new(ReportConfig::default(), Some(path.clone()));

        let output = backend.run("return 0;").await.unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, output.report);
    }

    #[tokio::test]
    async fn test_native_save_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tokens.txt");
        let backend = NativeBackend::new(ReportConfig::default(), Some(path));

        assert!(backend.run("x;").await.is_ok());
    }
}
