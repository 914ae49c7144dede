use std::fmt::Write;

use crate::{
    analysis::Analysis,
    report::{config::ReportConfig, error::ReportError},
    summary::TOTAL_LABEL,
    tokenizer::Category,
};

const SECTION_RULE_WIDTH: usize = 40;
const LINE_COLUMN_RULE: &str = "-----";
const TYPE_COLUMN_RULE: &str = "------------";

/// Renders an [`Analysis`] as the plain-text token listing.
///
/// ```text
/// Tokens:
/// ========================================
/// Line | Token               | Type
/// -----|---------------------|------------
///    1 | int                 | KEYWORD
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn format(&self, analysis: &Analysis) -> Result<String, ReportError> {
        let mut output = String::new();
        self.write_banner(&mut output)?;
        self.write_tokens(&mut output, analysis)?;
        self.write_summary(&mut output, analysis)?;
        Ok(output)
    }

    fn write_banner(&self, output: &mut String) -> Result<(), ReportError> {
        if self.config.banner.is_empty() {
            return Ok(());
        }
        for line in &self.config.banner {
            writeln!(output, "{}", line)?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn write_tokens(&self, output: &mut String, analysis: &Analysis) -> Result<(), ReportError> {
        let width = self.config.value_width;

        writeln!(output, "Tokens:")?;
        writeln!(output, "{}", "=".repeat(SECTION_RULE_WIDTH))?;
        writeln!(output, "Line | {:<width$} | Type", "Token")?;
        writeln!(
            output,
            "{}|{}|{}",
            LINE_COLUMN_RULE,
            "-".repeat(width + 2),
            TYPE_COLUMN_RULE
        )?;

        for token in &analysis.tokens {
            writeln!(
                output,
                "{:4} | {:<width$} | {}",
                token.line, token.value, token.category
            )?;
        }
        Ok(())
    }

    fn write_summary(&self, output: &mut String, analysis: &Analysis) -> Result<(), ReportError> {
        writeln!(output)?;
        writeln!(output, "Summary:")?;
        writeln!(output, "{}", "=".repeat(SECTION_RULE_WIDTH))?;
        writeln!(output, "{}: {}", TOTAL_LABEL, analysis.counts.total())?;

        for (category, count) in analysis.counts.iter() {
            if category == Category::Unknown && !self.config.include_unknown {
                continue;
            }
            writeln!(output, "{}: {}", category.label(), count)?;
        }
        Ok(())
    }
}
