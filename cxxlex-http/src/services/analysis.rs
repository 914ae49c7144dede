use std::{path::PathBuf, sync::Arc};

use cxxlex::report::ReportConfig;
use tracing::{info, warn};

use super::lexer::{
    BackendError, BackendOutput, ExternalBackend, ExternalLexerConfig, LexerBackend, NativeBackend,
};

/// Picks a backend for every request.
///
/// The external backend is tried first when one is configured; any failure it
/// reports sends the request to the native backend instead.
pub struct AnalysisService {
    native: NativeBackend,
    external: Option<Arc<dyn LexerBackend>>,
}

impl AnalysisService {
    pub fn new(native: NativeBackend, external: Option<Arc<dyn LexerBackend>>) -> Self {
        Self { native, external }
    }

    pub fn from_config(
        report: ReportConfig,
        report_path: Option<PathBuf>,
        external: Option<ExternalLexerConfig>,
    ) -> Self {
        let native = NativeBackend::new(report, report_path);
        let external = external
            .map(|config| Arc::new(ExternalBackend::new(config)) as Arc<dyn LexerBackend>);
        Self::new(native, external)
    }

    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    pub async fn analyze(&self, code: &str) -> Result<BackendOutput, BackendError> {
        if let Some(external) = &self.external {
            match external.run(code).await {
                Ok(output) => {
                    info!(method = %output.method, "Analyzed with external lexer");
                    return Ok(output);
                }
                Err(err) => warn!("External lexer failed, falling back to native: {}", err),
            }
        }

        let output = self.native.run(code).await?;
        info!(method = %output.method, tokens = output.parsed.tokens.len(), "Analyzed");
        Ok(output)
    }
}

impl std::fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisService")
            .field("native", &self.native)
            .field("external", &self.external.as_ref().map(|b| b.method()))
            .finish()
    }
}
