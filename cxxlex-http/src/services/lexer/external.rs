use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::{Output, Stdio},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use cxxlex::report::parse_report;
use serde::{Deserialize, Serialize};
use tokio::{io::AsyncWriteExt, process::Command, sync::Mutex};
use tracing::{debug, info};

use super::{BackendError, BackendOutput, LexerBackend, Method};

/// Report text used when the executable leaves no report file behind.
pub const NO_REPORT: &str = "No tokens file generated";

/// How to build and drive an external lexer executable.
///
/// Relative paths are resolved against `work_dir`, which is also the working
/// directory of every command. In compile commands `{source}` and `{binary}`
/// are replaced with the configured paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLexerConfig {
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    /// Arguments passed to `binary` on every run.
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Compile commands, tried in order until one produces `binary`.
    #[serde(default = "default_compile")]
    pub compile: Vec<Vec<String>>,
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Bound on every compile command and every run.
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        with = "cxxlex::config::duration_secs"
    )]
    pub timeout: Duration,
}

fn default_binary() -> PathBuf {
    PathBuf::from("lexer.exe")
}

fn default_source() -> PathBuf {
    PathBuf::from("lexer.cpp")
}

fn default_compile() -> Vec<Vec<String>> {
    [
        vec!["g++", "{source}", "-o", "{binary}"],
        vec!["cl", "/EHsc", "{source}"],
    ]
    .into_iter()
    .map(|command| command.into_iter().map(String::from).collect())
    .collect()
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_input_file() -> String {
    "input.cpp".to_string()
}

fn default_report_file() -> String {
    "tokens.txt".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for ExternalLexerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            args: Vec::new(),
            source: default_source(),
            compile: default_compile(),
            work_dir: default_work_dir(),
            input_file: default_input_file(),
            report_file: default_report_file(),
            timeout: default_timeout(),
        }
    }
}

/// Runs a lexer executable through its interactive prompt.
///
/// The executable is asked for option `1` (analyze a file) and given the input
/// file name on stdin; it is expected to write its report to `report_file`.
/// Input and report files are shared, so runs are serialized; clones share
/// the same lock.
#[derive(Debug, Clone)]
pub struct ExternalBackend {
    config: ExternalLexerConfig,
    run_lock: Arc<Mutex<()>>,
}

impl ExternalBackend {
    pub fn new(config: ExternalLexerConfig) -> Self {
        Self {
            config,
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn config(&self) -> &ExternalLexerConfig {
        &self.config
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.config.work_dir.join(path)
    }

    fn compile_command(&self, template: &[String]) -> Vec<String> {
        let source = self.config.source.display().to_string();
        let binary = self.config.binary.display().to_string();
        template
            .iter()
            .map(|part| part.replace("{source}", &source).replace("{binary}", &binary))
            .collect()
    }

    async fn run_bounded(&self, command: &mut Command) -> Result<Output, BackendError> {
        command.kill_on_drop(true);
        match tokio::time::timeout(self.config.timeout, command.output()).await {
            Ok(output) => Ok(output?),
            Err(_) => Err(BackendError::Timeout(self.config.timeout)),
        }
    }

    /// Makes sure the executable exists, compiling it when it does not.
    async fn ensure_binary(&self) -> Result<PathBuf, BackendError> {
        let binary = self.resolve(&self.config.binary);
        if binary.exists() {
            return Ok(binary);
        }

        for template in &self.config.compile {
            let parts = self.compile_command(template);
            let Some((program, args)) = parts.split_first() else {
                continue;
            };

            let mut command = Command::new(program);
            command.args(args).current_dir(&self.config.work_dir);
            match self.run_bounded(&mut command).await {
                Ok(output) if output.status.success() && binary.exists() => {
                    info!("Compiled lexer with {}", program);
                    return Ok(binary);
                }
                Ok(output) => debug!("Compile with {} failed: {}", program, output.status),
                Err(err) => debug!("Compile with {} failed: {}", program, err),
            }
        }

        Err(BackendError::Unavailable(binary.display().to_string()))
    }

    async fn read_report(&self) -> Result<String, BackendError> {
        match tokio::fs::read_to_string(self.resolve(&self.config.report_file)).await {
            Ok(report) => Ok(report),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(NO_REPORT.to_string()),
            Err(err) => Err(err.into()),
        }
    }

    async fn remove_stale_report(&self) -> Result<(), BackendError> {
        match tokio::fs::remove_file(self.resolve(&self.config.report_file)).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl LexerBackend for ExternalBackend {
    fn method(&self) -> Method {
        Method::External
    }

    #[tracing::instrument(level = "debug", skip(self, code), fields(len = code.len()))]
    async fn run(&self, code: &str) -> Result<BackendOutput, BackendError> {
        // held until the report is read
        let _guard = self.run_lock.lock().await;
        let binary = self.ensure_binary().await?;

        tokio::fs::write(self.resolve(&self.config.input_file), code).await?;
        self.remove_stale_report().await?;

        let mut child = Command::new(&binary)
            .args(&self.config.args)
            .current_dir(&self.config.work_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            let answers = format!("1\n{}\n", self.config.input_file);
            stdin.write_all(answers.as_bytes()).await?;
        }

        let output = tokio::time::timeout(self.config.timeout, child.wait_with_output())
            .await
            .map_err(|_| BackendError::Timeout(self.config.timeout))??;
        debug!("Lexer exited with {}", output.status);

        let report = self.read_report().await?;
        let parsed = parse_report(&report);
        Ok(BackendOutput {
            report,
            parsed,
            raw_output: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
            raw_error: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
            method: Method::External,
        })
    }
}
