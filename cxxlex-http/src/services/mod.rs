pub mod analysis;
pub mod lexer;

// Re-exports for easier access
pub use analysis::AnalysisService;
pub use lexer::{BackendError, BackendOutput, LexerBackend, Method};
