pub mod analyze;

// Re-export all models for easier imports
pub use analyze::*;
