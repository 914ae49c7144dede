pub mod analyze;

// Re-export all handlers for easier imports
pub use analyze::*;
