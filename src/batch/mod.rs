//! # Batch Processing
//!
//! Finds selection scripts, converts each one with a shared frame rate and
//! writes the reports, applying the configured failure policy.

pub mod engine;

// Re-exports for convenience
pub use engine::{discover_scripts, BatchProcessor, BatchSummary};
