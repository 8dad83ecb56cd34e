//! CLI command implementations.
//!
//! - **analyze**: compute class metrics and the dependency graph from a facts
//!   file and write both reports

pub mod analyze;

pub use analyze::{handle_analyze, run_analyze, AnalyzeConfig, AnalyzeOutcome};
