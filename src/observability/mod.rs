//! Observability infrastructure for crash reports and debugging.
//!
//! - **Panic Hook**: structured crash reports with context
//! - **Context Tracking**: thread-local phase, document and class
//! - **Progress Tracking**: atomic counters over the classes of a run
//!
//! ```ignore
//! use classmap::observability::{set_phase, set_current_file, AnalysisPhase};
//!
//! let _phase = set_phase(AnalysisPhase::ReferenceResolution);
//! for document in documents {
//!     let _file = set_current_file(&document.path);
//!     // a panic here reports the phase and the document
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_current_class,
    set_current_file, set_phase, set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
