//! Thread-local context tracking for crash reports.
//!
//! Records the current analysis phase, document and class. Context is
//! per-thread (works with rayon workers); progress counters are global atomics.
//! Guards restore the previous context on drop.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static CLASSES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static CLASSES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Context snapshot for the current analysis operation.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    pub current_file: Option<PathBuf>,
    pub current_class: Option<String>,
}

impl AnalysisContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
            current_class: None,
        }
    }
}

/// Major stages of a classmap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Reading frontend facts
    FactsLoading,
    /// Pass 1: assigning class identifiers
    Registration,
    /// Unit-level SCC analysis
    CycleDetection,
    /// Pass 2: references, edges and metrics per class
    ReferenceResolution,
    /// Merging classes and edges into reports
    ReportAssembly,
    /// Writing report files
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FactsLoading => write!(f, "facts_loading"),
            Self::Registration => write!(f, "registration"),
            Self::CycleDetection => write!(f, "cycle_detection"),
            Self::ReferenceResolution => write!(f, "reference_resolution"),
            Self::ReportAssembly => write!(f, "report_assembly"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring analysis context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current analysis phase.
///
/// Returns a guard that restores the previous phase on drop.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

/// Set the current document being analyzed.
#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update_context(|ctx| ctx.current_file = Some(path))
}

/// Set the current class being analyzed.
#[must_use]
pub fn set_current_class(name: impl Into<String>) -> ContextGuard {
    let name = name.into();
    update_context(|ctx| ctx.current_class = Some(name))
}

/// Set the progress counters (processed and total classes).
pub fn set_progress(processed: usize, total: usize) {
    CLASSES_PROCESSED.store(processed, Ordering::Relaxed);
    CLASSES_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the processed class count. Safe from rayon workers.
pub fn increment_processed() {
    CLASSES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Get the current progress (processed, total).
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        CLASSES_PROCESSED.load(Ordering::Relaxed),
        CLASSES_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}
