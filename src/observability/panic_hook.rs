//! Panic hook that prints a crash report with the analysis context: which
//! phase was running, which document and class were being processed, and how
//! many classes were done.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "================================================================================";

/// Install the crash-report panic hook. Call once, early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    eprintln!();
    eprintln!("{RULE}");
    eprintln!("CLASSMAP CRASH REPORT");
    eprintln!("  Version:  {VERSION}");
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!(
        "  Time:     {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    eprintln!("{RULE}");
    eprintln!("  PANIC: {}", truncate(&extract_panic_message(info), 200));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    for line in context_lines(&context, processed, total) {
        eprintln!("{line}");
    }
    eprintln!("{RULE}");
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

fn context_lines(context: &AnalysisContext, processed: usize, total: usize) -> Vec<String> {
    let mut lines = vec!["  OPERATION CONTEXT:".to_string()];

    lines.push(match &context.phase {
        Some(phase) => format!("    Phase: {phase}"),
        None => "    Phase: (not set - crash occurred before analysis started)".to_string(),
    });

    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("    Span: {}", metadata.name()));
    }
    if let Some(file) = &context.current_file {
        lines.push(format!("    File: {}", file.display()));
    }
    if let Some(class) = &context.current_class {
        lines.push(format!("    Class: {class}"));
    }
    if total > 0 {
        let pct = processed * 100 / total;
        lines.push(format!("    Progress: {processed} / {total} classes ({pct}%)"));
    }

    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
