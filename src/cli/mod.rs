//! CLI module for classmap
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands};
pub use setup::{configure_thread_pool, default_log_level, get_worker_count, init_logging};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
