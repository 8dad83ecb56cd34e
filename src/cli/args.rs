use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "classmap")]
#[command(about = "Class dependency graph and structural metrics engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute per-class metrics and the class dependency graph from frontend facts
    Analyze {
        /// Facts file produced by the language frontend
        #[arg(long)]
        facts: PathBuf,

        /// Repository root used for relative paths and service inference
        #[arg(long = "repo-root")]
        repo_root: PathBuf,

        /// Directory receiving raw_metrics.json and dependencies.csv
        #[arg(short, long, default_value = "out")]
        out: PathBuf,

        /// Configuration file (defaults to the nearest .classmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of worker threads for per-class analysis (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "CLASSMAP_JOBS")]
        jobs: usize,

        /// Analyze classes sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        /// -v: phase summaries
        /// -vv: skipped documents and other details
        /// -vvv: everything
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
