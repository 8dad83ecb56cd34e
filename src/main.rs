use anyhow::Result;
use classmap::cli::{self, Commands};
use classmap::commands::{handle_analyze, AnalyzeConfig};
use classmap::observability::install_panic_hook;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = cli::parse_args();

    match cli.command {
        Commands::Analyze {
            facts,
            repo_root,
            out,
            config,
            jobs,
            no_parallel,
            verbosity,
        } => {
            cli::init_logging(verbosity);
            handle_analyze(AnalyzeConfig {
                facts,
                repo_root,
                out,
                config,
                jobs,
                no_parallel,
                verbosity,
            })
        }
    }
}
