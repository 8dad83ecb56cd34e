use crate::analysis::absolute_root;
use crate::builders::{analyze_solution, AnalysisOptions};
use crate::cli;
use crate::core::errors::Error;
use crate::config::{self, ClassmapConfig};
use crate::frontend::FactsFile;
use crate::io::{self, ArtifactPaths};
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub facts: PathBuf,
    pub repo_root: PathBuf,
    pub out: PathBuf,
    pub config: Option<PathBuf>,
    pub jobs: usize,
    pub no_parallel: bool,
    pub verbosity: u8,
}

/// Summary of one finished run, printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub artifacts: ArtifactPaths,
    pub class_count: usize,
    pub edge_count: usize,
}

impl AnalyzeOutcome {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Wrote {} ({} classes)",
                self.artifacts.classes.display(),
                self.class_count
            ),
            format!(
                "Wrote {} ({} edges)",
                self.artifacts.edges.display(),
                self.edge_count
            ),
        ]
    }
}

fn resolve_config(explicit: Option<&Path>) -> Result<ClassmapConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Load facts, analyze, and write both reports.
pub fn run_analyze(config: &AnalyzeConfig) -> Result<AnalyzeOutcome> {
    let classmap_config = resolve_config(config.config.as_deref())?;
    let repo_root = absolute_root(&config.repo_root).map_err(|e| {
        Error::file_system("Failed to resolve repository root", &config.repo_root, e)
    })?;

    let facts = {
        let _phase = set_phase(AnalysisPhase::FactsLoading);
        FactsFile::load(&config.facts)
            .with_context(|| format!("Failed to load facts from {}", config.facts.display()))?
    };

    let parallel = !config.no_parallel;
    if parallel {
        cli::configure_thread_pool(config.jobs);
        let workers = cli::get_worker_count(config.jobs);
        tracing::info!(workers, "Parallel class analysis enabled");
        if config.verbosity > 0 {
            eprintln!("Analyzing classes on {workers} threads");
        }
    }

    let options = AnalysisOptions::new(repo_root).with_parallel(parallel);
    let results = analyze_solution(&facts, &classmap_config, &options);

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let artifacts = io::write_artifacts(&config.out, &results)?;

    Ok(AnalyzeOutcome {
        artifacts,
        class_count: results.classes.len(),
        edge_count: results.edges.len(),
    })
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let outcome = run_analyze(&config)?;
    for line in outcome.summary_lines() {
        println!("{line}");
    }
    Ok(())
}
