pub mod output;

pub use output::{
    assemble_reports, escape_csv_field, CsvEdgeWriter, JsonWriter, OutputWriter,
    CLASSES_REPORT_FILE, EDGES_REPORT_FILE,
};

use crate::core::errors::Error;
use crate::core::AnalysisResults;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Paths of the reports written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classes: PathBuf,
    pub edges: PathBuf,
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| {
            Error::file_system("Failed to create output directory", path, e)
        })?;
    }
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| Error::file_system("Failed to create report file", path, e))?;
    Ok(BufWriter::new(file))
}

/// Write both reports into `out_dir`, creating it when missing.
pub fn write_artifacts(out_dir: &Path, results: &AnalysisResults) -> Result<ArtifactPaths> {
    ensure_dir(out_dir)?;

    let paths = ArtifactPaths {
        classes: out_dir.join(CLASSES_REPORT_FILE),
        edges: out_dir.join(EDGES_REPORT_FILE),
    };

    JsonWriter::new(create_file(&paths.classes)?)
        .write_results(results)
        .with_context(|| format!("Failed to write {}", paths.classes.display()))?;
    CsvEdgeWriter::new(create_file(&paths.edges)?)
        .write_results(results)
        .with_context(|| format!("Failed to write {}", paths.edges.display()))?;

    Ok(paths)
}
