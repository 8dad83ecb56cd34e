use super::{SourceFrontend, UnitFacts};
use crate::core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Frontend output serialized as a single JSON document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactsFile {
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub units: Vec<UnitFacts>,
}

impl FactsFile {
    pub fn new(solution: impl Into<String>, units: Vec<UnitFacts>) -> Self {
        Self {
            solution: solution.into(),
            units,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read facts file", path, e))?;
        Self::parse(&contents).map_err(|e| Error::frontend(path, e.to_string()))
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

impl SourceFrontend for FactsFile {
    fn solution_name(&self) -> &str {
        &self.solution
    }

    fn units(&self) -> &[UnitFacts] {
        &self.units
    }
}
