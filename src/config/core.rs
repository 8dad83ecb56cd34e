use serde::{Deserialize, Serialize};

use super::rules::{IgnorableConfig, LayerConfig, ServiceConfig, SourcesConfig};

/// Root configuration structure for classmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassmapConfig {
    /// Layer-violation rules
    #[serde(default)]
    pub layers: LayerConfig,

    /// Types that never count toward coupling
    #[serde(default)]
    pub ignorable: IgnorableConfig,

    /// Service label inference
    #[serde(default)]
    pub services: ServiceConfig,

    /// Source document filter
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl ClassmapConfig {
    /// Reject settings that would silently disable a rule.
    pub fn validate(&self) -> Result<(), String> {
        if self.sources.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("sources.extensions must name at least one extension".to_string());
        }
        if self.services.unknown_label.trim().is_empty() {
            return Err("services.unknown_label must not be empty".to_string());
        }
        Ok(())
    }

    /// Lowercase keyword lists and strip leading dots from extensions so the
    /// predicates can compare without re-normalizing.
    pub fn normalize(&mut self) {
        lowercase_all(&mut self.layers.inward_segments);
        lowercase_all(&mut self.layers.outward_keywords);
        lowercase_all(&mut self.services.shared_segments);
        self.services.deployables = std::mem::take(&mut self.services.deployables)
            .into_iter()
            .map(|(segment, label)| (segment.trim().to_lowercase(), label))
            .collect();
        self.sources.extensions = self
            .sources
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
    }
}

fn lowercase_all(values: &mut Vec<String>) {
    *values = values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();
}
