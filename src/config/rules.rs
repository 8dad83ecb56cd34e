use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which code counts as inward-facing and which units as outward-facing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Path segments marking domain/application code
    #[serde(default = "default_inward_segments")]
    pub inward_segments: Vec<String>,

    /// Substrings of unit names marking infrastructure-like units
    #[serde(default = "default_outward_keywords")]
    pub outward_keywords: Vec<String>,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            inward_segments: default_inward_segments(),
            outward_keywords: default_outward_keywords(),
        }
    }
}

fn default_inward_segments() -> Vec<String> {
    to_strings(&["domain", "application"])
}

fn default_outward_keywords() -> Vec<String> {
    to_strings(&["infrastructure", "persistence"])
}

/// Types excluded from coupling counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorableConfig {
    /// Reserved standard-library namespace roots
    #[serde(default = "default_namespace_prefixes")]
    pub namespace_prefixes: Vec<String>,

    /// Primitive scalar type names
    #[serde(default = "default_primitives")]
    pub primitives: Vec<String>,
}

impl Default for IgnorableConfig {
    fn default() -> Self {
        Self {
            namespace_prefixes: default_namespace_prefixes(),
            primitives: default_primitives(),
        }
    }
}

fn default_namespace_prefixes() -> Vec<String> {
    to_strings(&["System", "Microsoft"])
}

fn default_primitives() -> Vec<String> {
    to_strings(&[
        "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "nint",
        "nuint", "long", "ulong", "short", "ushort", "object", "string", "void", "dynamic",
    ])
}

/// Rule table mapping the first path segment to a service label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_shared_segments")]
    pub shared_segments: Vec<String>,

    #[serde(default = "default_shared_label")]
    pub shared_label: String,

    /// Segment name (matched case-insensitively) to deployable label
    #[serde(default = "default_deployables")]
    pub deployables: BTreeMap<String, String>,

    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            shared_segments: default_shared_segments(),
            shared_label: default_shared_label(),
            deployables: default_deployables(),
            unknown_label: default_unknown_label(),
        }
    }
}

fn default_shared_segments() -> Vec<String> {
    to_strings(&["shared", "common", "buildingblocks"])
}

fn default_shared_label() -> String {
    "Shared".to_string()
}

fn default_deployables() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("webapps".to_string(), "WebApps".to_string()),
        ("apigateways".to_string(), "ApiGateways".to_string()),
    ])
}

fn default_unknown_label() -> String {
    "Unknown".to_string()
}

/// Which documents are source documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// File extensions without the leading dot
    #[serde(default = "default_source_extensions")]
    pub extensions: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            extensions: default_source_extensions(),
        }
    }
}

fn default_source_extensions() -> Vec<String> {
    to_strings(&["cs"])
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
