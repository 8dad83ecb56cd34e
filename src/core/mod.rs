pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a declared class, `"<unit>:<qualified name>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(unit: &str, qualified_name: &str) -> Self {
        Self(format!("{unit}:{qualified_name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ClassId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// What the frontend could tell us about a usage site.
///
/// `Unresolved` is a normal outcome over a partially buildable codebase; the
/// engine skips it without reporting anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Resolved pointer to a declaring type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    /// Fully-qualified type name, e.g. `Ordering.Domain.Order`
    pub qualified_name: String,
    /// Grouping unit (project/assembly) that declares the type
    pub unit: String,
}

impl TypeReference {
    pub fn new(qualified_name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            unit: unit.into(),
        }
    }
}

/// Resolved target of a call site.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodReference {
    pub declaring_type: TypeReference,
    pub name: String,
}

impl MethodReference {
    pub fn new(declaring_type: TypeReference, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
        }
    }

    /// `"<containing type>.<method name>"`, the unit counted by RFC.
    pub fn signature(&self) -> String {
        format!("{}.{}", self.declaring_type.qualified_name, self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyEdge {
    #[serde(rename = "sourceClassId")]
    pub source: ClassId,
    #[serde(rename = "targetClassId")]
    pub target: ClassId,
}

impl DependencyEdge {
    pub fn new(source: ClassId, target: ClassId) -> Self {
        Self { source, target }
    }
}

/// The nine structural metrics computed for every class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetrics {
    #[serde(rename = "LOC")]
    pub loc: u32,
    #[serde(rename = "NOM")]
    pub nom: u32,
    #[serde(rename = "NOF")]
    pub nof: u32,
    #[serde(rename = "WMC")]
    pub wmc: u32,
    #[serde(rename = "RFC")]
    pub rfc: u32,
    #[serde(rename = "CBO")]
    pub cbo: u32,
    #[serde(rename = "Cyclomatic")]
    pub cyclomatic: u32,
    #[serde(rename = "LayerViolations")]
    pub layer_violations: u32,
    #[serde(rename = "CycleInvolvement")]
    pub cycle_involvement: u32,
}

/// One class entry of the classes report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub id: ClassId,
    pub name: String,
    pub namespace: String,
    pub project: String,
    pub service: String,
    pub file_path: String,
    pub metrics: ClassMetrics,
}

/// Everything one run of the engine produces, before it is split into the
/// two output artifacts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub solution: String,
    pub timestamp: DateTime<Utc>,
    pub classes: Vec<ClassRecord>,
    pub edges: Vec<DependencyEdge>,
    pub cyclic_units: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesReport {
    pub generated_at: DateTime<Utc>,
    pub solution: String,
    pub classes: Vec<ClassRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgesReport {
    pub edges: Vec<DependencyEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_id_joins_unit_and_name() {
        let id = ClassId::new("Ordering.Domain", "Ordering.Domain.Order");
        assert_eq!(id.as_str(), "Ordering.Domain:Ordering.Domain.Order");
        assert_eq!(id.to_string(), "Ordering.Domain:Ordering.Domain.Order");
    }

    #[test]
    fn test_method_signature() {
        let method = MethodReference::new(TypeReference::new("App.OrderService", "App"), "Place");
        assert_eq!(method.signature(), "App.OrderService.Place");
    }

    #[test]
    fn test_resolution_serializes_unresolved_as_string() {
        let unresolved: Resolution<TypeReference> = Resolution::Unresolved;
        assert_eq!(serde_json::to_string(&unresolved).unwrap(), "\"unresolved\"");

        let resolved: Resolution<TypeReference> =
            serde_json::from_str(r#"{"resolved":{"qualifiedName":"A.B","unit":"A"}}"#).unwrap();
        assert_eq!(resolved.resolved(), Some(&TypeReference::new("A.B", "A")));
    }

    #[test]
    fn test_metrics_use_report_keys() {
        let metrics = ClassMetrics {
            loc: 10,
            ..Default::default()
        };
        let value = serde_json::to_value(metrics).unwrap();
        assert_eq!(value["LOC"], 10);
        assert_eq!(value["CycleInvolvement"], 0);
        assert!(value.get("loc").is_none());
    }
}
