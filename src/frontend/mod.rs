//! Boundary with the source frontend.
//!
//! Parsing and symbol resolution happen outside this crate. A frontend hands
//! the engine one [`UnitFacts`] per grouping unit (project/module), each with
//! its documents and the classes declared in them. Every reference a class
//! makes arrives already resolved to its declaring type, or as
//! [`Resolution::Unresolved`].
//!
//! [`FactsFile`] is the serialized form of that hand-off and the frontend the
//! command-line driver uses.

pub mod facts_file;

pub use facts_file::FactsFile;

use crate::core::{MethodReference, Resolution, TypeReference};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supplies the class-level facts of one codebase.
///
/// Units, documents and classes are consumed in the order returned here; the
/// engine's output ordering follows it.
pub trait SourceFrontend {
    /// Identifier of the analyzed codebase (solution or workspace name)
    fn solution_name(&self) -> &str;

    fn units(&self) -> &[UnitFacts];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFacts {
    pub name: String,
    /// Units this unit declares a build/reference dependency on
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub documents: Vec<DocumentFacts>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFacts {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub classes: Vec<ClassFacts>,
}

impl DocumentFacts {
    /// The document's path, if it has a non-empty one.
    pub fn file_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFacts {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    pub span: LineSpan,
    #[serde(default)]
    pub methods: Vec<MethodFacts>,
    #[serde(default)]
    pub fields: Vec<MemberFacts>,
    #[serde(default)]
    pub properties: Vec<MemberFacts>,
}

impl ClassFacts {
    /// Namespace as reported, or empty when the class has none.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().map(str::trim).unwrap_or("")
    }

    /// Namespace-qualified name; the bare class name when there is no
    /// namespace.
    pub fn qualified_name(&self) -> String {
        match self.namespace() {
            "" => self.name.clone(),
            namespace => format!("{namespace}.{}", self.name),
        }
    }
}

/// First and last line of a declaration, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpan {
    pub start_line: u32,
    pub end_line: u32,
}

impl LineSpan {
    pub fn new(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Inclusive line count, never below 1.
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line).saturating_add(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodFacts {
    pub name: String,
    /// Top-level statements of the body, with their nested syntax
    #[serde(default)]
    pub body: Vec<SyntaxNode>,
    /// Call sites in source order
    #[serde(default)]
    pub calls: Vec<Resolution<MethodReference>>,
}

/// A field or property declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFacts {
    pub name: String,
    pub declared_type: Resolution<TypeReference>,
}

/// A method body node, reduced to what complexity counting needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        Self { kind, children }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    If,
    While,
    For,
    ForEach,
    CaseLabel,
    Catch,
    /// Ternary `cond ? a : b`
    Conditional,
    LogicalAnd,
    LogicalOr,
    /// Any node kind that is not a decision point
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, namespace: Option<&str>) -> ClassFacts {
        ClassFacts {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            span: LineSpan::new(1, 1),
            methods: vec![],
            fields: vec![],
            properties: vec![],
        }
    }

    #[test]
    fn test_qualified_name_with_namespace() {
        assert_eq!(
            class("Order", Some("Ordering.Domain")).qualified_name(),
            "Ordering.Domain.Order"
        );
    }

    #[test]
    fn test_missing_or_blank_namespace_uses_class_name() {
        assert_eq!(class("Program", None).qualified_name(), "Program");
        assert_eq!(class("Program", Some("  ")).qualified_name(), "Program");
    }

    #[test]
    fn test_line_count_is_inclusive_and_at_least_one() {
        assert_eq!(LineSpan::new(10, 19).line_count(), 10);
        assert_eq!(LineSpan::new(7, 7).line_count(), 1);
        assert_eq!(LineSpan::new(9, 3).line_count(), 1);
    }

    #[test]
    fn test_unknown_node_kinds_deserialize_as_other() {
        let node: SyntaxNode = serde_json::from_str(r#"{"kind":"Do"}"#).unwrap();
        assert_eq!(node.kind, NodeKind::Other);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_blank_document_path_is_missing() {
        let doc = DocumentFacts {
            path: Some(PathBuf::new()),
            classes: vec![],
        };
        assert!(doc.file_path().is_none());
    }
}
