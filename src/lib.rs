// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod builders;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod frontend;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResults, ClassId, ClassMetrics, ClassRecord, ClassesReport, DependencyEdge,
    EdgesReport, MethodReference, Resolution, TypeReference,
};

pub use crate::frontend::{
    ClassFacts, DocumentFacts, FactsFile, LineSpan, MemberFacts, MethodFacts, NodeKind,
    SourceFrontend, SyntaxNode, UnitFacts,
};

pub use crate::analyzers::{ClassReferences, ClassRegistry, ReferenceResolver};

pub use crate::builders::{analyze_solution, AnalysisOptions};

pub use crate::graph::{dedupe_edges, ClassDependencyGraph, DependencyGraphBuilder, UnitGraph};

pub use crate::config::ClassmapConfig;

pub use crate::io::output::{assemble_reports, CsvEdgeWriter, JsonWriter, OutputWriter};
pub use crate::io::write_artifacts;
