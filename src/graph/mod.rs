pub mod circular;
pub mod dependency;

pub use circular::UnitGraph;
pub use dependency::{dedupe_edges, ClassDependencyGraph, DependencyGraphBuilder};
