use crate::core::{ClassId, DependencyEdge};
use std::collections::{HashMap, HashSet};

/// Remove repeated (source, target) pairs, keeping each pair at the position
/// of its first occurrence. Running it on its own output changes nothing.
pub fn dedupe_edges(edges: &[DependencyEdge]) -> Vec<DependencyEdge> {
    let mut seen: HashSet<&DependencyEdge> = HashSet::with_capacity(edges.len());
    edges
        .iter()
        .filter(|edge| seen.insert(*edge))
        .cloned()
        .collect()
}

/// Accumulates class edges in scan order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraphBuilder {
    edges: Vec<DependencyEdge>,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = DependencyEdge>) {
        self.edges.extend(edges);
    }

    /// Number of edges recorded so far, duplicates included
    pub fn raw_edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn build(self) -> ClassDependencyGraph {
        ClassDependencyGraph {
            edges: dedupe_edges(&self.edges),
        }
    }
}

/// Deduplicated class-level dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDependencyGraph {
    edges: Vec<DependencyEdge>,
}

impl ClassDependencyGraph {
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<DependencyEdge> {
        self.edges
    }

    pub fn fan_out(&self) -> HashMap<&ClassId, usize> {
        self.edges.iter().fold(HashMap::new(), |mut acc, edge| {
            *acc.entry(&edge.source).or_default() += 1;
            acc
        })
    }

    pub fn fan_in(&self) -> HashMap<&ClassId, usize> {
        self.edges.iter().fold(HashMap::new(), |mut acc, edge| {
            *acc.entry(&edge.target).or_default() += 1;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str) -> DependencyEdge {
        DependencyEdge::new(ClassId::from(source), ClassId::from(target))
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let edges = vec![
            edge("A", "B"),
            edge("A", "C"),
            edge("A", "B"),
            edge("C", "A"),
            edge("A", "C"),
        ];
        assert_eq!(
            dedupe_edges(&edges),
            vec![edge("A", "B"), edge("A", "C"), edge("C", "A")]
        );
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let edges = vec![edge("A", "B"), edge("A", "B"), edge("B", "A")];
        let once = dedupe_edges(&edges);
        assert_eq!(dedupe_edges(&once), once);
    }

    #[test]
    fn test_direction_matters() {
        let edges = vec![edge("A", "B"), edge("B", "A")];
        assert_eq!(dedupe_edges(&edges).len(), 2);
    }

    #[test]
    fn test_builder_fan_in_and_out() {
        let mut builder = DependencyGraphBuilder::new();
        builder.add_edges(vec![edge("A", "B"), edge("A", "B"), edge("A", "C")]);
        builder.add_edges(vec![edge("C", "B")]);
        assert_eq!(builder.raw_edge_count(), 4);

        let graph = builder.build();
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.fan_out()[&ClassId::from("A")], 2);
        assert_eq!(graph.fan_in()[&ClassId::from("B")], 2);
    }
}
