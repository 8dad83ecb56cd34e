use crate::frontend::UnitFacts;
use std::collections::{BTreeSet, HashMap};

/// Directed graph of grouping units, edge A→B when unit A references unit B.
#[derive(Debug, Clone, Default)]
pub struct UnitGraph {
    units: Vec<String>,
    index: HashMap<String, usize>,
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
}

impl UnitGraph {
    /// Create a new empty unit graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from each unit's declared references. Referenced
    /// units that were not scanned still become nodes.
    pub fn from_units(units: &[UnitFacts]) -> Self {
        units.iter().fold(Self::new(), |mut graph, unit| {
            graph.add_unit(&unit.name);
            for reference in &unit.references {
                graph.add_reference(&unit.name, reference);
            }
            graph
        })
    }

    /// Add a unit to the graph, returning its node index
    pub fn add_unit(&mut self, unit: &str) -> usize {
        if let Some(&idx) = self.index.get(unit) {
            return idx;
        }
        let idx = self.units.len();
        self.units.push(unit.to_string());
        self.index.insert(unit.to_string(), idx);
        self.forward.push(Vec::new());
        self.reverse.push(Vec::new());
        idx
    }

    /// Add a reference edge between two units; repeated edges are ignored
    pub fn add_reference(&mut self, from: &str, to: &str) {
        let from = self.add_unit(from);
        let to = self.add_unit(to);
        if !self.forward[from].contains(&to) {
            self.forward[from].push(to);
            self.reverse[to].push(from);
        }
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn reference_count(&self) -> usize {
        self.forward.iter().map(Vec::len).sum()
    }

    /// Strongly connected components (Kosaraju), each sorted by unit name.
    ///
    /// Components come out in the order pass 2 discovers them.
    pub fn strongly_connected_components(&self) -> Vec<Vec<String>> {
        let order = self.finish_order();
        let mut assigned = vec![false; self.units.len()];
        let mut components = Vec::new();

        for &root in order.iter().rev() {
            if assigned[root] {
                continue;
            }
            assigned[root] = true;
            let mut stack = vec![root];
            let mut component = Vec::new();

            while let Some(node) = stack.pop() {
                component.push(self.units[node].clone());
                for &pred in &self.reverse[node] {
                    if !assigned[pred] {
                        assigned[pred] = true;
                        stack.push(pred);
                    }
                }
            }

            component.sort();
            components.push(component);
        }

        components
    }

    /// Components with more than one member.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        self.strongly_connected_components()
            .into_iter()
            .filter(|component| component.len() > 1)
            .collect()
    }

    /// Units that share a component with at least one other unit. A unit
    /// that only references itself is not included.
    pub fn units_in_cycles(&self) -> BTreeSet<String> {
        self.cycles().into_iter().flatten().collect()
    }

    /// Pass 1: DFS over the forward graph from every unvisited node, recording
    /// nodes as they finish. Each stack frame holds the index of the next
    /// successor to visit.
    fn finish_order(&self) -> Vec<usize> {
        let n = self.units.len();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut stack = vec![(start, 0usize)];

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                match self.forward[node].get(next) {
                    Some(&succ) => {
                        frame.1 += 1;
                        if !visited[succ] {
                            visited[succ] = true;
                            stack.push((succ, 0));
                        }
                    }
                    None => {
                        order.push(node);
                        stack.pop();
                    }
                }
            }
        }

        order
    }
}
