use crate::frontend::{MethodFacts, NodeKind, SyntaxNode};

/// Cyclomatic complexity of one method body: 1 plus one per decision point.
pub fn calculate_cyclomatic(body: &[SyntaxNode]) -> u32 {
    1 + count_decision_points(body)
}

/// Sum of per-method cyclomatic complexity; 0 for a class without methods.
pub fn calculate_class_cyclomatic(methods: &[MethodFacts]) -> u32 {
    methods.iter().map(|m| calculate_cyclomatic(&m.body)).sum()
}

/// Walk the tree with an explicit stack so deeply nested bodies cannot
/// exhaust the call stack.
fn count_decision_points(body: &[SyntaxNode]) -> u32 {
    let mut stack: Vec<&SyntaxNode> = body.iter().collect();
    let mut count = 0;

    while let Some(node) = stack.pop() {
        count += node_complexity(node.kind);
        stack.extend(node.children.iter());
    }

    count
}

fn node_complexity(kind: NodeKind) -> u32 {
    match kind {
        NodeKind::If
        | NodeKind::While
        | NodeKind::For
        | NodeKind::ForEach
        | NodeKind::CaseLabel
        | NodeKind::Catch
        | NodeKind::Conditional
        | NodeKind::LogicalAnd
        | NodeKind::LogicalOr => 1,
        NodeKind::Other => 0,
    }
}
