//! Per-class structural metrics.
//!
//! | Metric | Source |
//! |---|---|
//! | LOC | inclusive line span, at least 1 |
//! | NOM | declared methods |
//! | NOF | declared fields + properties |
//! | WMC | unweighted, equal to NOM |
//! | RFC | distinct invoked signatures |
//! | CBO | distinct non-ignorable referenced types |
//! | Cyclomatic | per-method cyclomatic complexity, summed |
//! | LayerViolations | inward code referencing outward units |
//! | CycleInvolvement | 1 when the class's unit is in a unit cycle |

use crate::analyzers::ClassReferences;
use crate::complexity::calculate_class_cyclomatic;
use crate::core::ClassMetrics;
use crate::frontend::ClassFacts;

pub fn compute_class_metrics(
    class: &ClassFacts,
    references: &ClassReferences,
    unit_in_cycle: bool,
) -> ClassMetrics {
    let nom = count_u32(class.methods.len());

    ClassMetrics {
        loc: class.span.line_count(),
        nom,
        nof: count_u32(class.fields.len() + class.properties.len()),
        wmc: nom,
        rfc: count_u32(references.invoked_signatures.len()),
        cbo: count_u32(references.dependency_types.len()),
        cyclomatic: calculate_class_cyclomatic(&class.methods),
        layer_violations: references.layer_violations,
        cycle_involvement: u32::from(unit_in_cycle),
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
