use super::paths;
use crate::config::{IgnorableConfig, LayerConfig};
use crate::core::TypeReference;

/// Types that never count toward CBO: blank names, primitive scalars, and
/// anything under a reserved standard-library namespace.
pub fn is_ignorable_type(qualified_name: &str, config: &IgnorableConfig) -> bool {
    let name = qualified_name.trim();
    name.is_empty()
        || config.primitives.iter().any(|p| p == name)
        || config
            .namespace_prefixes
            .iter()
            .any(|prefix| has_namespace_prefix(name, prefix))
}

fn has_namespace_prefix(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// True when a segment, or one dot-separated part of it, names an inward
/// layer. Matches both `domain/` and `Ordering.Domain/`.
pub fn is_inward_path(relative_path: &str, config: &LayerConfig) -> bool {
    paths::segments(relative_path).iter().any(|segment| {
        segment.split('.').any(|part| {
            config
                .inward_segments
                .iter()
                .any(|layer| part.eq_ignore_ascii_case(layer))
        })
    })
}

pub fn is_outward_unit(unit: &str, config: &LayerConfig) -> bool {
    let unit = unit.to_lowercase();
    config
        .outward_keywords
        .iter()
        .any(|keyword| unit.contains(keyword.as_str()))
}

/// Inward-facing code referencing an outward-facing unit.
pub fn is_layer_violation(relative_path: &str, target: &TypeReference, config: &LayerConfig) -> bool {
    is_inward_path(relative_path, config) && is_outward_unit(&target.unit, config)
}
