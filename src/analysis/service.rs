use super::paths;
use crate::config::ServiceConfig;
use std::path::Path;

/// Infer the deployable a file belongs to from its first path segment below
/// the scan root. Used for grouping only.
pub fn infer_service(file: &Path, root: &Path, config: &ServiceConfig) -> String {
    let file = file.to_string_lossy();
    let root = root.to_string_lossy();

    match paths::relative_segments(&file, &root)
        .as_deref()
        .and_then(<[&str]>::first)
    {
        Some(first) => label_for_segment(first, config),
        None => config.unknown_label.clone(),
    }
}

fn label_for_segment(segment: &str, config: &ServiceConfig) -> String {
    let lowered = segment.to_lowercase();

    if config.shared_segments.iter().any(|s| *s == lowered) {
        return config.shared_label.clone();
    }
    if let Some(label) = config.deployables.get(&lowered) {
        return label.clone();
    }
    segment.to_string()
}
