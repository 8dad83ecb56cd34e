pub mod cyclomatic;

pub use cyclomatic::{calculate_class_cyclomatic, calculate_cyclomatic};
