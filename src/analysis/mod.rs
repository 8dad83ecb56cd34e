pub mod paths;
pub mod predicates;
pub mod service;

pub use paths::{absolute_root, normalize_path};
pub use predicates::{is_ignorable_type, is_layer_violation};
pub use service::infer_service;
