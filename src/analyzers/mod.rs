pub mod class_registry;
pub mod reference_resolver;

pub use class_registry::{is_source_document, ClassRegistry, RegistryCollision};
pub use reference_resolver::{ClassReferences, ReferenceResolver};
