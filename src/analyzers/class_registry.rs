use crate::config::SourcesConfig;
use crate::core::ClassId;
use crate::frontend::{DocumentFacts, UnitFacts};
use std::collections::HashMap;
use std::path::Path;

/// A qualified name declared in more than one unit. The later declaration was
/// aliased to the identifier of the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCollision {
    pub qualified_name: String,
    pub kept: ClassId,
    pub aliased_unit: String,
}

/// Registry mapping fully-qualified class names to their identifiers.
///
/// The first declaration of a name wins. Later declarations, in the same unit
/// (partial classes) or in another, resolve to the identifier already stored.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    ids: HashMap<String, ClassId>,
    collisions: Vec<RegistryCollision>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from every class of every source document, in scan
    /// order.
    pub fn populate(units: &[UnitFacts], sources: &SourcesConfig) -> Self {
        let mut registry = Self::new();
        for unit in units {
            for document in unit.documents.iter().filter(|d| is_source_document(d, sources)) {
                for class in &document.classes {
                    registry.register(&unit.name, &class.qualified_name());
                }
            }
        }
        registry
    }

    /// Register a class declaration and return its identifier.
    pub fn register(&mut self, unit: &str, qualified_name: &str) -> ClassId {
        if let Some(existing) = self.ids.get(qualified_name) {
            let candidate = ClassId::new(unit, qualified_name);
            if *existing != candidate {
                self.collisions.push(RegistryCollision {
                    qualified_name: qualified_name.to_string(),
                    kept: existing.clone(),
                    aliased_unit: unit.to_string(),
                });
            }
            return existing.clone();
        }

        let id = ClassId::new(unit, qualified_name);
        self.ids.insert(qualified_name.to_string(), id.clone());
        id
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<&ClassId> {
        self.ids.get(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn collisions(&self) -> &[RegistryCollision] {
        &self.collisions
    }
}

/// Documents without a path, or whose extension is not a configured source
/// extension, are skipped entirely by both passes.
pub fn is_source_document(document: &DocumentFacts, sources: &SourcesConfig) -> bool {
    document.file_path().is_some_and(|path| has_source_extension(path, sources))
}

fn has_source_extension(path: &Path, sources: &SourcesConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            sources
                .extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{ClassFacts, LineSpan};
    use std::path::PathBuf;

    fn class(namespace: &str, name: &str) -> ClassFacts {
        ClassFacts {
            name: name.to_string(),
            namespace: Some(namespace.to_string()),
            span: LineSpan::new(1, 5),
            methods: vec![],
            fields: vec![],
            properties: vec![],
        }
    }

    fn document(path: Option<&str>, classes: Vec<ClassFacts>) -> DocumentFacts {
        DocumentFacts {
            path: path.map(PathBuf::from),
            classes,
        }
    }

    #[test]
    fn test_register_creates_unit_prefixed_id() {
        let mut registry = ClassRegistry::new();
        let id = registry.register("Ordering.Domain", "Ordering.Domain.Order");
        assert_eq!(id.as_str(), "Ordering.Domain:Ordering.Domain.Order");
        assert_eq!(registry.lookup("Ordering.Domain.Order"), Some(&id));
        assert_eq!(registry.lookup("Ordering.Domain.Buyer"), None);
    }

    #[test]
    fn test_first_declaration_wins() {
        let mut registry = ClassRegistry::new();
        let first = registry.register("A", "Common.Helper");
        let second = registry.register("B", "Common.Helper");

        assert_eq!(first, second);
        assert_eq!(registry.lookup("Common.Helper").unwrap().as_str(), "A:Common.Helper");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.collisions().len(), 1);
        assert_eq!(registry.collisions()[0].aliased_unit, "B");
    }

    #[test]
    fn test_partial_class_in_same_unit_is_not_a_collision() {
        let mut registry = ClassRegistry::new();
        registry.register("A", "A.Order");
        registry.register("A", "A.Order");
        assert!(registry.collisions().is_empty());
    }

    #[test]
    fn test_populate_skips_non_source_documents() {
        let units = vec![UnitFacts {
            name: "Shop".to_string(),
            references: vec![],
            documents: vec![
                document(Some("/repo/Shop/Order.cs"), vec![class("Shop", "Order")]),
                document(None, vec![class("Shop", "Orphan")]),
                document(Some("/repo/Shop/Gen.g.txt"), vec![class("Shop", "Generated")]),
            ],
        }];

        let registry = ClassRegistry::populate(&units, &SourcesConfig::default());
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("Shop.Order").is_some());
        assert!(registry.lookup("Shop.Orphan").is_none());
        assert!(registry.lookup("Shop.Generated").is_none());
    }

    #[test]
    fn test_source_extension_is_case_insensitive() {
        let doc = document(Some("/repo/Shop/ORDER.CS"), vec![]);
        assert!(is_source_document(&doc, &SourcesConfig::default()));
    }
}
