use super::class_registry::ClassRegistry;
use crate::analysis::predicates::{is_ignorable_type, is_layer_violation};
use crate::config::{IgnorableConfig, LayerConfig};
use crate::core::{ClassId, DependencyEdge, Resolution, TypeReference};
use crate::frontend::ClassFacts;
use std::collections::BTreeSet;

/// Everything one class's references contribute to its metrics and to the
/// dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassReferences {
    /// `"<type>.<method>"` for every resolved call site (RFC)
    pub invoked_signatures: BTreeSet<String>,
    /// Non-ignorable referenced types (CBO)
    pub dependency_types: BTreeSet<String>,
    /// One edge per reference to a registered class, duplicates included
    pub edges: Vec<DependencyEdge>,
    pub layer_violations: u32,
}

/// Turns a class's resolved references into coupling facts and graph edges.
///
/// Holds the registry read-only; it must be fully populated before any class
/// is resolved.
pub struct ReferenceResolver<'a> {
    registry: &'a ClassRegistry,
    ignorable: &'a IgnorableConfig,
    layers: &'a LayerConfig,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(
        registry: &'a ClassRegistry,
        ignorable: &'a IgnorableConfig,
        layers: &'a LayerConfig,
    ) -> Self {
        Self {
            registry,
            ignorable,
            layers,
        }
    }

    /// Resolve the references of `class`, declared at `relative_path`.
    ///
    /// Call sites are visited method by method, then field types, then
    /// property types. Unresolved references are skipped.
    pub fn resolve_class(
        &self,
        class_id: &ClassId,
        relative_path: &str,
        class: &ClassFacts,
    ) -> ClassReferences {
        let mut refs = ClassReferences::default();

        let calls = class
            .methods
            .iter()
            .flat_map(|m| m.calls.iter())
            .filter_map(Resolution::resolved);
        for method in calls {
            refs.invoked_signatures.insert(method.signature());
            self.record_type(&mut refs, class_id, relative_path, &method.declaring_type);
        }

        let member_types = class
            .fields
            .iter()
            .chain(&class.properties)
            .filter_map(|member| member.declared_type.resolved());
        for target in member_types {
            self.record_type(&mut refs, class_id, relative_path, target);
        }

        refs
    }

    fn record_type(
        &self,
        refs: &mut ClassReferences,
        class_id: &ClassId,
        relative_path: &str,
        target: &TypeReference,
    ) {
        if !is_ignorable_type(&target.qualified_name, self.ignorable) {
            refs.dependency_types.insert(target.qualified_name.clone());
        }

        if let Some(target_id) = self.registry.lookup(&target.qualified_name) {
            refs.edges
                .push(DependencyEdge::new(class_id.clone(), target_id.clone()));
        }

        if is_layer_violation(relative_path, target, self.layers) {
            refs.layer_violations += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MethodReference;
    use crate::frontend::{LineSpan, MemberFacts, MethodFacts};

    fn member(ty: Resolution<TypeReference>) -> MemberFacts {
        MemberFacts {
            name: "m".into(),
            declared_type: ty,
        }
    }

    fn resolved(name: &str, unit: &str) -> Resolution<TypeReference> {
        Resolution::Resolved(TypeReference::new(name, unit))
    }

    fn call(ty: &str, unit: &str, method: &str) -> Resolution<MethodReference> {
        Resolution::Resolved(MethodReference::new(TypeReference::new(ty, unit), method))
    }

    fn class_with(
        methods: Vec<MethodFacts>,
        fields: Vec<MemberFacts>,
        properties: Vec<MemberFacts>,
    ) -> ClassFacts {
        ClassFacts {
            name: "Order".into(),
            namespace: Some("Shop.Domain".into()),
            span: LineSpan::new(1, 30),
            methods,
            fields,
            properties,
        }
    }

    fn registry() -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        registry.register("Shop.Domain", "Shop.Domain.Order");
        registry.register("Shop.Domain", "Shop.Domain.Buyer");
        registry.register("Shop.Infrastructure", "Shop.Infrastructure.OrderRepository");
        registry
    }

    fn resolve(class: &ClassFacts, path: &str) -> ClassReferences {
        let registry = registry();
        let ignorable = IgnorableConfig::default();
        let layers = LayerConfig::default();
        let resolver = ReferenceResolver::new(&registry, &ignorable, &layers);
        resolver.resolve_class(&ClassId::from("Shop.Domain:Shop.Domain.Order"), path, class)
    }

    #[test]
    fn test_primitive_fields_do_not_couple() {
        let class = class_with(
            vec![],
            vec![member(resolved("string", "")), member(resolved("int", ""))],
            vec![],
        );
        let refs = resolve(&class, "src/Shop.Domain/Order.cs");
        assert!(refs.dependency_types.is_empty());
        assert!(refs.edges.is_empty());
    }

    #[test]
    fn test_unresolved_references_are_skipped() {
        let method = MethodFacts {
            name: "Ship".into(),
            body: vec![],
            calls: vec![Resolution::Unresolved],
        };
        let class = class_with(vec![method], vec![member(Resolution::Unresolved)], vec![]);
        assert_eq!(resolve(&class, "src/Order.cs"), ClassReferences::default());
    }

    #[test]
    fn test_calls_feed_rfc_cbo_and_edges() {
        let method = MethodFacts {
            name: "Ship".into(),
            body: vec![],
            calls: vec![
                call("Shop.Domain.Buyer", "Shop.Domain", "Notify"),
                call("Shop.Domain.Buyer", "Shop.Domain", "Notify"),
                call("Shop.Domain.Buyer", "Shop.Domain", "Charge"),
                call("System.Console", "System.Console", "WriteLine"),
            ],
        };
        let class = class_with(vec![method], vec![], vec![]);
        let refs = resolve(&class, "src/Shop.Domain/Order.cs");

        assert_eq!(refs.invoked_signatures.len(), 3);
        assert!(refs.invoked_signatures.contains("System.Console.WriteLine"));
        assert_eq!(
            refs.dependency_types.iter().collect::<Vec<_>>(),
            vec!["Shop.Domain.Buyer"]
        );
        // Repeated references keep producing edges; dedupe happens later.
        assert_eq!(refs.edges.len(), 3);
        assert_eq!(refs.edges[0].target.as_str(), "Shop.Domain:Shop.Domain.Buyer");
    }

    #[test]
    fn test_unregistered_type_couples_without_edge() {
        let class = class_with(
            vec![],
            vec![],
            vec![member(resolved("ThirdParty.Money", "ThirdParty"))],
        );
        let refs = resolve(&class, "src/Order.cs");
        assert_eq!(refs.dependency_types.len(), 1);
        assert!(refs.edges.is_empty());
    }

    #[test]
    fn test_layer_violation_counts_each_reference() {
        let repo = || resolved("Shop.Infrastructure.OrderRepository", "Shop.Infrastructure");
        let class = class_with(vec![], vec![member(repo())], vec![member(repo())]);

        let from_domain = resolve(&class, "src/domain/Order.cs");
        assert_eq!(from_domain.layer_violations, 2);
        assert_eq!(from_domain.dependency_types.len(), 1);

        let from_api = resolve(&class, "src/webapi/Order.cs");
        assert_eq!(from_api.layer_violations, 0);
    }

    #[test]
    fn test_self_reference_produces_self_edge() {
        let class = class_with(vec![], vec![member(resolved("Shop.Domain.Order", "Shop.Domain"))], vec![]);
        let refs = resolve(&class, "src/Order.cs");
        assert_eq!(refs.edges.len(), 1);
        assert_eq!(refs.edges[0].source, refs.edges[0].target);
    }
}
