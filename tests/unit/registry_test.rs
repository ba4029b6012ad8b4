//! Tests for the Resource Contract Registry

use rsdef::catalog::gedcomx::{self, GedcomxCatalog, rel};
use rsdef::core::models::{DataTypeId, HttpMethod, StateTransition};
use rsdef::core::services::{RegistryError, ResourceRegistry};

use crate::common::{ResourceFixture, registry_with};

mod register {
    use super::*;

    #[test]
    fn duplicate_name_and_namespace_is_rejected() {
        let mut registry = registry_with(vec![ResourceFixture::new("Person").build()]);

        let err = registry.register(ResourceFixture::new("Person").build()).unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateResource {
                name: "Person".to_string(),
                namespace: crate::common::NS.to_string(),
            }
        );
    }

    #[test]
    fn failed_registration_leaves_registry_unchanged() {
        let original = ResourceFixture::new("Person").transition("note", &["Note"]).build();
        let mut registry = registry_with(vec![original.clone()]);

        let replacement = ResourceFixture::new("Person").transition("other", &["Fact"]).build();
        assert!(registry.register(replacement).is_err());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resources()[0], original);
    }

    #[test]
    fn namespace_distinguishes_resources() {
        let registry = registry_with(vec![
            ResourceFixture::new("Person").build(),
            ResourceFixture::new("Person").namespace("urn:other:").build(),
        ]);
        assert_eq!(registry.len(), 2);
    }
}

mod lookups {
    use super::*;

    #[test]
    fn get_by_name() {
        let registry = GedcomxCatalog::registry().unwrap();
        assert_eq!(registry.get("Search").unwrap().namespace, gedcomx::RS_NAMESPACE);
        assert!(registry.get("Place").is_none());
    }

    #[test]
    fn qualified_key_reaches_every_namespace() {
        let registry = registry_with(vec![
            ResourceFixture::new("Person").transition("note", &["Note"]).build(),
            ResourceFixture::new("Person")
                .namespace("urn:other:")
                .rel("other-person")
                .transition("fact", &["Fact"])
                .operation(HttpMethod::Get, &[203])
                .build(),
        ]);

        assert_eq!(registry.get("Person").unwrap().namespace, crate::common::NS);
        assert_eq!(registry.get("urn:other:Person").unwrap().namespace, "urn:other:");
        assert!(registry.get("urn:missing:Person").is_none());

        let rels: Vec<_> = registry
            .transitions_for("urn:other:Person")
            .unwrap()
            .iter()
            .map(|t| t.rel.as_str())
            .collect();
        assert_eq!(rels, ["fact"]);
        assert!(registry.resolve_transition("urn:other:Person", "fact").is_ok());

        let table = registry.outcomes_for("urn:other:Person", HttpMethod::Get).unwrap();
        assert_eq!(table.primary()[0].code.as_u16(), 203);
    }

    #[test]
    fn by_rel_finds_state_relation() {
        let registry = GedcomxCatalog::registry().unwrap();
        assert_eq!(registry.by_rel(rel::PERSON).unwrap().name, "Person");
        assert_eq!(registry.by_rel(rel::SEARCH).unwrap().name, "Search");
        assert!(registry.by_rel(rel::NOTE).is_none());
    }

    #[test]
    fn by_element_type() {
        let registry = GedcomxCatalog::registry().unwrap();
        let feed = DataTypeId::from("Feed");
        let names: Vec<_> = registry.by_element(&feed).map(|r| r.name.clone()).collect();
        assert_eq!(names, ["Search"]);
    }
}

mod transitions_for {
    use super::*;

    #[test]
    fn preserves_declaration_order() {
        let registry = GedcomxCatalog::registry().unwrap();
        let rels: Vec<_> =
            registry.transitions_for("Person").unwrap().iter().map(|t| t.rel.as_str()).collect();
        assert_eq!(
            rels,
            [
                rel::CONCLUSION,
                rel::CONCLUSIONS,
                rel::SOURCE_REFERENCES,
                rel::SOURCE_REFERENCE,
                rel::NOTES,
                rel::NOTE,
                rel::RELATIONSHIP,
                rel::SPOUSE_RELATIONSHIPS,
                rel::CHILD_RELATIONSHIPS,
                rel::PARENT_RELATIONSHIPS,
            ]
        );
    }

    #[test]
    fn empty_when_none_declared() {
        let registry = GedcomxCatalog::registry().unwrap();
        assert!(registry.transitions_for("Search").unwrap().is_empty());
    }

    #[test]
    fn unknown_resource_is_an_error() {
        let registry = ResourceRegistry::new();
        assert_eq!(
            registry.transitions_for("Person").unwrap_err(),
            RegistryError::UnknownResource("Person".to_string())
        );
    }
}

mod resolve_transition {
    use super::*;

    #[test]
    fn declared_relation_resolves_with_conditional_flag() {
        let registry = GedcomxCatalog::registry().unwrap();
        let resolved = registry.resolve_transition("Person", rel::CONCLUSION).unwrap();

        assert!(resolved.conditional());
        assert_eq!(resolved.source.name, "Person");
        assert_eq!(resolved.transition.scope, ["Name", "Gender", "Fact"].map(DataTypeId::from));
        assert!(resolved.target.is_none());
    }

    #[test]
    fn target_is_found_when_registered() {
        let registry = registry_with(vec![
            ResourceFixture::new("Person").transition("relationship", &["Relationship"]).build(),
            ResourceFixture::new("Relationship").build(),
        ]);

        let resolved = registry.resolve_transition("Person", "relationship").unwrap();
        assert_eq!(resolved.target.unwrap().name, "Relationship");
        assert!(!resolved.conditional());
    }

    #[test]
    fn undeclared_relation_is_unknown() {
        let registry = GedcomxCatalog::registry().unwrap();
        assert_eq!(
            registry.resolve_transition("Person", "spouse").unwrap_err(),
            RegistryError::UnknownRelation {
                resource: "Person".to_string(),
                rel: "spouse".to_string(),
            }
        );
    }

    #[test]
    fn state_relation_is_not_a_transition() {
        let registry = GedcomxCatalog::registry().unwrap();
        assert!(matches!(
            registry.resolve_transition("Person", rel::PERSON),
            Err(RegistryError::UnknownRelation { .. })
        ));
    }
}

#[test]
fn person_example_end_to_end() {
    let mut registry = crate::common::empty_registry();
    let mut person = ResourceFixture::new("Person")
        .operation(HttpMethod::Head, &[200, 301, 404, 410])
        .operation(HttpMethod::Get, &[200, 301, 404, 410])
        .operation(HttpMethod::Post, &[204, 404, 410])
        .operation(HttpMethod::Delete, &[204, 404, 410])
        .build();
    person.states[0].transitions.push(
        StateTransition::new("conclusion", "A conclusion.")
            .scope(["Name", "Gender", "Fact"])
            .conditional(),
    );
    registry.register(person).unwrap();

    let table = registry.outcomes_for("Person", HttpMethod::Get).unwrap();
    let pairs: Vec<_> = table.all().map(|o| (o.code.as_u16(), o.condition.as_str())).collect();
    assert_eq!(
        pairs,
        [(200, "code 200"), (301, "code 301"), (404, "code 404"), (410, "code 410")]
    );
    assert!(registry.validate().is_empty());
    assert!(registry.resolve_transition("Person", "conclusion").unwrap().conditional());
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceRegistry>();

    let registry = std::sync::Arc::new(GedcomxCatalog::registry().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || registry.validate().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0);
    }
}
