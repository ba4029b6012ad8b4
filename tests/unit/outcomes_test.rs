//! Tests for status code tables

use rsdef::catalog::GedcomxCatalog;
use rsdef::core::models::{HttpMethod, StatusCode};
use rsdef::core::services::{OutcomeClass, OutcomeTable, RegistryError};

#[test]
fn person_get_table_is_ordered() {
    let registry = GedcomxCatalog::registry().unwrap();
    let table = registry.outcomes_for("Person", HttpMethod::Get).unwrap();

    let codes: Vec<u16> = table.primary().iter().map(|o| o.code.as_u16()).collect();
    assert_eq!(codes, [200, 301, 404, 410]);
    assert!(table.warnings().is_empty());
    assert_eq!(table.resource(), "Person");
    assert_eq!(table.method(), HttpMethod::Get);
}

#[test]
fn search_declares_400_twice() {
    let registry = GedcomxCatalog::registry().unwrap();
    let table = registry.outcomes_for("Search", HttpMethod::Get).unwrap();

    let conditions = table.conditions_for(400);
    assert_eq!(conditions.len(), 2);
    assert!(conditions[0].contains("unable to be understood"));
    assert!(conditions[1].contains("too many results"));
}

#[test]
fn all_lists_primary_then_warnings() {
    let registry = GedcomxCatalog::registry().unwrap();
    let table = registry.outcomes_for("Search", HttpMethod::Get).unwrap();

    let codes: Vec<u16> = table.all().map(|o| o.code.as_u16()).collect();
    assert_eq!(codes, [200, 204, 400, 400, 299]);
}

#[test]
fn classify_partitions_codes() {
    let registry = GedcomxCatalog::registry().unwrap();
    let table = registry.outcomes_for("Search", HttpMethod::Get).unwrap();

    assert_eq!(table.classify(204), OutcomeClass::Primary);
    assert_eq!(table.classify(StatusCode::new(299)), OutcomeClass::Warning);
    assert_eq!(table.classify(404), OutcomeClass::Undeclared);
    assert!(table.declares(299));
    assert!(!table.declares(500));
}

#[test]
fn post_and_delete_share_shape() {
    let registry = GedcomxCatalog::registry().unwrap();
    for method in [HttpMethod::Post, HttpMethod::Delete] {
        let table = registry.outcomes_for("Person", method).unwrap();
        let codes: Vec<u16> = table.all().map(|o| o.code.as_u16()).collect();
        assert_eq!(codes, [204, 404, 410], "{method}");
    }
}

#[test]
fn undeclared_method_fails() {
    let registry = GedcomxCatalog::registry().unwrap();
    let err = registry.outcomes_for("Person", HttpMethod::Put).unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownOperation {
            resource: "Person".to_string(),
            method: HttpMethod::Put,
        }
    );
}

#[test]
fn unknown_resource_fails() {
    let registry = GedcomxCatalog::registry().unwrap();
    let err = registry.outcomes_for("Place", HttpMethod::Get).unwrap_err();
    assert_eq!(err, RegistryError::UnknownResource("Place".to_string()));
}

#[test]
fn table_from_each_declared_operation() {
    let mut search = rsdef::catalog::gedcomx::search();
    search.operations.push(
        rsdef::core::models::OperationDefinition::new(HttpMethod::Get).response(203, "cached"),
    );

    let tables: Vec<_> =
        search.operations.iter().map(|op| OutcomeTable::new(&search, op)).collect();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].classify(203), OutcomeClass::Undeclared);
    assert_eq!(tables[1].classify(203), OutcomeClass::Primary);
    assert_eq!(tables[1].resource(), "Search");
}
