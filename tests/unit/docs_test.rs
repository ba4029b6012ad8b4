//! Tests for Markdown documentation rendering

use rsdef::catalog::GedcomxCatalog;
use rsdef::core::models::HttpMethod;
use rsdef::core::services::render_markdown;

use crate::common::{ResourceFixture, registry_with};

#[test]
fn renders_every_resource_in_order() {
    let registry = GedcomxCatalog::registry().unwrap();
    let markdown = render_markdown(&registry);

    assert!(markdown.starts_with("# API Resources\n"));
    let person = markdown.find("## Person").unwrap();
    let search = markdown.find("## Search").unwrap();
    assert!(person < search);
}

#[test]
fn person_section_lists_transitions() {
    let registry = GedcomxCatalog::registry().unwrap();
    let markdown = render_markdown(&registry);

    assert!(markdown.contains("### State: Person (`person`)"));
    assert!(markdown.contains("| `relationship` | A relationship. | Relationship | no | no |"));
    assert!(markdown.contains("| `conclusion` | A conclusion. | Name, Gender, Fact | yes | no |"));
    assert!(markdown.contains("- Project: `gedcomx-rs`"));
}

#[test]
fn search_section_has_parameters_and_warnings() {
    let registry = GedcomxCatalog::registry().unwrap();
    let markdown = render_markdown(&registry);

    assert!(markdown.contains("### Parameters"));
    assert!(markdown.contains("| `count` |"));
    assert!(markdown.contains("| warning | condition |"));
    assert!(markdown.contains("| 299 | If part or all of the query is unable to be processed. |"));
    assert!(markdown.contains("- Sub-resources: PersonEntry"));
}

#[test]
fn pipes_in_text_are_escaped() {
    let mut person = ResourceFixture::new("Person").operation(HttpMethod::Get, &[200]).build();
    person.operations[0].responses[0].condition = "ok | fine".to_string();
    let registry = registry_with(vec![person]);

    assert!(render_markdown(&registry).contains("| 200 | ok \\| fine |"));
}

#[test]
fn empty_registry_renders_heading_only() {
    let registry = registry_with(Vec::new());
    assert_eq!(render_markdown(&registry), "# API Resources\n");
}
