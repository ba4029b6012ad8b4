//! GEDCOM X resource definitions
//!
//! The Person resource (a person and the components of a person: names,
//! gender, facts, source references, notes, and the relationships the person
//! is a member of) and the Search resource (entries matching search criteria).
//!
//! Links from the Person resource to its conclusions, notes, source
//! references and relationship lists are "embedded": the linked resources are
//! components of the person and must be resolved to fully resolve it.

use crate::core::models::{
    DataType, HttpMethod, OperationDefinition, ResourceDefinition, StateDefinition,
    StateTransition,
};
use crate::core::ports::{DefinitionSource, Definitions, build_registry};
use crate::core::services::ResourceRegistry;

/// GEDCOM X data model namespace
pub const GEDCOMX_NAMESPACE: &str = "http://gedcomx.org/v1/";

/// GEDCOM X resource-service namespace
pub const RS_NAMESPACE: &str = "http://gedcomx.org/rs/v1/";

/// Atom syndication namespace
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Project id owning these definitions
pub const PROJECT_ID: &str = "gedcomx-rs";

/// Prefix of GEDCOM X link relations that are not plain tokens
pub const LINK_REL_PREFIX: &str = "http://gedcomx.org/links/";

/// Link relations used by the catalog
pub mod rel {
    /// A person
    pub const PERSON: &str = "person";
    /// A conclusion of a person
    pub const CONCLUSION: &str = "conclusion";
    /// The conclusions of a person
    pub const CONCLUSIONS: &str = "conclusions";
    /// The source references of a person
    pub const SOURCE_REFERENCES: &str = "source-references";
    /// A source reference
    pub const SOURCE_REFERENCE: &str = "source-reference";
    /// The notes of a person
    pub const NOTES: &str = "notes";
    /// A note
    pub const NOTE: &str = "note";
    /// A relationship
    pub const RELATIONSHIP: &str = "relationship";
    /// Relationships to the spouses of a person
    pub const SPOUSE_RELATIONSHIPS: &str = "spouse-relationships";
    /// Relationships to the children of a person
    pub const CHILD_RELATIONSHIPS: &str = "child-relationships";
    /// Relationships to the parents of a person
    pub const PARENT_RELATIONSHIPS: &str = "parent-relationships";
    /// Search results
    pub const SEARCH: &str = "http://gedcomx.org/links/search";
}

/// The built-in GEDCOM X catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct GedcomxCatalog;

impl GedcomxCatalog {
    /// A registry holding only the built-in catalog
    pub fn registry() -> anyhow::Result<ResourceRegistry> {
        let source: &dyn DefinitionSource = &Self;
        build_registry(&[source])
    }
}

impl DefinitionSource for GedcomxCatalog {
    fn label(&self) -> String {
        "builtin:gedcomx".to_string()
    }

    fn load(&self) -> anyhow::Result<Definitions> {
        Ok(Definitions {
            data_types: data_types(),
            resources: vec![person(), search()],
        })
    }
}

/// Data element types referenced by the catalog
#[must_use]
pub fn data_types() -> Vec<DataType> {
    let mut types: Vec<DataType> = [
        "Gedcomx",
        "Person",
        "Name",
        "Gender",
        "Fact",
        "Note",
        "SourceReference",
        "Relationship",
    ]
    .into_iter()
    .map(|name| DataType::namespaced(name, GEDCOMX_NAMESPACE))
    .collect();
    types.push(DataType::namespaced("Feed", ATOM_NAMESPACE));
    types
}

/// The Person resource
#[must_use]
pub fn person() -> ResourceDefinition {
    let embedded = |rel: &str, description: &str| {
        StateTransition::new(rel, description).scope(["Person"]).conditional().embedded()
    };

    ResourceDefinition::builder("Person", GEDCOMX_NAMESPACE)
        .project_id(PROJECT_ID)
        .element("Gedcomx")
        .description(
            "The person resource defines the interface for a person, including the components \
             of a person such as the person's names, gender, facts, source references, and \
             notes. The person resource also includes the relationships in which the person is \
             a member, such as the relationships to parents, spouses, and children.",
        )
        .state(
            StateDefinition::new("Person", rel::PERSON, "A person.")
                .transition(
                    StateTransition::new(rel::CONCLUSION, "A conclusion.")
                        .scope(["Name", "Gender", "Fact"])
                        .conditional(),
                )
                .transition(embedded(
                    rel::CONCLUSIONS,
                    "The conclusions for the person (embedded link).",
                ))
                .transition(embedded(
                    rel::SOURCE_REFERENCES,
                    "The source references for the person (embedded link).",
                ))
                .transition(
                    StateTransition::new(rel::SOURCE_REFERENCE, "A source reference.")
                        .scope(["SourceReference"])
                        .conditional(),
                )
                .transition(embedded(rel::NOTES, "The notes for the person (embedded link)."))
                .transition(
                    StateTransition::new(rel::NOTE, "A note.").scope(["Note"]).conditional(),
                )
                .transition(
                    StateTransition::new(rel::RELATIONSHIP, "A relationship.")
                        .scope(["Relationship"]),
                )
                .transition(embedded(
                    rel::SPOUSE_RELATIONSHIPS,
                    "The relationships to the spouses of the person (embedded link).",
                ))
                .transition(embedded(
                    rel::CHILD_RELATIONSHIPS,
                    "The relationships to the children of the person (embedded link).",
                ))
                .transition(embedded(
                    rel::PARENT_RELATIONSHIPS,
                    "The relationships to the parents of the person (embedded link).",
                )),
        )
        .operation(
            OperationDefinition::new(HttpMethod::Head)
                .describe("Read a person header attributes.")
                .response(200, "Upon a successful read.")
                .response(301, "If the requested person has been merged to another person.")
                .response(404, "If the requested person is not found.")
                .response(410, "If the requested person has been deleted."),
        )
        .operation(
            OperationDefinition::new(HttpMethod::Get)
                .describe("Read a person.")
                .response(200, "Upon a successful read.")
                .response(301, "If the requested person has been merged into another person.")
                .response(404, "If the requested person is not found.")
                .response(410, "If the requested person has been deleted."),
        )
        .operation(
            OperationDefinition::new(HttpMethod::Post)
                .describe("Update a person.")
                .response(204, "The update was successful.")
                .response(404, "If the requested person is not found.")
                .response(410, "If the requested person has been deleted."),
        )
        .operation(
            OperationDefinition::new(HttpMethod::Delete)
                .describe("Delete a person.")
                .response(204, "The delete was successful.")
                .response(404, "If the requested person is not found.")
                .response(410, "If the requested person has already been deleted."),
        )
        .build()
}

/// The Search resource
#[must_use]
pub fn search() -> ResourceDefinition {
    ResourceDefinition::builder("Search", RS_NAMESPACE)
        .project_id(PROJECT_ID)
        .element("Feed")
        .description(
            "The search resource defines the set of entries in the system that are applicable \
             to specific search criteria. Links to the search resource should be defined using \
             a URI template.",
        )
        .subresource("PersonEntry")
        .parameter("start", "The index of the first search result desired by the search client.")
        .parameter("count", "The number of search results per page desired by the search client.")
        .parameter(
            "q",
            "The query parameter describing the search criteria. Name and value are separated \
             by a colon and pairs by white space (e.g. givenName:John surname:Smith). Values \
             containing white space are wrapped in double quotes; a trailing tilde requests a \
             non-exact match. Reserved names: givenName, surname, gender, birthDate, \
             birthPlace, deathDate, deathPlace, marriageDate, marriagePlace, and the same set \
             prefixed with father, mother, spouse or parent.",
        )
        .state(StateDefinition::new("Search", rel::SEARCH, "Search results."))
        .operation(
            OperationDefinition::new(HttpMethod::Get)
                .describe("Read the results of a search.")
                .response(200, "Upon a successful read.")
                .response(204, "Upon a successful query with no results.")
                .response(
                    400,
                    "If the query to be processed was unable to be understood by the application.",
                )
                .response(
                    400,
                    "If the application declines to process the query because it would have \
                     resulted in too many results.",
                )
                .warning(299, "If part or all of the query is unable to be processed."),
        )
        .build()
}
