//! Shared test fixtures and builders
//!
//! Provides convenient builders for creating contract definitions.

use rsdef::catalog::gedcomx;
use rsdef::core::models::{
    DataType, HttpMethod, OperationDefinition, ResourceDefinition, StateDefinition,
    StateTransition,
};
use rsdef::core::services::ResourceRegistry;

pub const NS: &str = "http://gedcomx.org/v1/";

/// A registry that knows the GEDCOM X data types but holds no resources
pub fn empty_registry() -> ResourceRegistry {
    let mut registry = ResourceRegistry::new();
    for data_type in gedcomx::data_types() {
        registry.register_data_type(data_type);
    }
    registry
}

/// A registry holding the given resources, with GEDCOM X data types
pub fn registry_with(resources: Vec<ResourceDefinition>) -> ResourceRegistry {
    let mut registry = empty_registry();
    for resource in resources {
        registry.register(resource).expect("fixture resources are unique");
    }
    registry
}

/// Builder for creating test resources with a single state
pub struct ResourceFixture {
    name: String,
    namespace: String,
    rel: String,
    transitions: Vec<StateTransition>,
    operations: Vec<OperationDefinition>,
}

impl ResourceFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: NS.to_string(),
            rel: name.to_lowercase(),
            transitions: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn rel(mut self, rel: &str) -> Self {
        self.rel = rel.to_string();
        self
    }

    pub fn transition(mut self, rel: &str, scope: &[&str]) -> Self {
        self.transitions
            .push(StateTransition::new(rel, format!("{rel} link")).scope(scope.iter().copied()));
        self
    }

    pub fn conditional(mut self, rel: &str, scope: &[&str]) -> Self {
        self.transitions.push(
            StateTransition::new(rel, format!("{rel} link"))
                .scope(scope.iter().copied())
                .conditional(),
        );
        self
    }

    pub fn operation(mut self, method: HttpMethod, codes: &[u16]) -> Self {
        let op = codes
            .iter()
            .fold(OperationDefinition::new(method), |op, &code| op.response(code, format!("code {code}")));
        self.operations.push(op);
        self
    }

    pub fn build(self) -> ResourceDefinition {
        let state = self
            .transitions
            .into_iter()
            .fold(StateDefinition::new(&self.name, &self.rel, "fixture state"), |s, t| {
                s.transition(t)
            });
        let mut builder = ResourceDefinition::builder(&self.name, &self.namespace)
            .element("Gedcomx")
            .state(state);
        for op in self.operations {
            builder = builder.operation(op);
        }
        builder.build()
    }
}

/// A data type outside the GEDCOM X catalog
pub fn custom_type(name: &str) -> DataType {
    DataType::namespaced(name, "urn:test:")
}
