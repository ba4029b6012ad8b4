//! Resource definitions
//!
//! A resource definition is the explicit form of one annotated resource
//! interface: its identity, the data element it represents, its states and
//! transitions, the operations it supports and its sub-resources.
//!
//! # Examples
//!
//! ```
//! use rsdef::core::models::{
//!     HttpMethod, OperationDefinition, ResourceDefinition, StateDefinition, StateTransition,
//! };
//!
//! let person = ResourceDefinition::builder("Person", "http://gedcomx.org/v1/")
//!     .element("Gedcomx")
//!     .state(
//!         StateDefinition::new("Person", "person", "A person.").transition(
//!             StateTransition::new("conclusion", "A conclusion.")
//!                 .scope(["Name", "Gender", "Fact"])
//!                 .conditional(),
//!         ),
//!     )
//!     .operation(
//!         OperationDefinition::new(HttpMethod::Get)
//!             .response(200, "Upon a successful read.")
//!             .response(404, "If the requested person is not found."),
//!     )
//!     .build();
//!
//! assert_eq!(person.transitions().count(), 1);
//! assert!(person.operation(HttpMethod::Get).is_some());
//! ```

use serde::{Deserialize, Serialize};

use super::{DataTypeId, HttpMethod, OperationDefinition, StateDefinition, StateTransition};

/// Unique key of a resource: namespace plus name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    /// Owning namespace
    pub namespace: String,
    /// Resource name
    pub name: String,
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.namespace, self.name)
    }
}

/// A reserved request parameter of a resource (e.g., a search query parameter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Parameter name
    pub name: String,
    /// What the parameter means
    pub description: String,
}

impl ParameterDefinition {
    /// Create a parameter
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A named, addressable resource of the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Resource name (e.g., "Person")
    pub name: String,

    /// Owning namespace
    pub namespace: String,

    /// Owning project id (e.g., "gedcomx-rs")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Data element type the resource represents
    pub element: DataTypeId,

    /// Human description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// States in declaration order
    pub states: Vec<StateDefinition>,

    /// Supported operations in declaration order
    pub operations: Vec<OperationDefinition>,

    /// Names of sub-resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subresources: Vec<String>,

    /// Reserved request parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDefinition>,
}

impl ResourceDefinition {
    /// Start building a resource
    pub fn builder(name: impl Into<String>, namespace: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(name, namespace)
    }

    /// The registry key of this resource
    #[must_use]
    pub fn key(&self) -> ResourceKey {
        ResourceKey {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }

    /// All transitions in state order, then declaration order
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.states.iter().flat_map(|s| s.transitions.iter())
    }

    /// Find the transition declared for a link relation
    #[must_use]
    pub fn find_transition(&self, rel: &str) -> Option<&StateTransition> {
        self.transitions().find(|t| t.rel == rel)
    }

    /// Find the operation declared for a method
    #[must_use]
    pub fn operation(&self, method: HttpMethod) -> Option<&OperationDefinition> {
        self.operations.iter().find(|op| op.method == method)
    }

    /// Find a state by name
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Whether any state of this resource uses `rel` as its primary relation
    #[must_use]
    pub fn has_state_rel(&self, rel: &str) -> bool {
        self.states.iter().any(|s| s.rel == rel)
    }
}

/// Builder for [`ResourceDefinition`]
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    resource: ResourceDefinition,
}

impl ResourceBuilder {
    /// Create a builder; the element type defaults to the resource name
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            resource: ResourceDefinition {
                element: DataTypeId::new(&name),
                name,
                namespace: namespace.into(),
                project_id: None,
                description: None,
                states: Vec::new(),
                operations: Vec::new(),
                subresources: Vec::new(),
                parameters: Vec::new(),
            },
        }
    }

    /// Set the owning project id
    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.resource.project_id = Some(project_id.into());
        self
    }

    /// Set the data element type
    #[must_use]
    pub fn element(mut self, element: impl Into<DataTypeId>) -> Self {
        self.resource.element = element.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.resource.description = Some(description.into());
        self
    }

    /// Append a state
    #[must_use]
    pub fn state(mut self, state: StateDefinition) -> Self {
        self.resource.states.push(state);
        self
    }

    /// Append an operation
    #[must_use]
    pub fn operation(mut self, operation: OperationDefinition) -> Self {
        self.resource.operations.push(operation);
        self
    }

    /// Append a sub-resource reference
    #[must_use]
    pub fn subresource(mut self, name: impl Into<String>) -> Self {
        self.resource.subresources.push(name.into());
        self
    }

    /// Append a reserved request parameter
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.resource.parameters.push(ParameterDefinition::new(name, description));
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> ResourceDefinition {
        self.resource
    }
}
