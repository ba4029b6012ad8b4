//! Resource Contract Registry
//!
//! Holds every [`ResourceDefinition`] of an API surface together with the
//! closed set of known data element types. The registry is filled once during
//! a build phase through [`ResourceRegistry::register`]; afterwards it is only
//! read, and can be shared across threads without locking.

use log::debug;
use thiserror::Error;

use crate::core::models::{
    DataType, DataTypeId, DataTypeRegistry, HttpMethod, ResourceDefinition, StateTransition,
};

use super::outcomes::{self, OutcomeTable};
use super::validator::{self, ValidateOptions, ValidationViolation};

/// Errors raised by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A resource with the same name and namespace is already registered
    #[error("duplicate resource: {name} is already registered in {namespace}")]
    DuplicateResource {
        /// Resource name
        name: String,
        /// Resource namespace
        namespace: String,
    },

    /// No resource with this name is registered
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// The resource does not declare a transition for this relation
    #[error("unknown relation: {resource} declares no transition '{rel}'")]
    UnknownRelation {
        /// Resource name
        resource: String,
        /// Requested link relation
        rel: String,
    },

    /// The resource does not declare this operation
    #[error("unknown operation: {resource} declares no {method} operation")]
    UnknownOperation {
        /// Resource name
        resource: String,
        /// Requested method
        method: HttpMethod,
    },
}

/// A transition resolved against the registry
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTransition<'a> {
    /// Resource declaring the transition
    pub source: &'a ResourceDefinition,
    /// The declared transition
    pub transition: &'a StateTransition,
    /// Registered resource whose state uses the transition's relation, if any
    pub target: Option<&'a ResourceDefinition>,
}

impl ResolvedTransition<'_> {
    /// Whether the link may be absent
    #[must_use]
    pub const fn conditional(&self) -> bool {
        self.transition.conditional
    }
}

/// Registry of all resource definitions of an API surface
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    resources: Vec<ResourceDefinition>,
    data_types: DataTypeRegistry,
}

impl ResourceRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resources: Vec::new(),
            data_types: DataTypeRegistry::new(),
        }
    }

    /// Create a registry that resolves scopes against the given types
    #[must_use]
    pub const fn with_data_types(data_types: DataTypeRegistry) -> Self {
        Self {
            resources: Vec::new(),
            data_types,
        }
    }

    /// Register a resource definition
    ///
    /// Fails without modifying the registry if a resource with the same
    /// name and namespace already exists.
    pub fn register(&mut self, definition: ResourceDefinition) -> Result<(), RegistryError> {
        if self.get_in(&definition.namespace, &definition.name).is_some() {
            return Err(RegistryError::DuplicateResource {
                name: definition.name,
                namespace: definition.namespace,
            });
        }
        debug!(
            "registered resource {} ({} states, {} operations)",
            definition.key(),
            definition.states.len(),
            definition.operations.len()
        );
        self.resources.push(definition);
        Ok(())
    }

    /// Add a known data element type; returns false if it was already known
    pub fn register_data_type(&mut self, data_type: DataType) -> bool {
        self.data_types.register(data_type)
    }

    /// Known data element types
    #[must_use]
    pub const fn data_types(&self) -> &DataTypeRegistry {
        &self.data_types
    }

    /// All resources in registration order
    #[must_use]
    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }

    /// Number of registered resources
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no resources are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Look up a resource by qualified key or by name
    ///
    /// A qualified key (namespace followed by name, e.g.
    /// `http://gedcomx.org/rs/v1/Search`) selects one resource. A bare name
    /// matches the first resource registered under it.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&ResourceDefinition> {
        self.resources
            .iter()
            .find(|r| has_key(r, reference))
            .or_else(|| self.resources.iter().find(|r| r.name == reference))
    }

    /// Look up a resource by namespace and name
    #[must_use]
    pub fn get_in(&self, namespace: &str, name: &str) -> Option<&ResourceDefinition> {
        self.resources.iter().find(|r| r.namespace == namespace && r.name == name)
    }

    /// Look up a resource by qualified key or name, failing if it is not registered
    pub fn require(&self, name: &str) -> Result<&ResourceDefinition, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::UnknownResource(name.to_string()))
    }

    /// Look up the resource whose state declares `rel` as its primary relation
    #[must_use]
    pub fn by_rel(&self, rel: &str) -> Option<&ResourceDefinition> {
        self.resources.iter().find(|r| r.has_state_rel(rel))
    }

    /// All resources representing the given data element type
    pub fn by_element<'a>(
        &'a self,
        element: &'a DataTypeId,
    ) -> impl Iterator<Item = &'a ResourceDefinition> + 'a {
        self.resources.iter().filter(move |r| &r.element == element)
    }

    /// Ordered transitions declared across the resource's states
    pub fn transitions_for(&self, resource: &str) -> Result<Vec<&StateTransition>, RegistryError> {
        Ok(self.require(resource)?.transitions().collect())
    }

    /// Resolve a declared transition to its target resource
    pub fn resolve_transition(
        &self,
        resource: &str,
        rel: &str,
    ) -> Result<ResolvedTransition<'_>, RegistryError> {
        let source = self.require(resource)?;
        let transition =
            source.find_transition(rel).ok_or_else(|| RegistryError::UnknownRelation {
                resource: resource.to_string(),
                rel: rel.to_string(),
            })?;
        let target = self.by_rel(rel);
        if target.is_none() {
            debug!("transition {resource} -> {rel} has no registered target");
        }
        Ok(ResolvedTransition {
            source,
            transition,
            target,
        })
    }

    /// Status code table of one operation
    pub fn outcomes_for(
        &self,
        resource: &str,
        method: HttpMethod,
    ) -> Result<OutcomeTable<'_>, RegistryError> {
        outcomes::outcomes_for(self, resource, method)
    }

    /// Check every invariant with default options
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationViolation> {
        self.validate_with(ValidateOptions::default())
    }

    /// Check every invariant, returning all violations found
    #[must_use]
    pub fn validate_with(&self, options: ValidateOptions) -> Vec<ValidationViolation> {
        validator::validate(self, options)
    }
}

fn has_key(resource: &ResourceDefinition, reference: &str) -> bool {
    reference.strip_prefix(resource.namespace.as_str()) == Some(resource.name.as_str())
}
