//! Invariant validation
//!
//! Walks the whole registry and reports every violation it finds instead of
//! stopping at the first, so that tooling can print a complete diagnostic list
//! in one pass.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::core::models::{HttpMethod, ResourceDefinition, StatusCode};

use super::ResourceRegistry;

/// Relation tokens: lowercase registered-style names or absolute URIs
static RELATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z][a-z0-9.\-]*|[A-Za-z][A-Za-z0-9+.\-]*:[^\s]+)$")
        .expect("relation pattern is a valid regex")
});

/// Validation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Require every transition and sub-resource to resolve to a registered resource
    pub closed_world: bool,
}

/// A single invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationViolation {
    /// A declared status code lies outside [100, 599]
    #[error("{resource} {method}: status code {code} is out of range")]
    StatusOutOfRange {
        /// Resource name
        resource: String,
        /// Operation method
        method: HttpMethod,
        /// Offending code
        code: StatusCode,
    },

    /// A transition applies to no data element type
    #[error("{resource}/{state}: transition '{rel}' has an empty scope")]
    EmptyScope {
        /// Resource name
        resource: String,
        /// State declaring the transition
        state: String,
        /// Transition relation
        rel: String,
    },

    /// A relation is declared by more than one transition of a resource
    #[error("{resource}: relation '{rel}' is declared more than once")]
    DuplicateRelation {
        /// Resource name
        resource: String,
        /// Duplicated relation
        rel: String,
    },

    /// A scope entry names no known data element type
    #[error("{resource}: transition '{rel}' is scoped to unknown type '{data_type}'")]
    UnresolvedScopeType {
        /// Resource name
        resource: String,
        /// Transition relation
        rel: String,
        /// Unknown type identifier
        data_type: String,
    },

    /// Two states of a resource share a name
    #[error("{resource}: state '{state}' is declared more than once")]
    DuplicateState {
        /// Resource name
        resource: String,
        /// Duplicated state name
        state: String,
    },

    /// Two operations of a resource share a method
    #[error("{resource}: {method} is declared more than once")]
    DuplicateOperation {
        /// Resource name
        resource: String,
        /// Duplicated method
        method: HttpMethod,
    },

    /// A relation is neither a lowercase token nor an absolute URI
    #[error("{resource}: relation '{rel}' is malformed")]
    MalformedRelation {
        /// Resource name
        resource: String,
        /// Malformed relation
        rel: String,
    },

    /// Closed world: a transition points at no registered resource
    #[error("{resource}: transition '{rel}' targets no registered resource")]
    UnresolvedTarget {
        /// Resource name
        resource: String,
        /// Transition relation
        rel: String,
    },

    /// Closed world: a sub-resource reference names no registered resource
    #[error("{resource}: sub-resource '{subresource}' is not registered")]
    UnresolvedSubresource {
        /// Resource name
        resource: String,
        /// Missing sub-resource name
        subresource: String,
    },
}

impl ValidationViolation {
    /// Name of the resource the violation was found in
    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            Self::StatusOutOfRange { resource, .. }
            | Self::EmptyScope { resource, .. }
            | Self::DuplicateRelation { resource, .. }
            | Self::UnresolvedScopeType { resource, .. }
            | Self::DuplicateState { resource, .. }
            | Self::DuplicateOperation { resource, .. }
            | Self::MalformedRelation { resource, .. }
            | Self::UnresolvedTarget { resource, .. }
            | Self::UnresolvedSubresource { resource, .. } => resource,
        }
    }

    /// Stable machine-readable kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StatusOutOfRange { .. } => "status_out_of_range",
            Self::EmptyScope { .. } => "empty_scope",
            Self::DuplicateRelation { .. } => "duplicate_relation",
            Self::UnresolvedScopeType { .. } => "unresolved_scope_type",
            Self::DuplicateState { .. } => "duplicate_state",
            Self::DuplicateOperation { .. } => "duplicate_operation",
            Self::MalformedRelation { .. } => "malformed_relation",
            Self::UnresolvedTarget { .. } => "unresolved_target",
            Self::UnresolvedSubresource { .. } => "unresolved_subresource",
        }
    }
}

/// Check every invariant across the registry
///
/// Violations are reported per resource in registration order.
#[must_use]
pub fn validate(registry: &ResourceRegistry, options: ValidateOptions) -> Vec<ValidationViolation> {
    let mut violations = Vec::new();

    for resource in registry.resources() {
        check_states(resource, &mut violations);
        check_transitions(registry, resource, options, &mut violations);
        check_operations(resource, &mut violations);
        if options.closed_world {
            check_subresources(registry, resource, &mut violations);
        }
    }

    debug!(
        "validated {} resource(s): {} violation(s)",
        registry.len(),
        violations.len()
    );
    violations
}

fn check_states(resource: &ResourceDefinition, out: &mut Vec<ValidationViolation>) {
    let mut seen = HashSet::new();
    for state in &resource.states {
        if !seen.insert(state.name.as_str()) {
            out.push(ValidationViolation::DuplicateState {
                resource: resource.name.clone(),
                state: state.name.clone(),
            });
        }
        if !RELATION_PATTERN.is_match(&state.rel) {
            out.push(ValidationViolation::MalformedRelation {
                resource: resource.name.clone(),
                rel: state.rel.clone(),
            });
        }
    }
}

fn check_transitions(
    registry: &ResourceRegistry,
    resource: &ResourceDefinition,
    options: ValidateOptions,
    out: &mut Vec<ValidationViolation>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for state in &resource.states {
        for transition in &state.transitions {
            let rel = transition.rel.as_str();

            if !seen.insert(rel) && reported.insert(rel) {
                out.push(ValidationViolation::DuplicateRelation {
                    resource: resource.name.clone(),
                    rel: rel.to_string(),
                });
            }

            if !RELATION_PATTERN.is_match(rel) {
                out.push(ValidationViolation::MalformedRelation {
                    resource: resource.name.clone(),
                    rel: rel.to_string(),
                });
            }

            if transition.scope.is_empty() {
                out.push(ValidationViolation::EmptyScope {
                    resource: resource.name.clone(),
                    state: state.name.clone(),
                    rel: rel.to_string(),
                });
            }

            for data_type in &transition.scope {
                if !registry.data_types().contains(data_type) {
                    out.push(ValidationViolation::UnresolvedScopeType {
                        resource: resource.name.clone(),
                        rel: rel.to_string(),
                        data_type: data_type.to_string(),
                    });
                }
            }

            if options.closed_world && registry.by_rel(rel).is_none() {
                out.push(ValidationViolation::UnresolvedTarget {
                    resource: resource.name.clone(),
                    rel: rel.to_string(),
                });
            }
        }
    }
}

fn check_operations(resource: &ResourceDefinition, out: &mut Vec<ValidationViolation>) {
    let mut seen = HashSet::new();
    for operation in &resource.operations {
        if !seen.insert(operation.method) {
            out.push(ValidationViolation::DuplicateOperation {
                resource: resource.name.clone(),
                method: operation.method,
            });
        }
        for outcome in operation.outcomes() {
            if !outcome.code.is_valid() {
                out.push(ValidationViolation::StatusOutOfRange {
                    resource: resource.name.clone(),
                    method: operation.method,
                    code: outcome.code,
                });
            }
        }
    }
}

fn check_subresources(
    registry: &ResourceRegistry,
    resource: &ResourceDefinition,
    out: &mut Vec<ValidationViolation>,
) {
    for name in &resource.subresources {
        if registry.get(name).is_none() {
            out.push(ValidationViolation::UnresolvedSubresource {
                resource: resource.name.clone(),
                subresource: name.clone(),
            });
        }
    }
}
