//! Contract checking of observed responses
//!
//! An [`Observation`] records what a live server actually returned for one
//! request: the status code, the link relations present and the data element
//! types present in the body. Each observation is checked against the
//! registry independently; a mismatch is a [`ContractViolation`], never an
//! error.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{DataTypeId, HttpMethod, ResourceDefinition, StatusCode};

use super::outcomes::OutcomeClass;
use super::{RegistryError, ResourceRegistry};

/// A recorded server response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Name of the resource that was requested
    pub resource: String,

    /// Request method
    pub method: HttpMethod,

    /// Response status code
    pub status: StatusCode,

    /// Link relations present in the response
    #[serde(default)]
    pub links: Vec<String>,

    /// Data element types present in the response body
    #[serde(default)]
    pub elements: Vec<DataTypeId>,
}

/// Settings for contract checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractOptions {
    /// Link relations accepted on any resource (e.g., "self")
    pub ignore_links: Vec<String>,
}

impl Default for ContractOptions {
    fn default() -> Self {
        Self {
            ignore_links: vec!["self".to_string()],
        }
    }
}

/// A mismatch between an observation and the declared contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractViolation {
    /// The observed resource is not declared
    #[error("resource {resource} is not declared")]
    UnknownResource {
        /// Observed resource name
        resource: String,
    },

    /// The observed method is not declared for the resource
    #[error("{method} is not declared for this resource")]
    UnknownOperation {
        /// Observed method
        method: HttpMethod,
    },

    /// The status code is neither a primary nor a warning outcome
    #[error("status {code} is not a declared outcome")]
    UndeclaredStatus {
        /// Observed code
        code: StatusCode,
    },

    /// A link relation is not declared as a transition
    #[error("link '{rel}' is not a declared transition")]
    UndeclaredLink {
        /// Observed relation
        rel: String,
    },

    /// A non-conditional transition applicable to the body is missing
    #[error("required link '{rel}' is missing")]
    MissingLink {
        /// Missing relation
        rel: String,
    },
}

/// Result of checking one observation
#[derive(Debug, Clone, Serialize)]
pub struct ContractReport {
    /// Observed resource name
    pub resource: String,
    /// Observed method
    pub method: HttpMethod,
    /// Observed status
    pub status: StatusCode,
    /// Whether the observation conforms
    pub passed: bool,
    /// The status was declared as a warning outcome
    pub warning: bool,
    /// Everything that did not conform
    pub violations: Vec<ContractViolation>,
}

/// Check one observation against the registry
#[must_use]
pub fn check_observation(
    registry: &ResourceRegistry,
    observation: &Observation,
    options: &ContractOptions,
) -> ContractReport {
    let mut violations = Vec::new();
    let mut warning = false;

    match registry.outcomes_for(&observation.resource, observation.method) {
        Ok(table) => match table.classify(observation.status) {
            OutcomeClass::Primary => {},
            OutcomeClass::Warning => warning = true,
            OutcomeClass::Undeclared => violations.push(ContractViolation::UndeclaredStatus {
                code: observation.status,
            }),
        },
        Err(RegistryError::UnknownOperation { method, .. }) => {
            violations.push(ContractViolation::UnknownOperation { method });
        },
        Err(_) => {
            violations.push(ContractViolation::UnknownResource {
                resource: observation.resource.clone(),
            });
        },
    }

    if let Some(resource) = registry.get(&observation.resource) {
        check_links(resource, observation, options, &mut violations);
    }

    let passed = violations.is_empty();
    if passed {
        debug!(
            "{} {} -> {}: conforms",
            observation.method, observation.resource, observation.status
        );
    } else {
        warn!(
            "{} {} -> {}: {} contract violation(s)",
            observation.method,
            observation.resource,
            observation.status,
            violations.len()
        );
    }

    ContractReport {
        resource: observation.resource.clone(),
        method: observation.method,
        status: observation.status,
        passed,
        warning,
        violations,
    }
}

/// Check a batch of observations; each is checked independently
#[must_use]
pub fn check_all(
    registry: &ResourceRegistry,
    observations: &[Observation],
    options: &ContractOptions,
) -> Vec<ContractReport> {
    observations.iter().map(|o| check_observation(registry, o, options)).collect()
}

fn check_links(
    resource: &ResourceDefinition,
    observation: &Observation,
    options: &ContractOptions,
    out: &mut Vec<ContractViolation>,
) {
    for rel in &observation.links {
        let declared = resource.find_transition(rel).is_some()
            || resource.has_state_rel(rel)
            || options.ignore_links.contains(rel);
        if !declared {
            out.push(ContractViolation::UndeclaredLink { rel: rel.clone() });
        }
    }

    if !observation.status.is_success() || observation.elements.is_empty() {
        return;
    }

    for transition in resource.transitions() {
        if transition.conditional || !transition.applies_to_any(&observation.elements) {
            continue;
        }
        if !observation.links.contains(&transition.rel) {
            out.push(ContractViolation::MissingLink {
                rel: transition.rel.clone(),
            });
        }
    }
}
