//! Status code tables
//!
//! Per operation, the declared (code, condition) pairs partitioned into
//! primary outcomes and warning outcomes. Tools use the table to decide
//! whether an observed status code is one the contract allows.

use serde::Serialize;

use crate::core::models::{
    HttpMethod, OperationDefinition, ResourceDefinition, StatusCode, StatusCodeOutcome,
};

use super::{RegistryError, ResourceRegistry};

/// How an observed status code relates to an operation's declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeClass {
    /// Declared as a primary outcome
    Primary,
    /// Declared as a warning outcome
    Warning,
    /// Not declared at all
    Undeclared,
}

/// Declared outcomes of one operation
#[derive(Debug, Clone, Copy)]
pub struct OutcomeTable<'a> {
    resource: &'a str,
    method: HttpMethod,
    primary: &'a [StatusCodeOutcome],
    warnings: &'a [StatusCodeOutcome],
}

impl<'a> OutcomeTable<'a> {
    /// Table of one declared operation of a resource
    #[must_use]
    pub fn new(resource: &'a ResourceDefinition, operation: &'a OperationDefinition) -> Self {
        Self {
            resource: &resource.name,
            method: operation.method,
            primary: &operation.responses,
            warnings: &operation.warnings,
        }
    }

    /// Resource the operation belongs to
    #[must_use]
    pub const fn resource(&self) -> &'a str {
        self.resource
    }

    /// Operation method
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Primary outcomes in declaration order
    #[must_use]
    pub const fn primary(&self) -> &'a [StatusCodeOutcome] {
        self.primary
    }

    /// Warning outcomes in declaration order
    #[must_use]
    pub const fn warnings(&self) -> &'a [StatusCodeOutcome] {
        self.warnings
    }

    /// All outcomes, primary first
    pub fn all(&self) -> impl Iterator<Item = &'a StatusCodeOutcome> + use<'a> {
        self.primary.iter().chain(self.warnings)
    }

    /// Classify an observed status code
    #[must_use]
    pub fn classify(&self, code: impl Into<StatusCode>) -> OutcomeClass {
        let code = code.into();
        if self.primary.iter().any(|o| o.code == code) {
            OutcomeClass::Primary
        } else if self.warnings.iter().any(|o| o.code == code) {
            OutcomeClass::Warning
        } else {
            OutcomeClass::Undeclared
        }
    }

    /// Whether the code is declared as either a primary or a warning outcome
    #[must_use]
    pub fn declares(&self, code: impl Into<StatusCode>) -> bool {
        self.classify(code) != OutcomeClass::Undeclared
    }

    /// Every declared condition for a code (a code may be declared more than once)
    pub fn conditions_for(&self, code: impl Into<StatusCode>) -> Vec<&'a str> {
        let code = code.into();
        self.all().filter(|o| o.code == code).map(|o| o.condition.as_str()).collect()
    }
}

/// Look up the outcome table of `resource`'s `method` operation
pub fn outcomes_for<'a>(
    registry: &'a ResourceRegistry,
    resource: &str,
    method: HttpMethod,
) -> Result<OutcomeTable<'a>, RegistryError> {
    let definition = registry.require(resource)?;
    let operation =
        definition.operation(method).ok_or_else(|| RegistryError::UnknownOperation {
            resource: resource.to_string(),
            method,
        })?;

    Ok(OutcomeTable::new(definition, operation))
}
