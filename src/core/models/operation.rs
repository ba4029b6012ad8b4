//! Operation model
//!
//! An operation is an HTTP method supported by a resource, together with the
//! status codes it may return. Warning outcomes are kept apart from the
//! primary outcomes: they signal partial success alongside the primary result.

use serde::{Deserialize, Serialize};

use super::{HttpMethod, StatusCodeOutcome};

/// An HTTP method supported by a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDefinition {
    /// HTTP verb
    pub method: HttpMethod,

    /// What the operation does (e.g., "Read a person.")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary outcomes in declaration order
    pub responses: Vec<StatusCodeOutcome>,

    /// Warning outcomes in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<StatusCodeOutcome>,
}

impl OperationDefinition {
    /// Create an operation with no outcomes
    #[must_use]
    pub const fn new(method: HttpMethod) -> Self {
        Self {
            method,
            description: None,
            responses: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a primary outcome
    #[must_use]
    pub fn response(mut self, code: u16, condition: impl Into<String>) -> Self {
        self.responses.push(StatusCodeOutcome::new(code, condition));
        self
    }

    /// Append a warning outcome
    #[must_use]
    pub fn warning(mut self, code: u16, condition: impl Into<String>) -> Self {
        self.warnings.push(StatusCodeOutcome::new(code, condition));
        self
    }

    /// All outcomes, primary first
    pub fn outcomes(&self) -> impl Iterator<Item = &StatusCodeOutcome> {
        self.responses.iter().chain(&self.warnings)
    }
}
