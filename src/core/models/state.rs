//! Resource states and their hypermedia transitions

use serde::{Deserialize, Serialize};

use super::DataTypeId;

/// A named state of a resource
///
/// A state carries the primary link relation used to reach the resource and
/// the ordered transitions (links) available from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// State name (e.g., "Person")
    pub name: String,

    /// Primary link relation of this state (e.g., "person")
    pub rel: String,

    /// Human description
    pub description: String,

    /// Outbound transitions in declaration order
    pub transitions: Vec<StateTransition>,
}

impl StateDefinition {
    /// Create a state with no transitions
    pub fn new(
        name: impl Into<String>,
        rel: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rel: rel.into(),
            description: description.into(),
            transitions: Vec::new(),
        }
    }

    /// Append a transition
    #[must_use]
    pub fn transition(mut self, transition: StateTransition) -> Self {
        self.transitions.push(transition);
        self
    }
}

/// A hypermedia link from a state to a related resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Link relation of the target (e.g., "conclusion")
    pub rel: String,

    /// Human description
    pub description: String,

    /// Data element types this transition applies to
    pub scope: Vec<DataTypeId>,

    /// The link may be absent depending on server policy
    pub conditional: bool,

    /// The linked resource is a component that must be resolved and embedded
    pub embedded: bool,
}

impl StateTransition {
    /// Create an unconditional, non-embedded transition with an empty scope
    pub fn new(rel: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            description: description.into(),
            scope: Vec::new(),
            conditional: false,
            embedded: false,
        }
    }

    /// Set the scope
    #[must_use]
    pub fn scope<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<DataTypeId>,
    {
        self.scope = types.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the transition as conditional
    #[must_use]
    pub const fn conditional(mut self) -> Self {
        self.conditional = true;
        self
    }

    /// Mark the transition as an embedded link
    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Whether the scope includes any of the given types
    #[must_use]
    pub fn applies_to_any(&self, types: &[DataTypeId]) -> bool {
        self.scope.iter().any(|t| types.contains(t))
    }
}
