//! Contract services
//!
//! Pure logic operating on the contract model. Nothing here performs I/O.
//!
//! - [`registry`] - Resource Contract Registry (registration, lookups, resolution)
//! - [`validator`] - Aggregated invariant validation
//! - [`outcomes`] - Status code tables per operation
//! - [`contract`] - Checking observed responses against the declared contract
//! - [`docs`] - Markdown documentation rendering

pub mod contract;
pub mod docs;
pub mod outcomes;
pub mod registry;
pub mod validator;

pub use contract::{
    ContractOptions, ContractReport, ContractViolation, Observation, check_all, check_observation,
};
pub use docs::render_markdown;
pub use outcomes::{OutcomeClass, OutcomeTable};
pub use registry::{RegistryError, ResolvedTransition, ResourceRegistry};
pub use validator::{ValidateOptions, ValidationViolation, validate};
