//! Port traits (interfaces) for external dependencies
//!
//! These traits define where contract definitions come from, keeping the
//! registry and its services free of filesystem concerns.
//!
//! Implementations live in the `adapters` and `catalog` modules.

mod definition_source;

pub use definition_source::{DefinitionSource, Definitions, build_registry};
