//! Schema document adapter
//!
//! Implements `DefinitionSource` using declarative schema documents written
//! in TOML or JSON.
//!
//! - [`parser`] - Read and deserialize schema documents
//! - [`writer`] - Format models back into schema documents
//! - [`source`] - `DefinitionSource` implementation over files and directories

pub mod parser;
pub mod source;
pub mod writer;

pub use parser::{
    DataTypeEntry, OperationEntry, OutcomeEntry, ParameterEntry, ResourceEntry, SchemaError,
    SchemaFile, StateEntry, TransitionEntry, load_file, parse_json, parse_toml,
};
pub use source::SchemaSource;
pub use writer::{format_schema, format_schema_json, starter_schema};
