//! Schema document parser
//!
//! Handles reading and deserializing schema documents. The same field names
//! are used for TOML and JSON; list fields accept both the singular TOML
//! table name (`[[resource.state]]`) and the plural JSON key (`"states"`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{
    DataType, HttpMethod, OperationDefinition, ParameterDefinition, ResourceDefinition,
    StateDefinition, StateTransition, StatusCodeOutcome,
};
use crate::core::ports::Definitions;
use crate::core::services::ResourceRegistry;

/// Errors that can occur while reading schema documents
#[derive(Debug, Error)]
pub enum SchemaError {
    /// File could not be read or written
    #[error("{path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// TOML document could not be parsed
    #[error("{path}: {source}")]
    Toml {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// JSON document could not be parsed
    #[error("{path}: {source}")]
    Json {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Document could not be serialized
    #[error("cannot format schema: {0}")]
    Format(String),

    /// Error walking a schema directory
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Invalid glob pattern in a schema path
    #[error("invalid schema path pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// File extension is neither .toml nor .json
    #[error("unsupported schema format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// A schema document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Data element types declared by this document
    #[serde(default, rename = "data_type", alias = "data_types", skip_serializing_if = "Vec::is_empty")]
    pub data_types: Vec<DataTypeEntry>,

    /// Resources declared by this document
    #[serde(default, rename = "resource", alias = "resources")]
    pub resources: Vec<ResourceEntry>,
}

/// A data element type entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTypeEntry {
    /// Short name
    pub name: String,

    /// Namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A resource entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Resource name
    pub name: String,

    /// Owning namespace
    pub namespace: String,

    /// Owning project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Data element type (defaults to the resource name)
    #[serde(default, alias = "data_type", skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// Human description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sub-resource names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subresources: Vec<String>,

    /// Reserved request parameters
    #[serde(default, rename = "parameter", alias = "parameters", skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterEntry>,

    /// States
    #[serde(default, rename = "state", alias = "states")]
    pub states: Vec<StateEntry>,

    /// Operations
    #[serde(default, rename = "operation", alias = "operations")]
    pub operations: Vec<OperationEntry>,
}

/// A request parameter entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterEntry {
    /// Parameter name
    pub name: String,

    /// Parameter meaning
    #[serde(default)]
    pub description: String,
}

/// A state entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateEntry {
    /// State name
    pub name: String,

    /// Primary link relation
    pub rel: String,

    /// Human description
    #[serde(default)]
    pub description: String,

    /// Outbound transitions
    #[serde(default, rename = "transition", alias = "transitions", skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionEntry>,
}

/// A transition entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionEntry {
    /// Target link relation
    pub rel: String,

    /// Human description
    #[serde(default)]
    pub description: String,

    /// Applicable data element types
    #[serde(default)]
    pub scope: Vec<String>,

    /// Link may be absent
    #[serde(default)]
    pub conditional: bool,

    /// Linked resource is embedded
    #[serde(default)]
    pub embedded: bool,
}

/// An operation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEntry {
    /// HTTP method (case-insensitive)
    pub method: HttpMethod,

    /// Human description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary outcomes
    #[serde(default)]
    pub responses: Vec<OutcomeEntry>,

    /// Warning outcomes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<OutcomeEntry>,
}

/// A status code outcome entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeEntry {
    /// Numeric status code (range is checked by validation)
    pub code: u16,

    /// Condition text
    #[serde(default)]
    pub condition: String,
}

impl SchemaFile {
    /// Build a document describing everything in a registry
    #[must_use]
    pub fn from_registry(registry: &ResourceRegistry) -> Self {
        Self {
            data_types: registry
                .data_types()
                .iter()
                .map(|t| DataTypeEntry {
                    name: t.name.clone(),
                    namespace: t.namespace.clone(),
                })
                .collect(),
            resources: registry.resources().iter().map(ResourceEntry::from).collect(),
        }
    }

    /// Convert into contract models
    #[must_use]
    pub fn into_definitions(self) -> Definitions {
        Definitions {
            data_types: self
                .data_types
                .into_iter()
                .map(|t| DataType {
                    name: t.name,
                    namespace: t.namespace,
                })
                .collect(),
            resources: self.resources.into_iter().map(ResourceDefinition::from).collect(),
        }
    }
}

impl From<ResourceEntry> for ResourceDefinition {
    fn from(entry: ResourceEntry) -> Self {
        let element = entry.element.unwrap_or_else(|| entry.name.clone());
        Self {
            name: entry.name,
            namespace: entry.namespace,
            project_id: entry.project_id,
            element: element.into(),
            description: entry.description,
            states: entry.states.into_iter().map(StateDefinition::from).collect(),
            operations: entry.operations.into_iter().map(OperationDefinition::from).collect(),
            subresources: entry.subresources,
            parameters: entry
                .parameters
                .into_iter()
                .map(|p| ParameterDefinition::new(p.name, p.description))
                .collect(),
        }
    }
}

impl From<StateEntry> for StateDefinition {
    fn from(entry: StateEntry) -> Self {
        Self {
            name: entry.name,
            rel: entry.rel,
            description: entry.description,
            transitions: entry
                .transitions
                .into_iter()
                .map(|t| StateTransition {
                    rel: t.rel,
                    description: t.description,
                    scope: t.scope.into_iter().map(Into::into).collect(),
                    conditional: t.conditional,
                    embedded: t.embedded,
                })
                .collect(),
        }
    }
}

impl From<OperationEntry> for OperationDefinition {
    fn from(entry: OperationEntry) -> Self {
        let outcome = |o: OutcomeEntry| StatusCodeOutcome::new(o.code, o.condition);
        Self {
            method: entry.method,
            description: entry.description,
            responses: entry.responses.into_iter().map(outcome).collect(),
            warnings: entry.warnings.into_iter().map(outcome).collect(),
        }
    }
}

impl From<&ResourceDefinition> for ResourceEntry {
    fn from(resource: &ResourceDefinition) -> Self {
        Self {
            name: resource.name.clone(),
            namespace: resource.namespace.clone(),
            project_id: resource.project_id.clone(),
            element: Some(resource.element.to_string()),
            description: resource.description.clone(),
            subresources: resource.subresources.clone(),
            parameters: resource
                .parameters
                .iter()
                .map(|p| ParameterEntry {
                    name: p.name.clone(),
                    description: p.description.clone(),
                })
                .collect(),
            states: resource
                .states
                .iter()
                .map(|s| StateEntry {
                    name: s.name.clone(),
                    rel: s.rel.clone(),
                    description: s.description.clone(),
                    transitions: s
                        .transitions
                        .iter()
                        .map(|t| TransitionEntry {
                            rel: t.rel.clone(),
                            description: t.description.clone(),
                            scope: t.scope.iter().map(ToString::to_string).collect(),
                            conditional: t.conditional,
                            embedded: t.embedded,
                        })
                        .collect(),
                })
                .collect(),
            operations: resource
                .operations
                .iter()
                .map(|op| {
                    let outcome = |o: &StatusCodeOutcome| OutcomeEntry {
                        code: o.code.as_u16(),
                        condition: o.condition.clone(),
                    };
                    OperationEntry {
                        method: op.method,
                        description: op.description.clone(),
                        responses: op.responses.iter().map(outcome).collect(),
                        warnings: op.warnings.iter().map(outcome).collect(),
                    }
                })
                .collect(),
        }
    }
}

/// Parse a TOML schema document
///
/// `origin` is only used in error messages.
pub fn parse_toml(content: &str, origin: &Path) -> Result<SchemaFile, SchemaError> {
    toml::from_str(content).map_err(|source| SchemaError::Toml {
        path: origin.to_path_buf(),
        source,
    })
}

/// Parse a JSON schema document
///
/// `origin` is only used in error messages.
pub fn parse_json(content: &str, origin: &Path) -> Result<SchemaFile, SchemaError> {
    serde_json::from_str(content).map_err(|source| SchemaError::Json {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load a schema document, choosing the format from the file extension
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or cannot be parsed.
pub fn load_file(path: &Path) -> Result<SchemaFile, SchemaError> {
    let format = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    let content = || {
        fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    match format.as_deref() {
        Some("toml") => parse_toml(&content()?, path),
        Some("json") => parse_json(&content()?, path),
        _ => Err(SchemaError::UnsupportedFormat(path.to_path_buf())),
    }
}
