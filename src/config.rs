//! Project configuration
//!
//! Loaded from `.rsdef.toml` in the project directory. Every section and key
//! is optional; a missing file means defaults.
//!
//! ```toml
//! [schema]
//! paths = ["contracts"]
//! builtin = true
//!
//! [validate]
//! closed_world = false
//!
//! [contract]
//! ignore_links = ["self"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::schema::SchemaSource;
use crate::catalog::GedcomxCatalog;
use crate::core::ports::{DefinitionSource, build_registry};
use crate::core::services::{ContractOptions, ResourceRegistry, ValidateOptions};
use crate::paths;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Where definitions come from
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Contract checking settings
    #[serde(default)]
    pub contract: ContractConfig,
}

/// Schema source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Schema files, directories or glob patterns, relative to the project
    #[serde(default = "default_schema_paths")]
    pub paths: Vec<String>,

    /// Include the built-in GEDCOM X catalog
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

fn default_schema_paths() -> Vec<String> {
    vec![paths::SCHEMA_DIR.to_string()]
}

const fn default_builtin() -> bool {
    true
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            paths: default_schema_paths(),
            builtin: default_builtin(),
        }
    }
}

/// Validation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Require transitions and sub-resources to resolve to registered resources
    #[serde(default)]
    pub closed_world: bool,
}

/// Contract checking settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Link relations accepted on any resource
    #[serde(default = "default_ignore_links")]
    pub ignore_links: Vec<String>,
}

fn default_ignore_links() -> Vec<String> {
    vec!["self".to_string()]
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            ignore_links: default_ignore_links(),
        }
    }
}

impl ProjectConfig {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse config text; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load config from a file, or use defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load `.rsdef.toml` from a project directory, or use defaults
    pub fn discover(base: &Path) -> Result<Self, ConfigError> {
        Self::load_or_default(&paths::config_file(base))
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the registry described by this config
    ///
    /// The built-in catalog (if enabled) is registered first, then schema
    /// documents in path order.
    pub fn build_registry(&self, base: &Path) -> anyhow::Result<ResourceRegistry> {
        let schemas = SchemaSource::new(base, self.schema.paths.clone());
        let mut sources: Vec<&dyn DefinitionSource> = Vec::new();
        if self.schema.builtin {
            sources.push(&GedcomxCatalog);
        }
        sources.push(&schemas);
        build_registry(&sources)
    }

    /// Validation options derived from this config
    #[must_use]
    pub const fn validate_options(&self) -> ValidateOptions {
        ValidateOptions {
            closed_world: self.validate.closed_world,
        }
    }

    /// Contract checking options derived from this config
    #[must_use]
    pub fn contract_options(&self) -> ContractOptions {
        ContractOptions {
            ignore_links: self.contract.ignore_links.clone(),
        }
    }
}
