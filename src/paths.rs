//! Centralized path definitions for rsdef
//!
//! ## Project Layout
//!
//! ```text
//! project/
//! ├── .rsdef.toml                # Project configuration
//! └── contracts/                 # Schema documents (default schema path)
//!     └── api.toml
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".rsdef.toml";

/// Default directory holding schema documents
pub const SCHEMA_DIR: &str = "contracts";

/// Starter schema written by `rsdef init`
const STARTER_SCHEMA: &str = "api.toml";

/// Path to the project configuration under `base`
#[must_use]
pub fn config_file(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Path to the default schema directory under `base`
#[must_use]
pub fn schema_dir(base: &Path) -> PathBuf {
    base.join(SCHEMA_DIR)
}

/// Path to the starter schema under `base`
#[must_use]
pub fn starter_schema(base: &Path) -> PathBuf {
    schema_dir(base).join(STARTER_SCHEMA)
}
