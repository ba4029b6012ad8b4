//! Schema-backed definition source
//!
//! Implements the `DefinitionSource` port over schema files. Each configured
//! path may be a file, a directory (walked recursively for `*.toml` and
//! `*.json`), or a glob pattern.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::core::ports::{DefinitionSource, Definitions};

use super::parser::{SchemaError, load_file};

/// Definition source backed by schema files
#[derive(Debug, Clone)]
pub struct SchemaSource {
    /// Files, directories or glob patterns, relative to `base_dir`
    paths: Vec<String>,

    /// Base directory for relative paths
    base_dir: PathBuf,
}

impl SchemaSource {
    /// Create a source for the given paths relative to `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, paths: Vec<String>) -> Self {
        Self {
            paths,
            base_dir: base_dir.into(),
        }
    }

    /// Create a source reading a single file or directory
    #[must_use]
    pub fn single(path: impl AsRef<Path>) -> Self {
        Self::new(".", vec![path.as_ref().to_string_lossy().to_string()])
    }

    /// Resolve every schema file, in deterministic order
    ///
    /// Missing plain paths are skipped; an unmatched glob yields nothing. A
    /// file reached through several overlapping paths is listed once, at its
    /// first position.
    pub fn discover(&self) -> Result<Vec<PathBuf>, SchemaError> {
        let mut files = Vec::new();

        for raw in &self.paths {
            let joined = self.base_dir.join(raw);
            if is_glob(raw) {
                let pattern = joined.to_string_lossy().replace('\\', "/");
                for entry in glob::glob(&pattern)?.flatten() {
                    collect(&entry, &mut files)?;
                }
            } else if joined.exists() {
                collect(&joined, &mut files)?;
            } else {
                debug!("schema path {} does not exist, skipping", joined.display());
            }
        }

        let mut seen = HashSet::new();
        files.retain(|path| {
            let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            if seen.insert(canonical) {
                true
            } else {
                debug!("schema {} already discovered, skipping", path.display());
                false
            }
        });
        Ok(files)
    }
}

impl DefinitionSource for SchemaSource {
    fn label(&self) -> String {
        format!("schema:{}", self.paths.join(","))
    }

    fn load(&self) -> anyhow::Result<Definitions> {
        let mut definitions = Definitions::default();
        for path in self.discover()? {
            debug!("loading schema {}", path.display());
            let loaded = load_file(&path)?.into_definitions();
            definitions.data_types.extend(loaded.data_types);
            definitions.resources.extend(loaded.resources);
        }
        Ok(definitions)
    }
}

fn is_glob(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}

fn is_schema_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml") || e.eq_ignore_ascii_case("json"))
}

/// Add a file, or every schema file under a directory
fn collect(path: &Path, files: &mut Vec<PathBuf>) -> Result<(), SchemaError> {
    if path.is_file() {
        files.push(path.to_path_buf());
        return Ok(());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_schema_file(entry.path()) {
            found.push(entry.into_path());
        }
    }
    files.extend(found);
    Ok(())
}
