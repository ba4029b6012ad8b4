//! Data element types
//!
//! Transitions are scoped to the data element types they apply to (e.g. a
//! "conclusion" link applies to `Name`, `Gender` and `Fact`). Scope entries are
//! plain identifiers resolved against a closed [`DataTypeRegistry`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a data element type
///
/// Either a short name (`Person`) or a namespace-qualified name
/// (`http://gedcomx.org/v1/Person`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTypeId(String);

impl DataTypeId {
    /// Create a new identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataTypeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DataTypeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A known data element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataType {
    /// Short name (e.g., "Person")
    pub name: String,

    /// XML/JSON namespace the type belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl DataType {
    /// Create a type without a namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Create a type in a namespace
    pub fn namespaced(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Identifier used to reference this type from a scope
    #[must_use]
    pub fn id(&self) -> DataTypeId {
        DataTypeId::new(&self.name)
    }

    /// Namespace-qualified name, or the short name if there is no namespace
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Closed registry of known data element types
///
/// Types are keyed by qualified name, so the same short name may be known in
/// several namespaces. A short-name reference resolves to the first type
/// registered under that name.
#[derive(Debug, Clone, Default)]
pub struct DataTypeRegistry {
    types: BTreeMap<String, DataType>,
    by_name: BTreeMap<String, Vec<String>>,
}

impl DataTypeRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            types: BTreeMap::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// Register a type; returns false if the same qualified type was already known
    pub fn register(&mut self, data_type: DataType) -> bool {
        let qualified = data_type.qualified_name();
        if self.types.contains_key(&qualified) {
            return false;
        }
        self.by_name.entry(data_type.name.clone()).or_default().push(qualified.clone());
        self.types.insert(qualified, data_type);
        true
    }

    /// Resolve an identifier by qualified name, then by short name
    #[must_use]
    pub fn resolve(&self, id: &DataTypeId) -> Option<&DataType> {
        self.types.get(id.as_str()).or_else(|| {
            self.by_name
                .get(id.as_str())
                .and_then(|qualified| qualified.first())
                .and_then(|qualified| self.types.get(qualified))
        })
    }

    /// Every known type with the given short name, in registration order
    pub fn named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a DataType> + use<'a> {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|qualified| self.types.get(qualified))
    }

    /// Whether an identifier resolves to a known type
    #[must_use]
    pub fn contains(&self, id: &DataTypeId) -> bool {
        self.resolve(id).is_some()
    }

    /// Iterate over known types in qualified-name order
    pub fn iter(&self) -> impl Iterator<Item = &DataType> {
        self.types.values()
    }

    /// Number of known types
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<DataType> for DataTypeRegistry {
    fn from_iter<I: IntoIterator<Item = DataType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for data_type in iter {
            registry.register(data_type);
        }
        registry
    }
}
