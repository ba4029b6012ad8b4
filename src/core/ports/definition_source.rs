//! Definition source port
//!
//! Defines the interface for loading resource definitions and data types.

use log::info;

use crate::core::models::{DataType, ResourceDefinition};
use crate::core::services::ResourceRegistry;

/// Everything a source contributes to a registry
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    /// Known data element types
    pub data_types: Vec<DataType>,
    /// Resource definitions in declaration order
    pub resources: Vec<ResourceDefinition>,
}

/// A source of contract definitions
///
/// Implementations handle reading definitions from various places
/// (schema documents, the built-in catalog, etc.)
pub trait DefinitionSource {
    /// Short label used in logs (e.g., "builtin:gedcomx", "contracts/api.toml")
    fn label(&self) -> String;

    /// Load all definitions
    fn load(&self) -> anyhow::Result<Definitions>;

    /// Load definitions and register them, failing on the first collision
    fn load_into(&self, registry: &mut ResourceRegistry) -> anyhow::Result<()> {
        let definitions = self.load()?;
        for data_type in definitions.data_types {
            registry.register_data_type(data_type);
        }
        let count = definitions.resources.len();
        for resource in definitions.resources {
            registry.register(resource)?;
        }
        info!("loaded {count} resource(s) from {}", self.label());
        Ok(())
    }
}

/// Build a registry from several sources, in order
pub fn build_registry(sources: &[&dyn DefinitionSource]) -> anyhow::Result<ResourceRegistry> {
    let mut registry = ResourceRegistry::new();
    for source in sources {
        source.load_into(&mut registry)?;
    }
    Ok(registry)
}
