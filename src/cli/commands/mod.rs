//! Command implementations

mod check;
mod docs;
mod init;
mod inspect;
mod validate;

use std::path::{Path, PathBuf};

use rsdef::config::ProjectConfig;
use rsdef::core::services::ResourceRegistry;
use rsdef::output::OutputMode;
use rsdef::paths;

pub use check::check;
pub use docs::{docs, export};
pub use init::init;
pub use inspect::{list, outcomes, resolve, show};
pub use validate::validate;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// Project directory; relative schema paths resolve against it
    pub base: PathBuf,
    /// Config file location
    pub config_path: PathBuf,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Resolve the project directory from an explicit config path or the cwd
    pub fn new(config: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<Self> {
        let (base, config_path) = match config {
            Some(path) => {
                let base = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
                (base, path)
            },
            None => {
                let cwd = std::env::current_dir()?;
                let path = paths::config_file(&cwd);
                (cwd, path)
            },
        };
        Ok(Self {
            base,
            config_path,
            mode,
        })
    }

    /// Load the project config (defaults if the file is absent)
    pub fn config(&self) -> anyhow::Result<ProjectConfig> {
        Ok(ProjectConfig::load_or_default(&self.config_path)?)
    }

    /// Load the config and build the registry it describes
    pub fn load(&self) -> anyhow::Result<(ProjectConfig, ResourceRegistry)> {
        let config = self.config()?;
        let registry = config.build_registry(&self.base)?;
        Ok((config, registry))
    }
}
