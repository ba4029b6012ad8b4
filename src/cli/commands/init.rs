//! Initialize rsdef in a project directory

use std::fs;

use rsdef::adapters::schema::starter_schema;
use rsdef::config::ProjectConfig;
use rsdef::output::{OperationResult, OutputMode};
use rsdef::paths;

use super::Context;

/// Write `.rsdef.toml` and a starter schema
pub fn init(ctx: &Context, force: bool) -> anyhow::Result<()> {
    let schema_path = paths::starter_schema(&ctx.base);

    if ctx.config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to reinitialize.",
                ctx.config_path.display()
            ),
        }
        .render(ctx.mode);
        return Ok(());
    }

    let human = ctx.mode == OutputMode::Human;
    if human {
        println!("Initializing rsdef...\n");
    }

    fs::write(&ctx.config_path, ProjectConfig::default().to_toml()?)?;
    if human {
        println!("  Created {}", ctx.config_path.display());
    }

    if schema_path.exists() && !force {
        if human {
            println!("  Kept existing {}", schema_path.display());
        }
    } else {
        fs::create_dir_all(paths::schema_dir(&ctx.base))?;
        fs::write(&schema_path, starter_schema("urn:example:"))?;
        if human {
            println!("  Created {}", schema_path.display());
        }
    }

    OperationResult {
        success: true,
        message: "rsdef initialized!".to_string(),
    }
    .render(ctx.mode);

    if human {
        println!("\nNext steps:");
        println!("  rsdef validate");
        println!("  rsdef docs --out API.md");
    }
    Ok(())
}
