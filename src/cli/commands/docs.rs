//! Documentation and schema export

use std::fs;
use std::path::Path;

use rsdef::adapters::schema::{SchemaFile, format_schema, format_schema_json};
use rsdef::core::services::render_markdown;
use rsdef::output::{OperationResult, OutputMode};

use super::Context;

/// Render Markdown documentation to stdout or a file
pub fn docs(ctx: &Context, out: Option<&Path>) -> anyhow::Result<()> {
    let (_, registry) = ctx.load()?;
    let markdown = render_markdown(&registry);

    match out {
        Some(path) => {
            fs::write(path, markdown)?;
            OperationResult {
                success: true,
                message: format!("Wrote {}", path.display()),
            }
            .render(ctx.mode);
        },
        None => print!("{markdown}"),
    }
    Ok(())
}

/// Print the loaded model as a schema document
pub fn export(ctx: &Context) -> anyhow::Result<()> {
    let (_, registry) = ctx.load()?;
    let file = SchemaFile::from_registry(&registry);
    let text = match ctx.mode {
        OutputMode::Human => format_schema(&file)?,
        OutputMode::Json => format_schema_json(&file)?,
    };
    println!("{text}");
    Ok(())
}
