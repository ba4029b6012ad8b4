//! Validate loaded definitions

use log::info;
use rsdef::output::ValidationResult;

use super::Context;

/// Validate every definition; fails when any violation is found
pub fn validate(ctx: &Context, closed_world: bool) -> anyhow::Result<()> {
    let (config, registry) = ctx.load()?;

    let mut options = config.validate_options();
    options.closed_world |= closed_world;
    info!("validating with closed_world={}", options.closed_world);

    let violations = registry.validate_with(options);
    let result = ValidationResult::new(registry.len(), &violations);
    result.render(ctx.mode);

    if !result.valid {
        anyhow::bail!("{} violation(s) found", violations.len());
    }
    Ok(())
}
