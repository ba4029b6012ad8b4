//! Check recorded responses against the contract

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use rsdef::core::services::{Observation, check_all};
use rsdef::output::ContractCheckResult;

use super::Context;

/// Check every observation in a JSON file; fails when any does not conform
pub fn check(ctx: &Context, observations: &Path) -> anyhow::Result<()> {
    let (config, registry) = ctx.load()?;

    let content = fs::read_to_string(observations)
        .with_context(|| format!("cannot read {}", observations.display()))?;
    let observations: Vec<Observation> = serde_json::from_str(&content)
        .with_context(|| format!("invalid observations in {}", observations.display()))?;

    let reports = check_all(&registry, &observations, &config.contract_options());
    let result = ContractCheckResult::new(reports);
    result.render(ctx.mode);

    if !result.passed {
        anyhow::bail!("contract violated");
    }
    Ok(())
}
