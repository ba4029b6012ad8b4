//! Inspect registered resources

use rsdef::core::models::HttpMethod;
use rsdef::core::services::{OutcomeTable, ResolvedTransition};
use rsdef::output::{
    OutcomeTableResult, ResourceDetail, ResourceInfo, ResourceListResult, TransitionInfo,
};

use super::Context;

/// List registered resources
pub fn list(ctx: &Context) -> anyhow::Result<()> {
    let (_, registry) = ctx.load()?;
    ResourceListResult::new(&registry).render(ctx.mode);
    Ok(())
}

/// Show transitions and status codes of one resource
pub fn show(ctx: &Context, resource: &str) -> anyhow::Result<()> {
    let (_, registry) = ctx.load()?;
    let definition = registry.require(resource)?;

    let transition_list = definition
        .transitions()
        .map(|transition| {
            TransitionInfo::from(&ResolvedTransition {
                source: definition,
                transition,
                target: registry.by_rel(&transition.rel),
            })
        })
        .collect();

    let operations = definition
        .operations
        .iter()
        .map(|op| OutcomeTableResult::from(&OutcomeTable::new(definition, op)))
        .collect();

    ResourceDetail {
        info: ResourceInfo::from(definition),
        description: definition.description.clone(),
        transition_list,
        operations,
    }
    .render(ctx.mode);
    Ok(())
}

/// Show the status code table of one operation
pub fn outcomes(ctx: &Context, resource: &str, method: &str) -> anyhow::Result<()> {
    let method: HttpMethod = method.parse().map_err(anyhow::Error::msg)?;
    let (_, registry) = ctx.load()?;
    let table = registry.outcomes_for(resource, method)?;
    OutcomeTableResult::from(&table).render(ctx.mode);
    Ok(())
}

/// Resolve one transition
pub fn resolve(ctx: &Context, resource: &str, rel: &str) -> anyhow::Result<()> {
    let (_, registry) = ctx.load()?;
    let resolved = registry.resolve_transition(resource, rel)?;
    TransitionInfo::from(&resolved).render(ctx.mode);
    Ok(())
}
