//! Markdown documentation rendering
//!
//! Renders the registry as human-readable API documentation: one section per
//! resource with its parameters, state transitions and per-operation status
//! code tables.

use std::fmt::Write;

use crate::core::models::{OperationDefinition, ResourceDefinition, StatusCodeOutcome};

use super::ResourceRegistry;

/// Render every resource of the registry, in registration order
#[must_use]
pub fn render_markdown(registry: &ResourceRegistry) -> String {
    let mut out = String::new();
    out.push_str("# API Resources\n");

    for resource in registry.resources() {
        out.push('\n');
        render_resource(&mut out, resource);
    }

    out
}

fn render_resource(out: &mut String, resource: &ResourceDefinition) {
    let _ = writeln!(out, "## {}\n", resource.name);
    let _ = writeln!(out, "- Namespace: `{}`", resource.namespace);
    if let Some(project) = &resource.project_id {
        let _ = writeln!(out, "- Project: `{project}`");
    }
    let _ = writeln!(out, "- Element: `{}`", resource.element);
    if !resource.subresources.is_empty() {
        let _ = writeln!(out, "- Sub-resources: {}", resource.subresources.join(", "));
    }
    out.push('\n');

    if let Some(description) = &resource.description {
        let _ = writeln!(out, "{description}\n");
    }

    if !resource.parameters.is_empty() {
        out.push_str("### Parameters\n\n");
        out.push_str("| name | description |\n|---|---|\n");
        for param in &resource.parameters {
            let _ = writeln!(out, "| `{}` | {} |", param.name, escape(&param.description));
        }
        out.push('\n');
    }

    for state in &resource.states {
        let _ = writeln!(out, "### State: {} (`{}`)\n", state.name, state.rel);
        if !state.description.is_empty() {
            let _ = writeln!(out, "{}\n", state.description);
        }
        if state.transitions.is_empty() {
            continue;
        }
        out.push_str("| rel | description | scope | conditional | embedded |\n");
        out.push_str("|---|---|---|---|---|\n");
        for t in &state.transitions {
            let scope: Vec<&str> = t.scope.iter().map(|s| s.as_str()).collect();
            let _ = writeln!(
                out,
                "| `{}` | {} | {} | {} | {} |",
                t.rel,
                escape(&t.description),
                scope.join(", "),
                yes_no(t.conditional),
                yes_no(t.embedded)
            );
        }
        out.push('\n');
    }

    for operation in &resource.operations {
        render_operation(out, operation);
    }
}

fn render_operation(out: &mut String, operation: &OperationDefinition) {
    let _ = writeln!(out, "### {}\n", operation.method);
    if let Some(description) = &operation.description {
        let _ = writeln!(out, "{description}\n");
    }
    render_outcomes(out, "code", &operation.responses);
    if !operation.warnings.is_empty() {
        render_outcomes(out, "warning", &operation.warnings);
    }
}

fn render_outcomes(out: &mut String, header: &str, outcomes: &[StatusCodeOutcome]) {
    let _ = writeln!(out, "| {header} | condition |\n|---|---|");
    for outcome in outcomes {
        let _ = writeln!(out, "| {} | {} |", outcome.code, escape(&outcome.condition));
    }
    out.push('\n');
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
