//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ResourceDefinition, StatusCodeOutcome};
use crate::core::services::{
    ContractReport, OutcomeTable, ResolvedTransition, ResourceRegistry, ValidationViolation,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    /// Whether no violations were found
    pub valid: bool,
    /// Number of resources validated
    pub resources: usize,
    /// Every violation found
    pub violations: Vec<ViolationInfo>,
}

/// A violation prepared for display
#[derive(Debug, Serialize)]
pub struct ViolationInfo {
    /// Machine-readable kind (e.g., "empty_scope")
    pub kind: String,
    /// Resource the violation was found in
    pub resource: String,
    /// Human-readable message
    pub message: String,
}

impl From<&ValidationViolation> for ViolationInfo {
    fn from(v: &ValidationViolation) -> Self {
        Self {
            kind: v.kind().to_string(),
            resource: v.resource().to_string(),
            message: v.to_string(),
        }
    }
}

impl ValidationResult {
    /// Build a result from validation output
    #[must_use]
    pub fn new(resources: usize, violations: &[ValidationViolation]) -> Self {
        Self {
            valid: violations.is_empty(),
            resources,
            violations: violations.iter().map(ViolationInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Validating {} resource(s)...\n", self.resources);

        if self.valid {
            println!("{}", "No violations found.".green());
            return;
        }

        for v in &self.violations {
            println!("  {} {}", format!("[{}]", v.kind).red(), v.message);
        }
        println!("\n{}", format!("INVALID: {} violation(s)", self.violations.len()).red().bold());
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct ResourceListResult {
    /// Summaries of every registered resource
    pub resources: Vec<ResourceInfo>,
}

/// Summary of a resource
#[derive(Debug, Serialize)]
pub struct ResourceInfo {
    /// Resource name
    pub name: String,
    /// Owning namespace
    pub namespace: String,
    /// Data element type
    pub element: String,
    /// Primary relations of its states
    pub rels: Vec<String>,
    /// Declared methods
    pub methods: Vec<String>,
    /// Number of transitions
    pub transitions: usize,
}

impl From<&ResourceDefinition> for ResourceInfo {
    fn from(r: &ResourceDefinition) -> Self {
        Self {
            name: r.name.clone(),
            namespace: r.namespace.clone(),
            element: r.element.to_string(),
            rels: r.states.iter().map(|s| s.rel.clone()).collect(),
            methods: r.operations.iter().map(|op| op.method.to_string()).collect(),
            transitions: r.transitions().count(),
        }
    }
}

impl ResourceListResult {
    /// Summarize every resource of a registry
    #[must_use]
    pub fn new(registry: &ResourceRegistry) -> Self {
        Self {
            resources: registry.resources().iter().map(ResourceInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.resources.is_empty() {
            println!("No resources found.");
            return;
        }

        println!("Resources:\n");
        for r in &self.resources {
            println!("  {} ({})", r.name.bold(), r.namespace);
            println!("    element: {}  rel: {}", r.element, r.rels.join(", "));
            println!("    methods: {}  transitions: {}\n", r.methods.join(", "), r.transitions);
        }
    }
}

/// A declared outcome prepared for display
#[derive(Debug, Serialize)]
pub struct OutcomeInfo {
    /// Status code
    pub code: u16,
    /// Condition text
    pub condition: String,
}

impl From<&StatusCodeOutcome> for OutcomeInfo {
    fn from(o: &StatusCodeOutcome) -> Self {
        Self {
            code: o.code.as_u16(),
            condition: o.condition.clone(),
        }
    }
}

/// Status code table of one operation
#[derive(Debug, Serialize)]
pub struct OutcomeTableResult {
    /// Resource name
    pub resource: String,
    /// Method
    pub method: String,
    /// Primary outcomes in declaration order
    pub responses: Vec<OutcomeInfo>,
    /// Warning outcomes in declaration order
    pub warnings: Vec<OutcomeInfo>,
}

impl From<&OutcomeTable<'_>> for OutcomeTableResult {
    fn from(table: &OutcomeTable<'_>) -> Self {
        Self {
            resource: table.resource().to_string(),
            method: table.method().to_string(),
            responses: table.primary().iter().map(OutcomeInfo::from).collect(),
            warnings: table.warnings().iter().map(OutcomeInfo::from).collect(),
        }
    }
}

impl OutcomeTableResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} {}", self.method.bold(), self.resource);
        for o in &self.responses {
            println!("  {}  {}", o.code, o.condition);
        }
        for o in &self.warnings {
            println!("  {}  {} {}", o.code.to_string().yellow(), o.condition, "(warning)".dimmed());
        }
    }
}

/// A transition prepared for display
#[derive(Debug, Serialize)]
pub struct TransitionInfo {
    /// Link relation
    pub rel: String,
    /// Description
    pub description: String,
    /// Applicable data element types
    pub scope: Vec<String>,
    /// Link may be absent
    pub conditional: bool,
    /// Linked resource is embedded
    pub embedded: bool,
    /// Name of the registered target resource, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl From<&ResolvedTransition<'_>> for TransitionInfo {
    fn from(resolved: &ResolvedTransition<'_>) -> Self {
        let t = resolved.transition;
        Self {
            rel: t.rel.clone(),
            description: t.description.clone(),
            scope: t.scope.iter().map(ToString::to_string).collect(),
            conditional: t.conditional,
            embedded: t.embedded,
            target: resolved.target.map(|r| r.name.clone()),
        }
    }
}

impl TransitionInfo {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let mut flags = Vec::new();
        if self.conditional {
            flags.push("conditional");
        }
        if self.embedded {
            flags.push("embedded");
        }
        println!("  {} {}", self.rel.bold(), self.description);
        println!("    scope: {}", self.scope.join(", "));
        if !flags.is_empty() {
            println!("    {}", flags.join(", ").dimmed());
        }
        match &self.target {
            Some(target) => println!("    target: {target}"),
            None => println!("    target: {}", "(not registered)".dimmed()),
        }
    }
}

/// Full description of one resource
#[derive(Debug, Serialize)]
pub struct ResourceDetail {
    /// Summary
    #[serde(flatten)]
    pub info: ResourceInfo,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Transitions in declaration order
    pub transition_list: Vec<TransitionInfo>,
    /// Status code tables in declaration order
    pub operations: Vec<OutcomeTableResult>,
}

impl ResourceDetail {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} ({})", self.info.name.bold(), self.info.namespace);
        println!("  element: {}", self.info.element);
        if let Some(description) = &self.description {
            println!("\n  {description}");
        }
        if !self.transition_list.is_empty() {
            println!("\nTransitions:");
            for t in &self.transition_list {
                t.render_human();
            }
        }
        if !self.operations.is_empty() {
            println!("\nOperations:");
            for op in &self.operations {
                op.render_human();
            }
        }
    }
}

/// Result of a contract check
#[derive(Debug, Serialize)]
pub struct ContractCheckResult {
    /// Whether every observation conformed
    pub passed: bool,
    /// Number of observations checked
    pub checked: usize,
    /// Number of observations answered with a warning outcome
    pub warnings: usize,
    /// Per-observation reports
    pub reports: Vec<ContractReport>,
}

impl ContractCheckResult {
    /// Summarize reports
    #[must_use]
    pub fn new(reports: Vec<ContractReport>) -> Self {
        Self {
            passed: reports.iter().all(|r| r.passed),
            checked: reports.len(),
            warnings: reports.iter().filter(|r| r.warning).count(),
            reports,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.checked == 0 {
            println!("No observations.");
            return;
        }

        println!("Checking {} observation(s)...\n", self.checked);

        for r in &self.reports {
            let line = format!("{} {} -> {}", r.method, r.resource, r.status);
            if r.passed && r.warning {
                println!("  {} {line}", "WARN".yellow());
            } else if r.passed {
                println!("  {} {line}", "ok".green());
            } else {
                println!("  {} {line}", "FAIL".red());
                for v in &r.violations {
                    println!("          {v}");
                }
            }
        }

        let failed = self.reports.iter().filter(|r| !r.passed).count();
        if failed == 0 {
            println!("\nAll observations conform to the contract.");
        } else {
            println!("\n{}", format!("VIOLATED: {failed} observation(s)").red().bold());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
