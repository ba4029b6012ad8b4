//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use rsdef::output::OutputMode;

/// rsdef - Hypermedia resource contract tooling
#[derive(Parser, Debug)]
#[command(
    name = "rsdef",
    version,
    about = "Hypermedia resource contract tooling",
    long_about = "Validate and document hypermedia REST resource definitions.\n\n\
                  Resources declare their states, link relations and status codes.\n\
                  Recorded responses can be checked against those declarations."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the project config (defaults to ./.rsdef.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create .rsdef.toml and a starter schema in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate every loaded definition
    Validate {
        /// Require transitions and sub-resources to resolve to registered resources
        #[arg(long)]
        closed_world: bool,
    },

    /// List registered resources
    List,

    /// Show transitions and status codes of a resource
    Show {
        /// Resource name
        resource: String,
    },

    /// Show the status code table of an operation
    Outcomes {
        /// Resource name
        resource: String,

        /// HTTP method (e.g., GET)
        method: String,
    },

    /// Resolve a state transition to its target resource
    Resolve {
        /// Resource name
        resource: String,

        /// Link relation
        rel: String,
    },

    /// Check recorded responses (a JSON array of observations) against the contract
    Check {
        /// Path to the observations file
        observations: PathBuf,
    },

    /// Render Markdown documentation
    Docs {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the loaded model as a schema document (TOML, or JSON with --json)
    Export,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = Context::new(cli.config, output_mode)?;

    match cli.command {
        Some(Command::Init { force }) => commands::init(&ctx, force),
        Some(Command::Validate { closed_world }) => commands::validate(&ctx, closed_world),
        Some(Command::List) => commands::list(&ctx),
        Some(Command::Show { resource }) => commands::show(&ctx, &resource),
        Some(Command::Outcomes { resource, method }) => {
            commands::outcomes(&ctx, &resource, &method)
        },
        Some(Command::Resolve { resource, rel }) => commands::resolve(&ctx, &resource, &rel),
        Some(Command::Check { observations }) => commands::check(&ctx, &observations),
        Some(Command::Docs { out }) => commands::docs(&ctx, out.as_deref()),
        Some(Command::Export) => commands::export(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("rsdef v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rsdef v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'rsdef --help' for usage");
                println!("Run 'rsdef validate' to check the built-in GEDCOM X definitions");
            }
            Ok(())
        },
    }
}
