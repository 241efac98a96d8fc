//! `dropflow` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    — start the REST API server over an in-memory store.
//! - `validate` — validate a workflow draft JSON file and print how it
//!   renders.

use anyhow::Context;
use clap::{Parser, Subcommand};
use engine::WorkflowDraft;
use store::MemoryStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dropflow",
    about = "Workflow automation rules for dropshipping operations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        /// Pre-populate the store with the demo workflows.
        #[arg(long)]
        seed: bool,
    },
    /// Validate a workflow draft JSON file.
    Validate {
        /// Path to the draft JSON file.
        path: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, seed } => {
            let mut store = MemoryStore::new();
            if seed {
                api::seed::seed_demo_workflows(&mut store)?;
            }
            info!("Starting API server on {bind}");
            api::serve(&bind, api::AppState::new(store)).await?;
        }
        Command::Validate { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;

            let draft: WorkflowDraft =
                serde_json::from_str(&content).context("invalid workflow draft JSON")?;

            match store::validate_draft(&draft) {
                Ok(()) => {
                    println!("✅ Workflow draft is valid.");
                    println!("   {}", engine::describe_trigger(&draft.trigger));
                    for line in actions::render_actions(&draft.actions) {
                        println!("   {line}");
                    }
                }
                Err(e) => {
                    eprintln!("❌ Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
