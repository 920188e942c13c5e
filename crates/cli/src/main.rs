mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state_inspector_core::InspectorConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "state-inspector")]
#[command(about = "Inspect and prune an AI code editor's workspace state databases", long_about = None)]
struct Cli {
    /// Workspace storage directory (overrides WORKSPACE_PATH)
    #[arg(long, global = true)]
    workspace_root: Option<PathBuf>,
    /// Fall back to the platform default editor location when no root is set
    #[arg(long, global = true)]
    detect_root: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP dashboard
    Serve {
        /// Listen port [default: STATE_INSPECTOR_PORT or 3000]
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print aggregate statistics as JSON
    Stats,
    /// Print a single key/value entry as JSON
    Entry {
        #[arg(short, long)]
        key: String,
        /// "global" or a workspace id
        #[arg(short, long, default_value = "global")]
        source: String,
    },
    /// List workspaces with neither chats nor composers
    Empty,
    /// Permanently delete workspace directories
    Prune {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn resolve_config(cli: &Cli) -> InspectorConfig {
    let config = InspectorConfig::from_env().with_override(cli.workspace_root.clone());
    if cli.detect_root { config.or_detected() } else { config }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(config, port, host).await,
        Commands::Stats => commands::inspect::stats(&config),
        Commands::Entry { key, source } => commands::inspect::entry(&config, &key, &source),
        Commands::Empty => commands::inspect::empty(&config),
        Commands::Prune { ids, yes } => commands::prune::run(&config, &ids, yes),
    }
}
