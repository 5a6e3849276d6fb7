//! `repasse` -- CLI for the education-census inference gateway.
//!
//! Provides the following subcommands:
//!
//! - `repasse audit` -- Audit student census records for Fundeb-blocking issues.
//! - `repasse quiz` -- Generate a remedial SAEB mini-quiz for a weak skill.
//! - `repasse status` -- Show resolved configuration and diagnostics.

use clap::{Parser, Subcommand};

mod commands;
mod settings;

/// repasse census gateway CLI.
#[derive(Parser)]
#[command(name = "repasse", about = "Census audits and SAEB interventions", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Audit student census records for Fundeb-blocking inconsistencies.
    Audit(commands::audit::AuditArgs),

    /// Generate a remedial quiz for a weak SAEB skill.
    Quiz(commands::quiz::QuizArgs),

    /// Show resolved configuration.
    Status,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Audit(args) => commands::audit::run(args).await,
        Commands::Quiz(args) => commands::quiz::run(args).await,
        Commands::Status => commands::status::run(),
    }
}
