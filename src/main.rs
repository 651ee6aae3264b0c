//! Command-line interface for formbricks-cli.
//!
//! # Usage Examples
//!
//! ```bash
//! # Start Formbricks (app + PostgreSQL + Valkey) and wait until ready
//! formbricks-cli formbricks up
//!
//! # Generate the demo dataset into generated_data/
//! formbricks-cli formbricks generate --surveys 5 --users 10 --owners 2
//!
//! # Seed it via the platform APIs (best effort; exit code 2 on partial)
//! formbricks-cli formbricks seed
//!
//! # Check and tear down
//! formbricks-cli formbricks status
//! formbricks-cli formbricks down
//! ```

use clap::{Parser, Subcommand};
use formbricks_cli::commands::{run_down, run_generate, run_seed, run_status, run_up};
use formbricks_cli::{ComposeOpts, GenerateOpts, PlatformOpts, SeedOpts, EXIT_PARTIAL};

#[derive(Parser)]
#[command(name = "formbricks-cli")]
#[command(about = "Run a local Formbricks instance and seed it with demo data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local Formbricks instance and its demo data
    Formbricks {
        #[command(subcommand)]
        action: FormbricksAction,
    },
}

#[derive(Subcommand)]
enum FormbricksAction {
    /// Start Formbricks and its services, blocking until ready
    Up {
        #[command(flatten)]
        compose: ComposeOpts,

        #[command(flatten)]
        platform: PlatformOpts,

        /// How long to wait for the platform to report ready
        #[arg(long, default_value = "180")]
        timeout_secs: u64,
    },
    /// Stop and remove the services and their volumes
    Down {
        #[command(flatten)]
        compose: ComposeOpts,
    },
    /// Generate the demo dataset (surveys, users, responses)
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,
    },
    /// Seed the generated dataset via the Formbricks APIs
    Seed {
        #[command(flatten)]
        opts: SeedOpts,
    },
    /// Report whether the stack is running
    Status {
        #[command(flatten)]
        compose: ComposeOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Formbricks { action } => match action {
            FormbricksAction::Up {
                compose,
                platform,
                timeout_secs,
            } => {
                run_up(compose, platform, timeout_secs).await?;
            }
            FormbricksAction::Down { compose } => {
                run_down(compose).await?;
            }
            FormbricksAction::Generate { opts } => {
                run_generate(opts).await?;
            }
            FormbricksAction::Seed { opts } => {
                let report = run_seed(opts).await?;
                if report.is_partial() {
                    // Completed run, partial outcome: distinguishable for
                    // scripts without being a crash.
                    std::process::exit(EXIT_PARTIAL);
                }
            }
            FormbricksAction::Status { compose } => {
                run_status(compose).await?;
            }
        },
    }

    Ok(())
}
