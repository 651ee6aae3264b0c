//! Formbricks CLI library.
//!
//! A helper for running a local Formbricks instance and filling it with
//! demo data:
//!
//! - `up` / `down` / `status`: manage the docker compose stack (app,
//!   PostgreSQL, Valkey) and wait for the platform to report ready
//! - `generate`: produce a synthetic dataset of surveys, users, and
//!   responses and persist it as JSON
//! - `seed`: push the generated dataset into the platform's HTTP APIs,
//!   best-effort, with a per-entity outcome report
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the stack and wait until the app answers
//! formbricks-cli formbricks up
//!
//! # Generate 5 surveys, 10 users (2 owners), at least 1 response each
//! formbricks-cli formbricks generate
//!
//! # Seed via the APIs (needs FORMBRICKS_API_KEY and
//! # FORMBRICKS_ENVIRONMENT_ID after the in-app setup)
//! formbricks-cli formbricks seed
//!
//! # Stop and remove everything
//! formbricks-cli formbricks down
//! ```

use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod compose;

/// Exit code for a seed run that completed with some failed entities.
pub const EXIT_PARTIAL: i32 = 2;

/// Connection options for the target Formbricks instance.
#[derive(Parser, Clone, Debug)]
pub struct PlatformOpts {
    /// Formbricks base URL
    #[arg(long, default_value = "http://localhost:3000", env = "FORMBRICKS_URL")]
    pub base_url: String,

    /// Management API key (create one under Settings -> API Keys)
    #[arg(long, env = "FORMBRICKS_API_KEY")]
    pub api_key: Option<String>,

    /// Environment id surveys are created in
    #[arg(long, env = "FORMBRICKS_ENVIRONMENT_ID")]
    pub environment_id: Option<String>,
}

impl PlatformOpts {
    /// Build a client config, requiring the credentials that seeding needs.
    pub fn client_config(&self) -> anyhow::Result<formbricks_client::ClientConfig> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "FORMBRICKS_API_KEY is not set; create an API key in the Formbricks UI \
                 (Settings -> API Keys) and export it"
            )
        })?;
        let environment_id = self.environment_id.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "FORMBRICKS_ENVIRONMENT_ID is not set; copy the environment id from the \
                 Formbricks UI and export it"
            )
        })?;

        Ok(formbricks_client::ClientConfig::new(
            self.base_url.clone(),
            api_key,
            environment_id,
        ))
    }
}

/// Options for locating the docker compose stack.
#[derive(Parser, Clone, Debug)]
pub struct ComposeOpts {
    /// Path to the compose file
    #[arg(long, default_value = "docker-compose.yml")]
    pub compose_file: PathBuf,

    /// Compose project name
    #[arg(long, default_value = "formbricks-cli")]
    pub project_name: String,
}

/// Options for the `generate` command.
#[derive(Parser, Clone, Debug)]
pub struct GenerateOpts {
    /// Number of surveys to generate
    #[arg(long, default_value = "5")]
    pub surveys: usize,

    /// Number of users to generate
    #[arg(long, default_value = "10")]
    pub users: usize,

    /// How many of the users are owners (the rest are managers)
    #[arg(long, default_value = "2")]
    pub owners: usize,

    /// Random seed (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Upper bound on responses per survey
    #[arg(long, default_value = "3")]
    pub max_responses: usize,

    /// Directory the dataset JSON files are written to
    #[arg(long, short = 'o', default_value = "generated_data")]
    pub output_dir: PathBuf,
}

/// Options for the `seed` command.
#[derive(Parser, Clone, Debug)]
pub struct SeedOpts {
    #[command(flatten)]
    pub platform: PlatformOpts,

    /// Directory the dataset was generated into
    #[arg(long, default_value = "generated_data")]
    pub data_dir: PathBuf,

    /// Where the seed report is written
    #[arg(long, default_value = "seed_results/report.json")]
    pub report_file: PathBuf,
}
