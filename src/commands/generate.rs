//! `generate` command: produce and persist the demo dataset.

use crate::GenerateOpts;
use anyhow::Context;
use demo_generator::{DemoGenerator, GeneratorConfig, Role};
use tracing::info;

pub async fn run_generate(opts: GenerateOpts) -> anyhow::Result<()> {
    let config = GeneratorConfig {
        surveys: opts.surveys,
        users: opts.users,
        owners: opts.owners,
        seed: opts.seed,
        max_responses_per_survey: opts.max_responses,
    };

    info!(
        "Generating {} surveys, {} users ({} owners), seed {}",
        config.surveys, config.users, config.owners, config.seed
    );

    let dataset = DemoGenerator::new(config)
        .generate()
        .context("data generation failed")?;

    dataset
        .verify()
        .context("generated dataset failed invariant checks")?;

    dataset
        .save(&opts.output_dir)
        .with_context(|| format!("failed to write dataset to {:?}", opts.output_dir))?;

    info!("Dataset written to {:?}", opts.output_dir);
    info!("  surveys:   {}", dataset.surveys.len());
    info!(
        "  users:     {} ({} owners, {} managers)",
        dataset.users.len(),
        dataset.users_with_role(Role::Owner),
        dataset.users_with_role(Role::Manager)
    );
    info!("  responses: {} (every survey has at least one)", dataset.responses.len());

    Ok(())
}
