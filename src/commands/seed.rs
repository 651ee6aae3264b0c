//! `seed` command: push the generated dataset into the platform APIs.

use crate::SeedOpts;
use anyhow::Context;
use api_seeder::{SeedReport, Seeder};
use demo_generator::Dataset;
use formbricks_client::{FormbricksClient, SurveyPlatform};
use tracing::{info, warn};

/// Run the seeding workflow and return the outcome report.
///
/// API failures are recovered per entity inside the seeder and end up in
/// the report; only setup problems (missing dataset, missing credentials,
/// unwritable report path) fail the command itself.
pub async fn run_seed(opts: SeedOpts) -> anyhow::Result<SeedReport> {
    let dataset = Dataset::load(&opts.data_dir).with_context(|| {
        format!(
            "failed to load dataset from {:?}; run 'formbricks-cli formbricks generate' first",
            opts.data_dir
        )
    })?;
    dataset
        .verify()
        .context("dataset on disk failed invariant checks; re-run generate")?;

    info!(
        "Seeding {} users, {} surveys, {} responses into {}",
        dataset.users.len(),
        dataset.surveys.len(),
        dataset.responses.len(),
        opts.platform.base_url
    );

    let client =
        FormbricksClient::new(opts.platform.client_config()?).context("failed to build HTTP client")?;

    // Preflight is advisory: an unreachable or unconfigured instance still
    // gets a full (all-failed) report rather than a crash.
    if let Err(e) = client.check_health().await {
        warn!("platform health check failed ({e}); attempting to seed anyway");
    }

    let report = Seeder::new(&client).seed(&dataset).await;

    report
        .save(&opts.report_file)
        .with_context(|| format!("failed to write seed report to {:?}", opts.report_file))?;

    report.log_summary();
    info!("Seed report written to {:?}", opts.report_file);

    if report.is_partial() {
        warn!(
            "seeding completed partially: {} created, {} failed; the dataset in {:?} remains \
             available for manual import",
            report.total_created(),
            report.total_failed(),
            opts.data_dir
        );
    }

    Ok(report)
}
