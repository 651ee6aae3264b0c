//! `up` command: start the stack and wait until the platform answers.

use crate::compose::ComposeStack;
use crate::{ComposeOpts, PlatformOpts};
use anyhow::Context;
use formbricks_client::{ClientConfig, FormbricksClient, SurveyPlatform};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Start the compose stack and block until the app reports ready or the
/// timeout elapses. Exceeding the timeout fails the command.
pub async fn run_up(
    compose: ComposeOpts,
    platform: PlatformOpts,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let stack = ComposeStack::from(&compose);

    if stack.is_running() {
        info!("Formbricks is already running at {}", platform.base_url);
        return Ok(());
    }

    stack.pull();
    stack.up()?;

    wait_until_ready(&platform.base_url, Duration::from_secs(timeout_secs)).await?;

    info!("Formbricks is now running at {}", platform.base_url);
    info!("Next steps:");
    info!("  1. Visit {} and complete the setup wizard", platform.base_url);
    info!("  2. Create an API key under Settings -> API Keys (management scope)");
    info!("  3. Export it as FORMBRICKS_API_KEY, and the environment id as FORMBRICKS_ENVIRONMENT_ID");
    info!("  4. Run 'formbricks-cli formbricks generate' and then 'seed'");

    Ok(())
}

/// Poll the platform once a second until it answers with a success status.
async fn wait_until_ready(base_url: &str, timeout: Duration) -> anyhow::Result<()> {
    info!("Waiting for Formbricks to be ready...");

    // Health checks need no credentials.
    let client = FormbricksClient::new(ClientConfig::new(
        base_url.to_string(),
        String::new(),
        String::new(),
    ))
    .context("failed to build HTTP client for readiness polling")?;

    let start = Instant::now();
    while start.elapsed() < timeout {
        match client.check_health().await {
            Ok(()) => {
                info!("Formbricks is ready");
                return Ok(());
            }
            Err(e) => {
                debug!("not ready yet: {e}");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }

    anyhow::bail!(
        "Formbricks did not become ready within {} seconds; check 'docker compose logs' \
         and available ports (3000, 5432)",
        timeout.as_secs()
    )
}
