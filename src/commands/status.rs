//! `status` command: report whether the stack is running.

use crate::compose::ComposeStack;
use crate::ComposeOpts;
use tracing::info;

pub async fn run_status(compose: ComposeOpts) -> anyhow::Result<()> {
    let stack = ComposeStack::from(&compose);
    let services = stack.running_services()?;

    if services.is_empty() {
        info!("Formbricks is not running; start it with 'formbricks-cli formbricks up'");
    } else {
        info!("Running services: {}", services.join(", "));
    }

    Ok(())
}
