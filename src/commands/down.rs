//! `down` command: stop and remove the stack.

use crate::compose::ComposeStack;
use crate::ComposeOpts;
use tracing::info;

pub async fn run_down(compose: ComposeOpts) -> anyhow::Result<()> {
    let stack = ComposeStack::from(&compose);
    stack.down()?;
    info!("Formbricks stopped and cleaned up");
    Ok(())
}
