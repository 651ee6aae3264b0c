//! Docker compose wrapper for the Formbricks stack.
//!
//! Thin pass-through to `docker compose`: the compose file owns the
//! service definitions (app, PostgreSQL, Valkey) and their healthchecks;
//! this module only issues the commands and surfaces failures with the
//! child's stderr attached.

use crate::ComposeOpts;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Compose service name of the Formbricks app.
const APP_SERVICE: &str = "formbricks";

/// Handle on a docker compose stack.
pub struct ComposeStack {
    compose_file: PathBuf,
    project_name: String,
}

impl ComposeStack {
    pub fn new(compose_file: PathBuf, project_name: String) -> Self {
        Self {
            compose_file,
            project_name,
        }
    }

    /// Full `docker` argument vector for a compose subcommand.
    fn compose_args(&self, tail: &[&str]) -> Vec<String> {
        let mut args = vec![
            "compose".to_string(),
            "-f".to_string(),
            self.compose_file.display().to_string(),
            "-p".to_string(),
            self.project_name.clone(),
        ];
        args.extend(tail.iter().map(|a| a.to_string()));
        args
    }

    /// Run a compose subcommand, failing with captured stderr on non-zero
    /// exit.
    fn run(&self, tail: &[&str]) -> Result<String> {
        let args = self.compose_args(tail);
        debug!("docker {}", args.join(" "));

        let output = Command::new("docker")
            .args(&args)
            .output()
            .with_context(|| format!("failed to run docker {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "docker {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Pull the latest images. Best effort: a failed pull (offline, rate
    /// limited) still lets `up` run with cached images.
    pub fn pull(&self) {
        info!("Pulling images...");
        let status = Command::new("docker")
            .args(self.compose_args(&["pull"]))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        if !matches!(status, Ok(s) if s.success()) {
            warn!("image pull failed, continuing with local images");
        }
    }

    /// Start the stack detached.
    pub fn up(&self) -> Result<()> {
        info!("Starting services...");
        self.run(&["up", "-d"])?;
        Ok(())
    }

    /// Stop and remove containers and volumes.
    pub fn down(&self) -> Result<()> {
        info!("Stopping services...");
        self.run(&["down", "-v"])?;
        Ok(())
    }

    /// Names of services currently running in this project.
    pub fn running_services(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["ps", "--services", "--status", "running"])?;
        Ok(parse_services(&stdout))
    }

    /// Whether the Formbricks app service is up.
    pub fn is_running(&self) -> bool {
        self.running_services()
            .map(|services| services.iter().any(|s| s == APP_SERVICE))
            .unwrap_or(false)
    }
}

impl From<&ComposeOpts> for ComposeStack {
    fn from(opts: &ComposeOpts) -> Self {
        Self::new(opts.compose_file.clone(), opts.project_name.clone())
    }
}

/// Parse `docker compose ps --services` output into service names.
fn parse_services(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> ComposeStack {
        ComposeStack::new(PathBuf::from("docker-compose.yml"), "formbricks-cli".into())
    }

    #[test]
    fn test_compose_args_include_file_and_project() {
        let args = stack().compose_args(&["up", "-d"]);
        assert_eq!(
            args,
            vec!["compose", "-f", "docker-compose.yml", "-p", "formbricks-cli", "up", "-d"]
        );
    }

    #[test]
    fn test_down_removes_volumes() {
        let args = stack().compose_args(&["down", "-v"]);
        assert!(args.contains(&"down".to_string()));
        assert!(args.contains(&"-v".to_string()));
    }

    #[test]
    fn test_parse_services_skips_blank_lines() {
        assert_eq!(
            parse_services("formbricks\npostgres\n\nvalkey\n"),
            vec!["formbricks", "postgres", "valkey"]
        );
    }

    #[test]
    fn test_empty_ps_output_means_nothing_running() {
        assert!(parse_services("").is_empty());
        assert!(parse_services("\n\n").is_empty());
    }
}
