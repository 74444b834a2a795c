//! git detection and repository initialisation

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// `git init` should be instant; anything longer means git is stuck
const INIT_TIMEOUT: Duration = Duration::from_secs(10);

/// git detection result
#[derive(Debug, Clone)]
pub struct GitInfo {
    pub version: Option<String>,
    pub available: bool,
}

/// Check if git is available
pub fn check_git() -> GitInfo {
    let output = Command::new("git").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            GitInfo {
                version: Some(version),
                available: true,
            }
        }
        _ => GitInfo {
            version: None,
            available: false,
        },
    }
}

/// Run `git init` inside `dir`
pub async fn init_repository(dir: &Path) -> Result<()> {
    let child = TokioCommand::new("git")
        .arg("init")
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .context("git is not installed or not on PATH")?;

    let output = match timeout(INIT_TIMEOUT, child.wait_with_output()).await {
        Ok(output) => output.context("Failed to wait for git")?,
        Err(_) => bail!("git init timed out after {} seconds", INIT_TIMEOUT.as_secs()),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "git init failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    Ok(())
}
