//! Package-manager invocation

use crate::config::PackageManager;
use crate::tools::invoke;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

fn announce(command: &str) {
    println!();
    println!("{} {}", "Running:".dimmed(), command.yellow());
    println!();
}

/// Install dependencies in `dir` with inherited streams so the user sees
/// the package manager's own progress output.
pub async fn install(pm: PackageManager, dir: &Path) -> Result<()> {
    if !invoke::is_available(pm.command()) {
        anyhow::bail!("{} is not installed", pm.command());
    }

    announce(&pm.install_command());
    let status = invoke::run(pm.command(), pm.install_args(), dir, false).await?;
    if !status.success() {
        anyhow::bail!(
            "'{}' exited with status {}",
            pm.install_command(),
            status.code().unwrap_or(-1)
        );
    }
    Ok(())
}

/// Launch the dev server in `dir`. Blocks until the server exits; this is
/// always the last stage, so nothing downstream depends on it.
pub async fn run_dev(pm: PackageManager, dir: &Path) -> Result<()> {
    announce(&pm.dev_command());
    let status = invoke::run(pm.command(), pm.dev_args(), dir, false).await?;
    if !status.success() {
        anyhow::bail!(
            "'{}' exited with status {}",
            pm.dev_command(),
            status.code().unwrap_or(-1)
        );
    }
    Ok(())
}
