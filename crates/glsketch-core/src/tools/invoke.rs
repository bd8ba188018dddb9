//! Synchronous external command invocation
//!
//! Every optional stage of the scaffold shells out through these helpers.
//! User-facing commands (install, dev server) inherit the terminal streams;
//! plumbing commands (git, availability probes) run with output discarded.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Run `program args` in `dir` and wait for it to exit.
///
/// With `capture` set, stdout/stderr are discarded; otherwise the child
/// inherits the invoking terminal so the user sees live output.
pub async fn run(program: &str, args: &[&str], dir: &Path, capture: bool) -> Result<ExitStatus> {
    let mut command = Command::new(program);
    command.args(args).current_dir(dir);

    if capture {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    } else {
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
    }

    let mut child = command
        .spawn()
        .with_context(|| format!("Failed to launch '{}'", program))?;

    child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for '{}'", program))
}

/// Run a plumbing command and require a zero exit status.
pub async fn run_checked(program: &str, args: &[&str], dir: &Path) -> Result<()> {
    let status = run(program, args, dir, true).await?;
    if !status.success() {
        anyhow::bail!(
            "'{} {}' exited with status {}",
            program,
            args.join(" "),
            status.code().unwrap_or(-1)
        );
    }
    Ok(())
}

/// Check whether a tool is present by probing its version flag.
/// Any spawn error counts as absence, never as a failure.
pub fn is_available(program: &str) -> bool {
    std::process::Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
