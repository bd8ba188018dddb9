//! Best-effort editor launch

use crate::tools::invoke;
use anyhow::Result;
use std::path::Path;

const EDITOR_COMMAND: &str = "code";

/// Whether the editor CLI launcher is on PATH
pub fn is_available() -> bool {
    invoke::is_available(EDITOR_COMMAND)
}

/// Open the project directory in the editor. The launcher forks and returns
/// immediately, so this does not block the remaining stages.
pub async fn open(dir: &Path) -> Result<()> {
    invoke::run_checked(EDITOR_COMMAND, &["."], dir).await
}
