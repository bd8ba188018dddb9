//! Git repository setup and lygia submodule attachment
//!
//! Everything here is best-effort: the scaffold stays valid without version
//! control, so callers downgrade errors to warnings.

use crate::tools::invoke;
use anyhow::Result;
use std::path::Path;

/// Upstream shader library attached as a submodule
pub const LYGIA_URL: &str = "https://github.com/patriciogonzalezvivo/lygia.git";

/// Submodule path inside the generated project
pub const LYGIA_PATH: &str = "src/shaders/lygia";

/// Branch the submodule tracks
pub const LYGIA_BRANCH: &str = "main";

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from glsketch";

/// The command a user can run by hand if automatic attachment fails
pub fn lygia_manual_command() -> String {
    format!("git submodule add {} {}", LYGIA_URL, LYGIA_PATH)
}

/// Initialize a repository in `dir` with a `main` default branch and create
/// the initial commit. Skips initialization when a repository already exists.
pub async fn init_repository(dir: &Path) -> Result<()> {
    if !invoke::is_available("git") {
        anyhow::bail!("git is not installed");
    }

    if dir.join(".git").exists() {
        return commit_all(dir, INITIAL_COMMIT_MESSAGE).await;
    }

    // Older gits lack --initial-branch; fall back to init + rename
    if invoke::run_checked("git", &["init", "--initial-branch=main"], dir)
        .await
        .is_err()
    {
        invoke::run_checked("git", &["init"], dir).await?;
        invoke::run_checked("git", &["branch", "-m", "main"], dir).await?;
    }

    commit_all(dir, INITIAL_COMMIT_MESSAGE).await
}

/// Stage everything and commit with `message`.
pub async fn commit_all(dir: &Path, message: &str) -> Result<()> {
    invoke::run_checked("git", &["add", "-A"], dir).await?;
    invoke::run_checked("git", &["commit", "-m", message], dir).await
}

/// Attach the lygia shader library as a branch-tracking submodule and commit
/// it. Skipped when the submodule path already exists.
pub async fn add_shader_library(dir: &Path) -> Result<()> {
    if dir.join(LYGIA_PATH).exists() {
        return Ok(());
    }

    invoke::run_checked("git", &["submodule", "add", LYGIA_URL, LYGIA_PATH], dir).await?;
    invoke::run_checked(
        "git",
        &[
            "submodule",
            "set-branch",
            "--branch",
            LYGIA_BRANCH,
            LYGIA_PATH,
        ],
        dir,
    )
    .await?;

    commit_all(dir, "Add lygia shader library").await
}
