//! Filesystem operations for the scaffold
//!
//! Writes are fatal on failure: a partially written project is worse than
//! no project, so the orchestrator aborts on the first IO error.

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Fatal scaffold-time failures with a user-facing message
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("target directory '{0}' already exists and is not empty")]
    DirectoryNotEmpty(String),
}

/// Ensure the target directory is usable and exists.
///
/// The directory must be absent or empty; the check runs exactly once,
/// before any file is written. Passing the check creates the directory.
pub async fn ensure_target(dir: &Path) -> Result<()> {
    if dir.exists() {
        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
            .is_some()
        {
            return Err(ScaffoldError::DirectoryNotEmpty(dir.display().to_string()).into());
        }
    } else {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Write one rendered file under `root`, creating parent directories as
/// needed. Truncate-or-create semantics.
pub async fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let target = root.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&target, content)
        .await
        .with_context(|| format!("Failed to write file: {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_ensure_target_creates_missing_directory() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("fresh");
        ensure_target(&target).await.unwrap();
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_ensure_target_accepts_empty_directory() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("empty");
        std::fs::create_dir(&target).unwrap();
        ensure_target(&target).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_target_rejects_non_empty_directory() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("busy");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "hello").unwrap();

        let err = ensure_target(&target).await.unwrap_err();
        assert!(err.downcast_ref::<ScaffoldError>().is_some());
        // The existing file is untouched
        assert_eq!(std::fs::read_to_string(target.join("keep.txt")).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_write_file_creates_parents() {
        let tmp = tempdir().unwrap();
        write_file(tmp.path(), "src/shaders/frag.glsl", "void main() {}")
            .await
            .unwrap();
        let written = tmp.path().join("src/shaders/frag.glsl");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "void main() {}");
    }
}
