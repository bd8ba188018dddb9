//! Project creation pipeline
//!
//! The fatal half of the scaffold: validate the name, claim the target
//! directory, render and write every file. Optional stages (install, git,
//! editor, dev server) are driven by the caller and only ever warn.

use crate::config::ScaffoldConfig;
use crate::{fsops, templates, validate};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Create the project under `parent`, returning the project directory and
/// the number of files written.
///
/// The name is validated before any filesystem mutation. The target
/// directory must be absent or empty; the emptiness check runs once, up
/// front (accepted check-then-write race for a local interactive tool).
/// Any write failure aborts the scaffold.
pub async fn create_project(config: &ScaffoldConfig, parent: &Path) -> Result<(PathBuf, usize)> {
    let name = validate::project_name(&config.project_name)?;
    let target = parent.join(&name);

    fsops::ensure_target(&target).await?;

    let files = templates::render_project(config);
    for file in &files {
        fsops::write_file(&target, &file.path, &file.content).await?;
    }

    Ok((target, files.len()))
}
