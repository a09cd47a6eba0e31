// Repository initialization via the git CLI

use std::path::Path;
use tokio::process::Command;

use crate::utils::error::{Result, ScaffoldError};

/// Run `git init` with the given directory as working directory.
///
/// The directory must already exist; call this only after the project files
/// have been materialized. Unlike file writes, a failure here is propagated
/// so the run terminates with a non-zero exit status.
pub async fn init_repository(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("init")
        .current_dir(dir)
        .output()
        .await
        .map_err(|err| ScaffoldError::GitError(format!("failed to run git init: {}", err)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScaffoldError::GitError(format!(
            "git init failed in {}: {}",
            dir.display(),
            stderr.trim()
        )));
    }

    Ok(())
}
