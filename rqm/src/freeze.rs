use crate::error::UpdateError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Capture the current environment's packages via `<pip> freeze`
pub fn freeze_environment(pip: &str) -> Result<String> {
    let command = format!("{pip} freeze");
    debug!(%command, "capturing installed packages");

    let output = Command::new(pip)
        .arg("freeze")
        .output()
        .map_err(|e| UpdateError::CommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(UpdateError::CommandFailed {
            command,
            reason: format!("{} {}", output.status, stderr.trim()),
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Write the frozen environment to `path`
pub fn write_freeze(pip: &str, path: &Path) -> Result<()> {
    let frozen = freeze_environment(pip)?;

    fs::write(path, &frozen)
        .with_context(|| format!("Failed to write frozen requirements: {}", path.display()))?;

    debug!(path = %path.display(), lines = frozen.lines().count(), "wrote frozen requirements");
    Ok(())
}
