use crate::backup::BackupManager;
use crate::prompt::confirm;
use anyhow::{Context, Result};
use requirements_manager_core::{Manifest, ReportRenderer, compare_manifests};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How an update run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The original was replaced; it was first copied to `backup`
    Applied { backup: PathBuf },
    Cancelled,
}

/// Compares a requirements file with its replacement and, once confirmed,
/// swaps the replacement in after taking a backup
pub struct RequirementsUpdater {
    backups: BackupManager,
    backup_suffix: String,
    renderer: ReportRenderer,
}

impl RequirementsUpdater {
    pub fn new(backups: BackupManager, backup_suffix: &str, show_colors: bool) -> Self {
        Self {
            backups,
            backup_suffix: backup_suffix.to_string(),
            renderer: ReportRenderer::new(show_colors),
        }
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    /// Run one update: report, ask, back up and overwrite, then remove the
    /// temporary `new_file`. Nothing is written before the user agrees.
    pub fn run<R: BufRead, W: Write>(
        &self,
        original_file: &Path,
        new_file: &Path,
        input: &mut R,
        output: &mut W,
    ) -> Result<UpdateOutcome> {
        let original_content = fs::read_to_string(original_file).with_context(|| {
            format!("Failed to read requirements file: {}", original_file.display())
        })?;
        let new_content = fs::read_to_string(new_file)
            .with_context(|| format!("Failed to read requirements file: {}", new_file.display()))?;

        let original = Manifest::parse(&original_content);
        if original.is_empty() {
            warn!(path = %original_file.display(), "requirements file declares no packages");
        }

        let result = compare_manifests(&original, &Manifest::parse(&new_content));
        debug!(
            total = result.total_packages,
            discrepancies = result.discrepancy_count(),
            "compared requirements"
        );

        self.renderer.render_to(&result, output)?;

        if !result.is_valid {
            writeln!(output, "\nWarning: Some discrepancies were found in the comparison.")?;
        }

        let file_name = original_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| original_file.display().to_string());
        let question = format!("Would you like to update the original {file_name} file?");

        let outcome = if confirm(input, output, &question)? {
            let backup = self.backups.create(original_file, &self.backup_suffix)?;

            fs::write(original_file, &new_content).with_context(|| {
                format!("Failed to write requirements file: {}", original_file.display())
            })?;

            writeln!(output, "\nSuccess! Original file has been updated.")?;
            writeln!(output, "Backup created at: {}", backup.display())?;
            self.print_backups(output)?;

            UpdateOutcome::Applied { backup }
        } else {
            writeln!(output, "\nUpdate cancelled. No changes were made.")?;
            UpdateOutcome::Cancelled
        };

        self.remove_temporary(new_file, output)?;

        Ok(outcome)
    }

    fn print_backups<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "\nAvailable backups:")?;

        for backup in self.backups.list()? {
            writeln!(
                output,
                "  - {} ({} bytes, created: {})",
                backup.name,
                backup.size,
                backup.created_display()
            )?;
        }

        Ok(())
    }

    fn remove_temporary<W: Write>(&self, new_file: &Path, output: &mut W) -> Result<()> {
        match fs::remove_file(new_file) {
            Ok(()) => {
                writeln!(output, "\nCleaned up temporary file: {}", new_file.display())?;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                writeln!(
                    output,
                    "\nNote: Temporary file {} was already removed",
                    new_file.display()
                )?;
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!(path = %new_file.display(), error = %e, "could not remove temporary file");
                writeln!(
                    output,
                    "\nWarning: Could not remove temporary file {} due to permissions",
                    new_file.display()
                )?;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to remove temporary file: {}", new_file.display())
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpdateError;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Fixture {
        root: TempDir,
        original: PathBuf,
        new: PathBuf,
    }

    impl Fixture {
        fn new(original: &str, new: &str) -> Self {
            let root = TempDir::new().unwrap();
            let original_path = root.path().join("requirements.txt");
            let new_path = root.path().join("requirements_new.txt");
            fs::write(&original_path, original).unwrap();
            fs::write(&new_path, new).unwrap();

            Self {
                root,
                original: original_path,
                new: new_path,
            }
        }

        fn updater(&self) -> RequirementsUpdater {
            RequirementsUpdater::new(BackupManager::new(self.root.path().join("backups")), ".bak", false)
        }

        fn run(&self, answers: &str) -> (Result<UpdateOutcome>, String) {
            let mut input = Cursor::new(answers.as_bytes());
            let mut output = Vec::new();
            let outcome = self.updater().run(&self.original, &self.new, &mut input, &mut output);
            (outcome, String::from_utf8(output).unwrap())
        }
    }

    #[test]
    fn test_update_confirmed() {
        let fixture = Fixture::new(
            "certifi @ file:///x\npandas==2.2.3\n",
            "certifi\npandas==2.2.3\n",
        );

        let (outcome, output) = fixture.run("yes\n");

        let UpdateOutcome::Applied { backup } = outcome.unwrap() else {
            panic!("update was not applied");
        };
        assert_eq!(fs::read_to_string(&fixture.original).unwrap(), "certifi\npandas==2.2.3\n");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "certifi @ file:///x\npandas==2.2.3\n");
        assert!(!fixture.new.exists());
        assert!(output.contains("Valid transformation: Yes"));
        assert!(output.contains("Success!"));
        assert!(output.contains("Available backups:"));
        assert!(output.contains("Cleaned up temporary file"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_update_cancelled() {
        let fixture = Fixture::new("pandas==2.2.3\nnumpy==1.26.4", "pandas==2.2.3\nnumpy==1.26.4");

        let (outcome, output) = fixture.run("no\n");

        assert_eq!(outcome.unwrap(), UpdateOutcome::Cancelled);
        assert!(output.contains("cancelled"));
        assert_eq!(
            fs::read_to_string(&fixture.original).unwrap(),
            "pandas==2.2.3\nnumpy==1.26.4"
        );
        assert!(!fixture.root.path().join("backups").exists());
        assert!(!fixture.new.exists());
    }

    #[test]
    fn test_update_warns_on_discrepancies() {
        let fixture = Fixture::new("pandas==2.2.3\nnumpy==1.26.4", "pandas==2.2.4\n");

        let (outcome, output) = fixture.run("maybe\nn\n");

        assert_eq!(outcome.unwrap(), UpdateOutcome::Cancelled);
        assert!(output.contains("Warning: Some discrepancies were found in the comparison."));
        assert!(output.contains("Please enter 'yes' or 'no'."));
        assert!(output.contains("  - pandas: 2.2.3 → 2.2.4"));
    }

    #[test]
    fn test_input_closed_changes_nothing() {
        let fixture = Fixture::new("pandas==2.2.3\n", "pandas==2.2.4\n");

        let (outcome, _) = fixture.run("");

        let err = outcome.unwrap_err();
        assert!(matches!(err.downcast_ref::<UpdateError>(), Some(UpdateError::InputClosed)));
        assert_eq!(fs::read_to_string(&fixture.original).unwrap(), "pandas==2.2.3\n");
        assert!(fixture.new.exists());
    }

    #[test]
    fn test_empty_original_still_reports() {
        let fixture = Fixture::new("# nothing pinned\n", "pandas==2.2.3\n");

        let (outcome, output) = fixture.run("no\n");

        assert_eq!(outcome.unwrap(), UpdateOutcome::Cancelled);
        assert!(output.contains("Total packages analyzed: 0"));
        assert!(output.contains("New packages not in original requirements:\n  - pandas\n"));
        assert_eq!(fs::read_to_string(&fixture.original).unwrap(), "# nothing pinned\n");
    }

    #[test]
    fn test_missing_original_file() {
        let fixture = Fixture::new("", "");
        fs::remove_file(&fixture.original).unwrap();

        let (outcome, output) = fixture.run("yes\n");

        assert!(outcome.is_err());
        assert!(output.is_empty());
    }
}
