#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    /// Create a new temporary project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file in the project with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let file_path = self.dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Get the absolute path to a file in the project
    pub fn file_path(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Read a file in the project
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file_path(relative_path)).expect("Failed to read file")
    }

    /// Names of the files in a project subdirectory, sorted
    pub fn list_dir(&self, relative_path: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.file_path(relative_path))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A frozen environment as `pip freeze` prints it inside conda
pub fn sample_frozen_requirements() -> &'static str {
    r#"certifi @ file:///croot/certifi_1725551672989/work/certifi
numpy==1.26.4
pandas==2.2.3
python-dotenv @ file:///home/conda/feedstock_root/build_artifacts/python-dotenv-split_1706018097647/work
requests==2.32.3
"#
}

/// The same environment with file specs removed
pub fn sample_clean_requirements() -> &'static str {
    r#"certifi
numpy==1.26.4
pandas==2.2.3
python-dotenv
requests==2.32.3
"#
}

/// Project with a frozen requirements.txt
pub fn create_temp_project_with_requirements() -> TempProject {
    let project = TempProject::new();
    project.create_file("requirements.txt", sample_frozen_requirements());
    project
}

/// Project with `count` old backups in backups/
pub fn create_temp_project_with_backups(count: usize) -> TempProject {
    let project = TempProject::new();
    for i in 0..count {
        project.create_file(
            &format!("backups/requirements_2024010{i}_120000.bak"),
            "pandas==2.2.3\n",
        );
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
    project
}
