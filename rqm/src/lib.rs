pub mod backup;
pub mod cli;
pub mod error;
pub mod freeze;
pub mod logging;
pub mod prompt;
pub mod updater;

pub use backup::{BackupEntry, BackupManager};
pub use cli::Args;
pub use error::UpdateError;
pub use updater::{RequirementsUpdater, UpdateOutcome};

// Re-export core types for convenience
pub use requirements_manager_core::{ReportRenderer, compare, strip_file_specs};
