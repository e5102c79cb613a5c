pub mod diff;
pub mod output;
pub mod parser;
pub mod strip;
pub mod types;

// Re-export commonly used types at crate root
pub use diff::{compare, compare_manifests};
pub use output::ReportRenderer;
pub use parser::parse_requirement;
pub use strip::{strip_file_spec, strip_file_specs};
pub use types::{ComparisonResult, DependencyRecord, Manifest, VersionMismatch};
