use crate::parser::parse_requirement;
use indexmap::IndexMap;
use serde::Serialize;

/// A dependency as declared on one manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Package name, exactly as written (no case normalization)
    pub name: String,
    /// Exact `==` version, if one was given
    pub version: Option<String>,
    /// Whether the raw line carried an `@` source location
    pub has_file_spec: bool,
}

impl DependencyRecord {
    /// Build a record from a raw manifest line, or `None` if the line
    /// declares nothing (blank, comment, or empty name).
    pub fn from_line(line: &str) -> Option<Self> {
        let (name, version) = parse_requirement(line);
        let name = name.filter(|n| !n.is_empty())?;

        Some(Self {
            name,
            version,
            // Raw substring test, independent of how the parser split the line
            has_file_spec: line.contains('@'),
        })
    }
}

/// A whole manifest reduced to a name-keyed mapping, in first-declaration order
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    packages: IndexMap<String, DependencyRecord>,
}

impl Manifest {
    /// Parse manifest text. A name declared twice keeps the position of its
    /// first declaration and the contents of its last.
    pub fn parse(content: &str) -> Self {
        let packages = content
            .split('\n')
            .filter_map(DependencyRecord::from_line)
            .map(|record| (record.name.clone(), record))
            .collect();

        Self { packages }
    }

    pub fn get(&self, name: &str) -> Option<&DependencyRecord> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over all records in manifest order
    pub fn records(&self) -> impl Iterator<Item = &DependencyRecord> {
        self.packages.values()
    }
}

/// A package whose recorded version differs between the two manifests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMismatch {
    #[serde(rename = "package")]
    pub name: String,
    pub original_version: Option<String>,
    pub new_version: Option<String>,
}

/// Outcome of comparing an original manifest against a new one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Names in the original but not in the new manifest
    pub missing_in_new: Vec<String>,
    /// Names in the new but not in the original manifest
    pub missing_in_original: Vec<String>,
    pub version_mismatches: Vec<VersionMismatch>,
    /// Names that still carry a file spec in the new manifest
    pub remaining_file_specs: Vec<String>,
    /// Names whose file spec was stripped (the expected outcome)
    pub removed_file_specs: Vec<String>,
    /// Number of distinct packages in the original manifest
    pub total_packages: usize,
    pub is_valid: bool,
}

impl ComparisonResult {
    /// Total number of entries across the lists that invalidate a result
    pub fn discrepancy_count(&self) -> usize {
        self.missing_in_new.len()
            + self.missing_in_original.len()
            + self.version_mismatches.len()
            + self.remaining_file_specs.len()
    }
}
