use crate::types::{ComparisonResult, Manifest, VersionMismatch};

/// Compare the text of an original manifest against a new one.
///
/// Never fails: lines that cannot be read as a dependency are skipped.
pub fn compare(original_content: &str, new_content: &str) -> ComparisonResult {
    compare_manifests(
        &Manifest::parse(original_content),
        &Manifest::parse(new_content),
    )
}

/// Compare two already-parsed manifests
pub fn compare_manifests(original: &Manifest, new: &Manifest) -> ComparisonResult {
    let mut missing_in_new = Vec::new();
    let mut missing_in_original = Vec::new();
    let mut version_mismatches = Vec::new();
    let mut remaining_file_specs = Vec::new();
    let mut removed_file_specs = Vec::new();

    for record in new.records() {
        if !original.contains(&record.name) {
            missing_in_original.push(record.name.clone());
        }
    }

    for original_record in original.records() {
        let Some(new_record) = new.get(&original_record.name) else {
            missing_in_new.push(original_record.name.clone());
            continue;
        };

        if original_record.version != new_record.version {
            version_mismatches.push(VersionMismatch {
                name: original_record.name.clone(),
                original_version: original_record.version.clone(),
                new_version: new_record.version.clone(),
            });
        }

        // Only a spec present in the original is checked
        if original_record.has_file_spec {
            if new_record.has_file_spec {
                remaining_file_specs.push(original_record.name.clone());
            } else {
                removed_file_specs.push(original_record.name.clone());
            }
        }
    }

    let is_valid = missing_in_new.is_empty()
        && missing_in_original.is_empty()
        && version_mismatches.is_empty()
        && remaining_file_specs.is_empty();

    ComparisonResult {
        missing_in_new,
        missing_in_original,
        version_mismatches,
        remaining_file_specs,
        removed_file_specs,
        total_packages: original.len(),
        is_valid,
    }
}
