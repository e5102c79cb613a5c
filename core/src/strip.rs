/// Drop the `@` source location from a manifest line.
///
/// Lines with an `@` become the text before it plus a newline; all other
/// lines (including their line ending) are returned untouched.
pub fn strip_file_spec(line: &str) -> String {
    match line.split_once('@') {
        Some((package, _)) => format!("{}\n", package.trim_end()),
        None => line.to_string(),
    }
}

/// Strip every line of a manifest
pub fn strip_file_specs(content: &str) -> String {
    content.split_inclusive('\n').map(strip_file_spec).collect()
}
