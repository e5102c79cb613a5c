/// Parse a single line from a requirements manifest into `(name, version)`.
///
/// Blank lines and `#` comments yield `(None, None)`. Anything after the
/// first `@` is a source location and is ignored here. Only the first `==`
/// separates name from version; the rest of the line stays in the version.
pub fn parse_requirement(line: &str) -> (Option<String>, Option<String>) {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return (None, None);
    }

    let package_part = match line.find('@') {
        Some(idx) => &line[..idx],
        None => line,
    };

    let (name, version) = match package_part.split_once("==") {
        Some((name, version)) => (name, Some(version)),
        None => (package_part, None),
    };

    let version = version
        .filter(|v| !v.is_empty())
        .map(|v| v.trim().to_string());

    (Some(name.trim().to_string()), version)
}
