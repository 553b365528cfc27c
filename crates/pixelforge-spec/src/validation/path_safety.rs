//! Path and file name safety checks.

/// Checks if a bare output file name (no directories) is safe.
pub fn is_safe_file_name(name: &str) -> bool {
    file_name_errors(name).is_empty()
}

/// Checks if a relative output path is safe.
pub fn is_safe_relative_path(path: &str) -> bool {
    relative_path_errors(path).is_empty()
}

pub(super) fn file_name_errors(name: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("file name cannot be empty".to_string());
        return errors;
    }

    if name.contains('/') || name.contains('\\') {
        errors.push(format!(
            "file name must not contain path separators: '{}'",
            name
        ));
    }

    if name == "." || name == ".." {
        errors.push(format!("file name must not be a directory alias: '{}'", name));
    }

    if name.chars().any(|c| c.is_control() || c == ':') {
        errors.push(format!(
            "file name contains an invalid character: '{}'",
            name.escape_debug()
        ));
    }

    errors
}

pub(super) fn relative_path_errors(path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if path.is_empty() {
        errors.push("path cannot be empty".to_string());
        return errors;
    }

    if path.starts_with('/') || path.starts_with('\\') {
        errors.push(format!("path must be relative, not absolute: '{}'", path));
    }

    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        errors.push(format!("path must not contain drive letter: '{}'", path));
    }

    if path.contains('\\') {
        errors.push(format!("path must use forward slashes only: '{}'", path));
    }

    if path.split('/').any(|segment| segment == "..") {
        errors.push(format!("path must not contain '..' segments: '{}'", path));
    }

    errors
}
