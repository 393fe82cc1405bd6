//! Shared utility functions for the sweep walker

use std::path::Path;

use glob::Pattern;

/// Check if a path should be excluded based on its name and exclude patterns.
///
/// Excluded entries are left untouched by the sweep and count as content
/// in their parent directory.
pub fn is_excluded(path: &Path, exclude_patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    for pattern in exclude_patterns {
        if name == *pattern || glob_match(pattern, &name) {
            return true;
        }
    }

    false
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
