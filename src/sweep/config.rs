//! Configuration for the sweep

/// Configuration for a single sweep over a directory tree.
///
/// Immutable for the duration of the scan; the walker never mutates it.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Report what would be deleted without touching the filesystem.
    pub dry_run: bool,
    /// Print extra detail about actions and skips.
    pub verbose: bool,
    /// Ask for confirmation before each deletion.
    pub interactive: bool,
    /// Only delete directories at or deeper than this depth (root is 0).
    pub min_depth: usize,
    /// Do not descend into directories deeper than this depth.
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Glob patterns for entry names to leave alone entirely.
    pub exclude_patterns: Vec<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbose: false,
            interactive: false,
            min_depth: 0,
            max_depth: None,
            exclude_patterns: Vec::new(),
        }
    }
}
