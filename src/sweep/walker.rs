//! Sweeper - recursive empty-directory evaluator and deletion gate

use std::fs;
use std::io;
use std::path::Path;

use crate::confirm::Confirm;
use crate::output::SweepOutput;

use super::config::SweepConfig;
use super::utils::is_excluded;

/// Post-order walker that deletes recursively empty directories.
///
/// A directory is eliminated when it contains no files, every subdirectory
/// was itself eliminated, and its depth falls inside the configured window.
/// Elimination bubbles up as a boolean: anything left on disk, for whatever
/// reason, reads as content to its parent.
pub struct Sweeper {
    config: SweepConfig,
}

impl Sweeper {
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Sweep the tree rooted at `root`.
    ///
    /// Returns whether the root itself was eliminated. `Err` only surfaces
    /// failures of the output channel; filesystem errors are reported and
    /// folded into the boolean so one bad subtree never aborts the scan.
    pub fn sweep(
        &self,
        root: &Path,
        output: &mut dyn SweepOutput,
        confirm: &mut dyn Confirm,
    ) -> io::Result<bool> {
        self.sweep_dir(root, 0, output, confirm)
    }

    fn sweep_dir(
        &self,
        path: &Path,
        depth: usize,
        output: &mut dyn SweepOutput,
        confirm: &mut dyn Confirm,
    ) -> io::Result<bool> {
        // A sibling deletion or an external process may have removed the
        // path since it was listed; soft failure, the scan goes on.
        if !path.is_dir() {
            if self.config.verbose {
                output.warn(&format!(
                    "not a directory or no longer exists: {}",
                    path.display()
                ))?;
            }
            return Ok(false);
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                output.error(&format!(
                    "cannot read directory '{}': {}",
                    path.display(),
                    e
                ))?;
                return Ok(false);
            }
        };

        let mut empty = true;
        let mut children = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => children.push(entry),
                Err(e) => {
                    // An unreadable entry may be content we cannot see.
                    output.error(&format!(
                        "cannot read entry in '{}': {}",
                        path.display(),
                        e
                    ))?;
                    empty = false;
                }
            }
        }
        children.sort_by_key(|entry| entry.file_name());

        for entry in children {
            let entry_path = entry.path();

            if is_excluded(&entry_path, &self.config.exclude_patterns) {
                // Excluded entries stay on disk, so the parent keeps content.
                empty = false;
                continue;
            }

            // file_type() does not follow symlinks; a symlinked directory
            // counts as plain content and is never walked through.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                empty = false;
                continue;
            }

            match self.config.max_depth {
                Some(max) if depth + 1 > max => {
                    // Unexamined subtree beyond the ceiling: its mere
                    // existence keeps this directory non-empty.
                    empty = false;
                }
                _ => {
                    if !self.sweep_dir(&entry_path, depth + 1, output, confirm)? {
                        empty = false;
                    }
                }
            }
        }

        if !empty || depth < self.config.min_depth {
            // An empty directory shallower than min_depth is left on disk,
            // so it must read as content to an in-range parent.
            return Ok(false);
        }

        if self.config.interactive && !self.config.dry_run && !confirm.confirm(path) {
            if self.config.verbose {
                output.skipped(path)?;
            }
            return Ok(false);
        }

        if self.config.dry_run {
            // Simulated elimination so emptiness chains compose exactly
            // like a real run would.
            output.would_delete(path)?;
            return Ok(true);
        }

        // Non-recursive removal: the directory is already empty on disk by
        // construction at this point.
        match fs::remove_dir(path) {
            Ok(()) => {
                output.deleted(path)?;
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if self.config.verbose {
                    output.warn(&format!(
                        "failed to delete (already gone?): {}",
                        path.display()
                    ))?;
                }
                Ok(false)
            }
            Err(e) => {
                output.error(&format!("cannot delete '{}': {}", path.display(), e))?;
                Ok(false)
            }
        }
    }
}
