//! Per-deletion confirmation sources
//!
//! Interactive mode blocks on a confirmation inside the recursive walk.
//! The `Confirm` trait seams that prompt so tests (or embedders) can
//! substitute a scripted answer source for the console.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// A source of yes/no answers for per-directory deletion prompts.
pub trait Confirm {
    /// Ask whether `path` should be deleted. Blocks until answered.
    fn confirm(&mut self, path: &Path) -> bool;
}

/// Prompts on stdout and reads a free-form answer from stdin.
///
/// Only an answer whose first character is 'y' or 'Y' confirms; empty or
/// unrecognized input declines, as does a read failure.
pub struct ConsoleConfirm;

impl Confirm for ConsoleConfirm {
    fn confirm(&mut self, path: &Path) -> bool {
        print!("Delete '{}'? [y/N]: ", path.display());
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

/// Answers prompts from a pre-recorded list, in order.
///
/// Once the list is exhausted every further prompt is declined, matching
/// the console default.
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    fallback: bool,
}

impl ScriptedConfirm {
    pub fn new(answers: Vec<bool>) -> Self {
        Self {
            answers: answers.into(),
            fallback: false,
        }
    }

    /// Confirm every prompt.
    pub fn always_yes() -> Self {
        Self {
            answers: VecDeque::new(),
            fallback: true,
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, _path: &Path) -> bool {
        self.answers.pop_front().unwrap_or(self.fallback)
    }
}

/// Interpret a free-form prompt answer: first character 'y', case-insensitive.
fn is_yes(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
