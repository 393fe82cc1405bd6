//! Sweep result reporting
//!
//! The walker reports through the `SweepOutput` trait so console output can
//! be swapped for an in-memory collector in tests. `ConsoleReporter` is the
//! real implementation: eliminated paths go to stdout, warnings and errors
//! to stderr.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Sink for everything the sweep has to say.
pub trait SweepOutput {
    /// A directory was removed from disk.
    fn deleted(&mut self, path: &Path) -> io::Result<()>;
    /// A directory would have been removed (dry-run).
    fn would_delete(&mut self, path: &Path) -> io::Result<()>;
    /// A qualifying directory was left in place after an interactive decline.
    fn skipped(&mut self, path: &Path) -> io::Result<()>;
    /// Non-fatal oddity worth mentioning.
    fn warn(&mut self, message: &str) -> io::Result<()>;
    /// Non-fatal failure localized to one subtree.
    fn error(&mut self, message: &str) -> io::Result<()>;
}

/// Console reporter writing to stdout/stderr with optional colors.
pub struct ConsoleReporter {
    stdout: StandardStream,
    stderr: StandardStream,
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, verbose: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
            verbose,
        }
    }

    fn tagged(&mut self, tag: &str, color: Color, rest: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.stdout, "{}", tag)?;
        self.stdout.reset()?;
        writeln!(self.stdout, "{}", rest)
    }
}

impl SweepOutput for ConsoleReporter {
    fn deleted(&mut self, path: &Path) -> io::Result<()> {
        if self.verbose {
            self.tagged("Deleted:", Color::Green, &format!(" {}", path.display()))
        } else {
            writeln!(self.stdout, "{}", path.display())
        }
    }

    fn would_delete(&mut self, path: &Path) -> io::Result<()> {
        self.tagged(
            "[DRY RUN]",
            Color::Yellow,
            &format!(" Would delete empty dir: {}", path.display()),
        )
    }

    fn skipped(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.stdout, "Skipped (interactive): {}", path.display())
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.stderr, "warning:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", message)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.stderr, "error:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", message)
    }
}
