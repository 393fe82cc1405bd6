//! CLI entry point for hollow

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use hollow::{ConsoleConfirm, ConsoleReporter, SweepConfig, Sweeper};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hollow")]
#[command(about = "Recursively finds and deletes empty directories")]
#[command(version)]
struct Args {
    /// Directory to scan
    path: PathBuf,

    /// Show what would be deleted without actually deleting
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Print more info about actions taken
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Ask for confirmation before deleting each directory
    /// (slow for large trees: the scan blocks on every prompt)
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Only delete directories at or deeper than N (the scan root is 0)
    #[arg(long = "min-depth", value_name = "N", default_value = "0")]
    min_depth: usize,

    /// Do not descend into directories deeper than N
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Leave entries matching pattern alone (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help/--version print to stdout and exit 0; every usage
            // error goes to stderr and exits 1
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Some(max) = args.max_depth {
        if args.min_depth > max {
            eprintln!(
                "hollow: --min-depth ({}) cannot be greater than --max-depth ({})",
                args.min_depth, max
            );
            process::exit(1);
        }
    }

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.exists() {
        eprintln!(
            "hollow: target directory does not exist: {}",
            root.display()
        );
        process::exit(1);
    }
    if !root.is_dir() {
        eprintln!("hollow: target path is not a directory: {}", root.display());
        process::exit(1);
    }

    let config = SweepConfig {
        dry_run: args.dry_run,
        verbose: args.verbose,
        interactive: args.interactive,
        min_depth: args.min_depth,
        max_depth: args.max_depth,
        exclude_patterns: args.exclude.clone(),
    };

    if args.verbose {
        println!("Starting scan in: {}", root.display());
        println!(
            "Options: dry_run={} interactive={} min_depth={} max_depth={}",
            config.dry_run,
            config.interactive,
            config.min_depth,
            config
                .max_depth
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
        );
    }

    let mut reporter = ConsoleReporter::new(should_use_color(args.color), args.verbose);
    let mut confirm = ConsoleConfirm;

    // Traversal errors are reported by the walker and never change the
    // exit code; the scan is best-effort.
    if let Err(e) = Sweeper::new(config).sweep(&root, &mut reporter, &mut confirm) {
        eprintln!("hollow: error writing output: {}", e);
        process::exit(1);
    }

    if args.verbose {
        println!("Scan done");
    }
}
