//! Hollow - Recursively finds and deletes empty directories

pub mod confirm;
pub mod output;
pub mod sweep;

pub use confirm::{Confirm, ConsoleConfirm, ScriptedConfirm};
pub use output::{ConsoleReporter, SweepOutput};
pub use sweep::{SweepConfig, Sweeper};
