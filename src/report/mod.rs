//! User-facing progress and summary output

pub mod generator;

pub use generator::generate_summary;

use colored::*;

/// Announce the next step of a packaging run
pub fn progress(step: &str) {
    println!("{} {}", "==>".blue().bold(), step.bold());
}
