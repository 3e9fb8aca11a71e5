//! The run report: scan summary and one line per item.
//!
//! Item lines are assembled in stages (counter, destination, result),
//! so the partial pieces are printed without a newline and flushed.

use std::io::Write;
use std::path::Path;

use console::style;

use crate::download::Outcome;
use crate::error::Error;

/// Print the post-scan summary block.
pub fn print_scan_summary(e6_count: usize, fa_count: usize) {
    println!("{:>7} e6 posts", e6_count);
    println!("{:>7} FA posts", fa_count);
    println!("{:>7} total\n", e6_count + fa_count);
}

/// Print the running counter that opens an item's line.
pub fn print_item_counter(done: usize, total: usize, width: usize) {
    print!("{:>width$} / {}: ", done, total, width = width);
    let _ = std::io::stdout().flush();
}

/// Print the item's destination path, left-justified so the result
/// labels line up.
pub fn print_destination(path: &Path) {
    print!("{:<70}", path.display());
    let _ = std::io::stdout().flush();
}

/// Print the outcome label, closing the item's line.
pub fn print_outcome(outcome: Outcome) {
    let styled = match outcome {
        Outcome::Done => style(outcome).green(),
        Outcome::AlreadyExists => style(outcome).dim(),
        Outcome::NotFound | Outcome::SkippedBlacklist | Outcome::RemovedBlacklist => {
            style(outcome).yellow()
        }
    };
    println!("{}", styled);
}

/// Print a per-item error, closing the item's line.
pub fn print_item_error(error: &Error) {
    println!("{}", style(error).red());
}
