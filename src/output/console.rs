//! Console output utilities.

use console::style;

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}
