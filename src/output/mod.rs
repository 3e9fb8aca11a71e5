//! Console output for the run report.

pub mod console;
pub mod report;

pub use self::console::{print_error, print_warning};
pub use self::report::{
    print_destination, print_item_counter, print_item_error, print_outcome, print_scan_summary,
};
