//! Filesystem concerns: safe path-segment names and destination
//! directories.

pub mod naming;
pub mod paths;

pub use naming::{artist_directory, author_directory, canonicalize, title_case};
pub use paths::ensure_dir;
