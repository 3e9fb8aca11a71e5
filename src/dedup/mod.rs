//! Deduplication: id collapsing across input lists and content
//! hashing for files already on disk.

pub mod hash;
pub mod ids;

pub use hash::md5_file;
pub use ids::sorted_unique;
