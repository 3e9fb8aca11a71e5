//! yiffdl - bulk downloader for e621/e926 posts and FurAffinity
//! submissions.
//!
//! This library scans plain-text URL lists for post links and
//! downloads the referenced media into per-artist directories.
//!
//! # Features
//!
//! - Scans arbitrary text files for e621/e926 and FurAffinity URLs
//! - Deduplicates ids across all input lists
//! - Skips files already on disk (hash-verified for e621)
//! - Skips or removes posts carrying blacklisted tags
//! - Canonicalizes path segments per a configured character list
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use yiffdl::{config::Config, scan::scan_list_file};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.json"))?;
//!     let ids = scan_list_file(Path::new("urls.txt"))?;
//!     println!("{} e6 / {} FA", ids.e621.len(), ids.furaffinity.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod scan;

// Re-exports for convenience
pub use api::{E621Client, FaClient};
pub use config::Config;
pub use download::{download_post, download_submission, Outcome};
pub use error::{Error, Result};
pub use scan::ScannedIds;
