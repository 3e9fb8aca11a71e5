//! URL-list scanning.
//!
//! Input files are plain text scanned line by line; anything that does
//! not look like a supported post URL is ignored, so lists can carry
//! comments or notes between links.

pub mod parser;

pub use parser::{parse_line, ScannedId};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Identifiers gathered from the input files, grouped per platform.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScannedIds {
    pub e621: Vec<u64>,
    pub furaffinity: Vec<u64>,
}

/// Scan a single URL-list file.
pub fn scan_list_file(path: &Path) -> Result<ScannedIds> {
    let content = fs::read_to_string(path)?;
    let mut ids = ScannedIds::default();

    for line in content.lines() {
        match parse_line(line)? {
            Some(ScannedId::E621(id)) => ids.e621.push(id),
            Some(ScannedId::Furaffinity(id)) => ids.furaffinity.push(id),
            None => {}
        }
    }

    tracing::debug!(
        "{}: {} e6, {} FA",
        path.display(),
        ids.e621.len(),
        ids.furaffinity.len()
    );

    Ok(ids)
}

/// Scan every URL-list file, concatenating the per-platform ids in
/// file order.
pub fn scan_list_files(paths: &[PathBuf]) -> Result<ScannedIds> {
    let mut all = ScannedIds::default();

    for path in paths {
        let ids = scan_list_file(path)?;
        all.e621.extend(ids.e621);
        all.furaffinity.extend(ids.furaffinity);
    }

    Ok(all)
}
