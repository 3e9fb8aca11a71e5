//! Per-item outcomes.

use std::fmt;

/// What happened to a single post or submission.
///
/// All of these are normal control flow, reported at the end of the
/// item's output line; errors are a separate channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fetched and written to disk.
    Done,
    /// The destination already holds the file.
    AlreadyExists,
    /// The media was removed from the platform.
    NotFound,
    /// A blacklisted tag matched; nothing was on disk.
    SkippedBlacklist,
    /// A blacklisted tag matched and the on-disk copy was deleted.
    RemovedBlacklist,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Done => "done",
            Outcome::AlreadyExists => "already exists",
            Outcome::NotFound => "not found",
            Outcome::SkippedBlacklist => "skipped (blacklist)",
            Outcome::RemovedBlacklist => "removed (blacklist)",
        };
        write!(f, "{}", label)
    }
}
