//! Line classification and id extraction for URL lists.

use crate::error::{Error, Result};

/// A platform-tagged identifier extracted from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannedId {
    /// An e621/e926 post id.
    E621(u64),
    /// A FurAffinity submission id.
    Furaffinity(u64),
}

/// Substrings identifying an e621/e926 post URL.
///
/// e926 shares the post id namespace with e621, so both map to the
/// same platform.
const E621_MARKERS: [&str; 4] = [
    "e621.net/post/show",
    "e621.net/posts/",
    "e926.net/post/show",
    "e926.net/posts/",
];

/// Substrings identifying a FurAffinity submission URL.
const FA_MARKERS: [&str; 2] = ["furaffinity.net/view/", "furaffinity.net/full/"];

/// Classify a line and extract its identifier.
///
/// Lines matching neither platform yield `Ok(None)`. A matched line
/// that does not contain a numeric id is a hard error: it means the
/// URL list is broken in a way worth stopping for.
pub fn parse_line(line: &str) -> Result<Option<ScannedId>> {
    if E621_MARKERS.iter().any(|marker| line.contains(marker)) {
        return parse_e621_id(line).map(|id| Some(ScannedId::E621(id)));
    }

    if FA_MARKERS.iter().any(|marker| line.contains(marker)) {
        return parse_furaffinity_id(line).map(|id| Some(ScannedId::Furaffinity(id)));
    }

    Ok(None)
}

/// Extract the post id from an e621/e926 URL.
///
/// Current URLs carry the id in the last path segment, optionally
/// followed by a query string. Legacy `/post/show/{id}/{tag}` URLs
/// carry it in the second-to-last segment.
fn parse_e621_id(line: &str) -> Result<u64> {
    let last = last_segment(line);
    let candidate = last.split('?').next().unwrap_or(last);

    if let Ok(id) = candidate.parse::<u64>() {
        return Ok(id);
    }

    second_to_last_segment(line)
        .and_then(|segment| segment.parse::<u64>().ok())
        .ok_or_else(|| Error::Scan(line.to_string()))
}

/// Extract the submission id from a FurAffinity URL.
///
/// `/view/{id}/` carries the id in the second-to-last segment,
/// `/view/{id}` and `/full/{id}` in the last.
fn parse_furaffinity_id(line: &str) -> Result<u64> {
    let candidate = if line.ends_with('/') {
        second_to_last_segment(line)
    } else {
        Some(last_segment(line))
    };

    candidate
        .and_then(|segment| segment.parse::<u64>().ok())
        .ok_or_else(|| Error::Scan(line.to_string()))
}

fn last_segment(line: &str) -> &str {
    line.rsplit('/').next().unwrap_or(line)
}

fn second_to_last_segment(line: &str) -> Option<&str> {
    let mut segments = line.rsplit('/');
    segments.next()?;
    segments.next()
}
