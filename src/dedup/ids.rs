//! Identifier deduplication.

use std::collections::BTreeSet;

/// Drop duplicate ids and return the rest sorted ascending.
///
/// The same post linked from several lists (or several times in one)
/// is downloaded once, and the run proceeds in id order.
pub fn sorted_unique(ids: Vec<u64>) -> Vec<u64> {
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
