//! One-shot helpers that compile a pattern and search with it.

use super::{Pattern, Result, engine::MatchRanges};
use std::ops::Range;

mod iter;

pub use self::iter::FindIter;

/// Returns `true` if `pattern` matches anywhere in `text`.
pub fn is_match(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>) -> Result<bool> {
    Ok(Pattern::new(pattern)?.is_match(text))
}

/// Finds the leftmost match of `pattern` in `text`.
pub fn find(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>) -> Result<Option<MatchRanges>> {
    Ok(Pattern::new(pattern)?.find(text))
}

/// Returns the spans of every non-overlapping match of `pattern` in `text`.
pub fn find_all(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>) -> Result<Vec<Range<usize>>> {
    let mut pattern = Pattern::new(pattern)?;
    Ok(pattern
        .find_iter(text.as_ref())
        .map(|m| m.full_match)
        .collect())
}
