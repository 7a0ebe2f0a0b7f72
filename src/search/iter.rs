use crate::{Pattern, engine::MatchRanges};

/// An iterator over successive non-overlapping matches of a [`Pattern`].
pub struct FindIter<'p, 's> {
    pattern: &'p mut Pattern,
    bytes: &'s [u8],
    current_pos: usize,
}

impl<'p, 's> FindIter<'p, 's> {
    pub(crate) fn new(pattern: &'p mut Pattern, bytes: &'s [u8]) -> Self {
        Self {
            pattern,
            bytes,
            current_pos: 0,
        }
    }
}

impl Iterator for FindIter<'_, '_> {
    type Item = MatchRanges;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_pos > self.bytes.len() {
            return None;
        }

        let found = self.pattern.find_at(self.bytes, self.current_pos)?;
        self.current_pos = if found.full_match.is_empty() {
            found.full_match.end + 1
        } else {
            found.full_match.end
        };
        Some(found)
    }
}
