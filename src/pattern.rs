use super::{
    Result,
    engine::{self, MatchRanges},
    operator::Operator,
    parser::parse_pattern,
    search::FindIter,
};
use std::ops::Range;

/// A compiled pattern.
///
/// Matching records each operator's repetitions inside the operator itself,
/// so every matching method takes `&mut self`. Clone the pattern to match
/// from several threads at once.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    source: Vec<u8>,
    operators: Vec<Operator>,
}

impl Pattern {
    /// Compiles `pattern`.
    pub fn new(pattern: impl AsRef<[u8]>) -> Result<Self> {
        parse_pattern(pattern.as_ref())
    }

    #[must_use]
    pub(crate) fn from_parts(source: Vec<u8>, operators: Vec<Operator>) -> Self {
        Self { source, operators }
    }

    #[cfg(test)]
    pub(crate) fn operators_mut(&mut self) -> &mut [Operator] {
        &mut self.operators
    }

    /// The pattern string this was compiled from.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.source
    }

    /// Matches the pattern starting exactly at `start`, returning the
    /// consumed span.
    pub fn matches_at(&mut self, subject: impl AsRef<[u8]>, start: usize) -> Option<Range<usize>> {
        engine::match_at(&mut self.operators, subject.as_ref(), start)
    }

    /// Returns `true` if the pattern matches anywhere in `subject`.
    pub fn is_match(&mut self, subject: impl AsRef<[u8]>) -> bool {
        self.find(subject).is_some()
    }

    /// Finds the leftmost match in `subject`.
    pub fn find(&mut self, subject: impl AsRef<[u8]>) -> Option<MatchRanges> {
        self.find_at(subject, 0)
    }

    /// Finds the leftmost match in `subject` that starts at or after `start`.
    pub fn find_at(&mut self, subject: impl AsRef<[u8]>, start: usize) -> Option<MatchRanges> {
        engine::find_first_match(&mut self.operators, subject.as_ref(), start)
    }

    /// Iterates over successive non-overlapping matches in `subject`.
    pub fn find_iter<'p, 's, S>(&'p mut self, subject: &'s S) -> FindIter<'p, 's>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        FindIter::new(self, subject.as_ref())
    }
}

impl std::ops::Deref for Pattern {
    type Target = [Operator];

    fn deref(&self) -> &Self::Target {
        &self.operators
    }
}

impl PartialEq<&[Operator]> for Pattern {
    fn eq(&self, other: &&[Operator]) -> bool {
        self.operators == *other
    }
}

impl std::str::FromStr for Pattern {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
