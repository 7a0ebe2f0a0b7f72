//! Byte set type backing the `[...]` operators.

use std::ops::Bound;

/// The error type used by [`CharSet`].
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    /// An invalid range was given.
    #[error("invalid range '{}-{}'", _0.escape_ascii(), _1.escape_ascii())]
    Range(u8, u8),
}

/// A set of bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct CharSet {
    bytes: [bool; 256],
}

impl Default for CharSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CharSet {
    /// Creates a new empty set.
    #[must_use]
    pub const fn new() -> Self {
        CharSet {
            bytes: [false; 256],
        }
    }

    /// Adds the given byte to the set.
    #[inline]
    pub const fn add_byte(&mut self, b: u8) {
        self.bytes[b as usize] = true;
    }

    /// Adds an inclusive range of bytes to the set.
    ///
    /// # Errors
    ///
    /// If the start of the range is after the end of the range, an [`Error`]
    /// is returned and the set is left unchanged.
    pub fn add_range(&mut self, start: u8, end: u8) -> Result<(), Error> {
        if start <= end {
            self.bytes[to_usize(start..=end)].fill(true);
            Ok(())
        } else {
            Err(Error::Range(start, end))
        }
    }

    /// Returns `true` if the set contains the given byte.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.bytes[b as usize]
    }

    /// Returns `true` if no byte is in the set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.bytes.contains(&true)
    }

    /// Iterates over the members of the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl FromIterator<u8> for CharSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = CharSet::new();
        for b in iter {
            set.add_byte(b);
        }
        set
    }
}

impl core::fmt::Debug for CharSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let members: Vec<u8> = self.iter().collect();
        write!(f, "CharSet(\"{}\")", members.escape_ascii())
    }
}

#[inline]
fn to_usize<R: std::ops::RangeBounds<u8>>(r: R) -> (Bound<usize>, Bound<usize>) {
    (
        r.start_bound().map(|n| usize::from(*n)),
        r.end_bound().map(|n| usize::from(*n)),
    )
}
