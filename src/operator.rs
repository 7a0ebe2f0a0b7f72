//! A single quantified matching unit of a compiled pattern.

use super::{CharSet, Error, Result};
use std::ops::Range;

pub mod quantifier;

pub use quantifier::Quantifier;

/// What a single application of an [`Operator`] matches.
#[derive(Clone, PartialEq, Debug)]
pub enum OperatorKind {
    Literal(u8),
    Any,                    // .
    Subset(CharSet),        // [...]
    NegatedSubset(CharSet), // [^...]
}

impl OperatorKind {
    #[inline]
    fn accepts(&self, b: u8) -> bool {
        match self {
            OperatorKind::Literal(lit) => *lit == b,
            OperatorKind::Any => true,
            OperatorKind::Subset(set) => set.contains(b),
            OperatorKind::NegatedSubset(set) => !set.contains(b),
        }
    }
}

/// One unit of a pattern together with how often it may repeat and the
/// ranges it has matched so far in the current attempt.
#[derive(Clone, PartialEq, Debug)]
pub struct Operator {
    kind: OperatorKind,
    min_repeat: usize,
    max_repeat: Option<usize>,
    matches: Vec<Range<usize>>,
}

impl Operator {
    /// Creates an operator that must apply exactly once.
    #[must_use]
    pub fn new(kind: OperatorKind) -> Self {
        Self {
            kind,
            min_repeat: 1,
            max_repeat: Some(1),
            matches: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &OperatorKind {
        &self.kind
    }

    #[must_use]
    pub fn min_repeat(&self) -> usize {
        self.min_repeat
    }

    /// The maximum repeat count, or `None` if unbounded.
    #[must_use]
    pub fn max_repeat(&self) -> Option<usize> {
        self.max_repeat
    }

    /// Sets both repeat bounds at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepeat`] if `max` is bounded and below `min`.
    /// The operator is left unchanged on error.
    pub fn set_repeat(&mut self, min: usize, max: Option<usize>) -> Result<()> {
        if max.is_some_and(|max| max < min) {
            return Err(Error::InvalidRepeat { min, max });
        }
        self.min_repeat = min;
        self.max_repeat = max;
        Ok(())
    }

    pub fn set_min_repeat(&mut self, min: usize) -> Result<()> {
        self.set_repeat(min, self.max_repeat)
    }

    pub fn set_max_repeat(&mut self, max: Option<usize>) -> Result<()> {
        self.set_repeat(self.min_repeat, max)
    }

    /// Applies the bounds of `quantifier` to this operator.
    pub fn quantify(&mut self, quantifier: Quantifier) {
        let (min, max) = quantifier.bounds();
        self.min_repeat = min;
        self.max_repeat = max;
    }

    /// Returns `true` if another repetition is allowed after `count`.
    #[inline]
    #[must_use]
    pub fn can_repeat(&self, count: usize) -> bool {
        self.max_repeat.is_none_or(|max| count < max)
    }

    /// Tries to match one unit of `subject` at `range.start`, extending
    /// `range.end` by one on success. The range is left alone on failure.
    #[inline]
    pub fn match_one(&self, subject: &[u8], range: &mut Range<usize>) -> bool {
        if let Some(&b) = subject.get(range.start)
            && self.kind.accepts(b)
        {
            range.end += 1;
            true
        } else {
            false
        }
    }

    /// Forgets every recorded match, ready for a fresh attempt.
    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }

    pub fn push_match(&mut self, range: Range<usize>) {
        self.matches.push(range);
    }

    /// Removes and returns the most recently recorded match.
    pub fn pop_match(&mut self) -> Option<Range<usize>> {
        self.matches.pop()
    }

    #[must_use]
    pub fn num_matches(&self) -> usize {
        self.matches.len()
    }

    /// The ranges matched by each repetition, in order.
    #[must_use]
    pub fn matches(&self) -> &[Range<usize>] {
        &self.matches
    }
}
