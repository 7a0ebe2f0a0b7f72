#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Question, // ? (0 or 1)
    Star,     // * (0 or more)
    Plus,     // + (1 or more)
}

impl Quantifier {
    /// Returns the `(min, max)` repeat bounds, where a `max` of `None` is
    /// unbounded.
    #[must_use]
    pub const fn bounds(self) -> (usize, Option<usize>) {
        match self {
            Quantifier::Question => (0, Some(1)),
            Quantifier::Star => (0, None),
            Quantifier::Plus => (1, None),
        }
    }
}
