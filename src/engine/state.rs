use std::ops::Range;

/// Cursor of a single match attempt.
#[derive(Clone, Copy, Debug)]
pub(super) struct State {
    /// Where this attempt started in the subject.
    pub search_start_pos: usize,
    /// The next unconsumed subject index.
    pub current_pos: usize,
    /// The operator being applied.
    pub op_index: usize,
}

impl State {
    pub fn new(start_pos: usize) -> Self {
        Self {
            search_start_pos: start_pos,
            current_pos: start_pos,
            op_index: 0,
        }
    }

    /// An empty range at the cursor, ready for one more unit.
    #[inline]
    pub fn unit(&self) -> Range<usize> {
        self.current_pos..self.current_pos
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.search_start_pos..self.current_pos
    }
}
