use super::operator::Operator;
use state::State;
use std::ops::Range;

mod state;


/// The ranged indexes of a matched pattern. These are always 0-indexed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchRanges {
    /// The full range of the matched pattern.
    pub full_match: Range<usize>,
    /// For each operator, the range consumed by each of its repetitions.
    /// An operator that repeated zero times has an empty list.
    pub repetitions: Vec<Vec<Range<usize>>>,
}

impl MatchRanges {
    /// Returns the matched bytes of `subject`, or `None` if `subject` is too
    /// short to hold the match.
    #[must_use]
    pub fn as_bytes<'a>(&self, subject: &'a [u8]) -> Option<&'a [u8]> {
        subject.get(self.full_match.clone())
    }

    /// The span covered by all repetitions of operator `index`, if it matched
    /// at least once.
    #[must_use]
    pub fn operator_span(&self, index: usize) -> Option<Range<usize>> {
        let reps = self.repetitions.get(index)?;
        Some(reps.first()?.start..reps.last()?.end)
    }
}

/// Tries to find the first match of the operators in the input string,
/// starting the search at `start_index` (0-based).
///
/// Each start offset is tried in turn up to and including the end of the
/// input, so a pattern that can match nothing matches at the end.
#[must_use]
pub fn find_first_match(
    operators: &mut [Operator],
    input: &[u8],
    start_index: usize,
) -> Option<MatchRanges> {
    for i in start_index..=input.len() {
        if let Some(full_match) = match_at(operators, input, i) {
            return Some(MatchRanges {
                full_match,
                repetitions: operators.iter().map(|op| op.matches().to_vec()).collect(),
            });
        }
    }

    None
}

/// Matches the operators against `input` anchored at `start`.
///
/// Every operator is applied greedily; when one cannot reach its minimum
/// repeat count the nearest earlier operator that can spare a repetition
/// gives one up and matching resumes after it. On success each operator's
/// match stack holds the ranges it consumed.
#[must_use]
pub fn match_at(operators: &mut [Operator], input: &[u8], start: usize) -> Option<Range<usize>> {
    for op in operators.iter_mut() {
        op.clear_matches();
    }

    if start > input.len() {
        return None;
    }

    let mut state = State::new(start);

    while let Some(op) = operators.get_mut(state.op_index) {
        while op.can_repeat(op.num_matches()) {
            let mut unit = state.unit();
            if !op.match_one(input, &mut unit) {
                break;
            }
            state.current_pos = unit.end;
            op.push_match(unit);
        }

        if op.num_matches() >= op.min_repeat() {
            state.op_index += 1;
            continue;
        }

        op.clear_matches();
        if !backtrack(operators, &mut state) {
            trace!("no match at {start}");
            return None;
        }
    }

    Some(state.span())
}

/// Retreats from the operator at `state.op_index` to the nearest earlier
/// operator that can give up a repetition, pops it, and positions `state`
/// at the operator after it. Returns `false` if no operator can give way.
fn backtrack(operators: &mut [Operator], state: &mut State) -> bool {
    while state.op_index > 0 {
        state.op_index -= 1;
        let op = &mut operators[state.op_index];

        if op.num_matches() > op.min_repeat()
            && let Some(given_up) = op.pop_match()
        {
            trace!(
                "operator {} gives up {:?}, {} repetitions left",
                state.op_index,
                given_up,
                op.num_matches()
            );
            state.current_pos = given_up.start;
            state.op_index += 1;
            return true;
        }

        op.clear_matches();
    }

    false
}
