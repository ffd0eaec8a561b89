//! Deterministic trace replay.
//!
//! Replay is purely a function of the trace and the starting state; it
//! never re-derives ordering from comparisons. Adapters hand in callbacks
//! for the two visual effects: a transient highlight of the compared
//! positions and a committed exchange of their magnitudes.

use crate::error::SortError;
use crate::step::{Step, Trace};

/// Apply `trace` to `state` in order, invoking `on_highlight(i, j)` for
/// every non-cascade step with indices and `on_commit(i, j)` after every
/// applied exchange.
///
/// Marker steps are skipped. Cascade steps skip the highlight but still
/// apply their exchange; dropping it would make the final visual state
/// diverge from the sorted array. Indices are bounds checked against
/// `state`, failing fast on a corrupt or mismatched trace.
pub fn replay<T, H, C>(
    state: &mut [T],
    trace: &Trace,
    mut on_highlight: H,
    mut on_commit: C,
) -> Result<(), SortError>
where
    T: Copy,
    H: FnMut(usize, usize),
    C: FnMut(usize, usize),
{
    for step in trace.iter() {
        let Some((i, j)) = step.indices else {
            continue;
        };
        check_index(i, state.len())?;
        check_index(j, state.len())?;

        if !step.cascade {
            on_highlight(i, j);
        }
        if step.swap {
            state.swap(i, j);
            on_commit(i, j);
        }
    }
    Ok(())
}

/// Replay without observers; applies only the exchanges.
///
/// This is the equivalence half of the core contract: applied to a copy of
/// the pre-sort sequence it must reproduce the strategy's final order.
pub fn apply_trace<T: Copy>(state: &mut [T], trace: &Trace) -> Result<(), SortError> {
    replay(state, trace, |_, _| {}, |_, _| {})
}

#[inline]
fn check_index(index: usize, len: usize) -> Result<(), SortError> {
    if index >= len {
        return Err(SortError::StepOutOfBounds { index, len });
    }
    Ok(())
}
