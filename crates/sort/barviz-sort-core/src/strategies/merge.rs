//! Merge sort with an in-place, insertion-style merge.
//!
//! The merge deliberately avoids a hidden buffer: when the right-hand
//! element wins, everything between the cursors shifts one slot right as a
//! chain of cascade steps, so the trace corresponds to bars physically
//! moving. Replaying the chain as adjacent exchanges is the same rotation
//! as the copy-then-place performed here, which is why no step is emitted
//! for the final placement.

use crate::error::SortError;
use crate::step::{Step, Trace};
use crate::strategies::check_range;

/// Sort the whole slice ascending, returning the trace of the run.
pub fn sort<T: Ord + Copy>(values: &mut [T]) -> Trace {
    let mut trace = Trace::default();
    sort_into(values, &mut trace);
    trace
}

/// Sort the whole slice into a caller-provided trace buffer.
pub fn sort_into<T: Ord + Copy>(values: &mut [T], trace: &mut Trace) {
    if values.len() > 1 {
        sort_range_into(values, trace, 0, values.len() - 1);
    }
}

/// Sort the inclusive sub-range `[start, end]`, validating it first.
pub fn sort_range<T: Ord + Copy>(
    values: &mut [T],
    start: usize,
    end: usize,
) -> Result<Trace, SortError> {
    check_range(values.len(), start, end)?;
    let mut trace = Trace::default();
    sort_range_into(values, &mut trace, start, end);
    Ok(trace)
}

fn sort_range_into<T: Ord + Copy>(values: &mut [T], trace: &mut Trace, start: usize, end: usize) {
    if start < end {
        let mid = (start + end) / 2;
        sort_range_into(values, trace, start, mid);
        sort_range_into(values, trace, mid + 1, end);
        merge(values, trace, start, mid, end);
    }
}

/// Merge the sorted halves `[start, mid]` and `[mid+1, end]`.
///
/// Two cursors walk the halves. A left-hand win is a plain compare step; a
/// right-hand win saves `values[j]`, shifts `(i, j]` one slot right with a
/// cascade step per slot, places the saved value at `i`, and advances the
/// merge boundary itself (the right half shrank from the left).
fn merge<T: Ord + Copy>(values: &mut [T], trace: &mut Trace, start: usize, mid: usize, end: usize) {
    let mut i = start;
    let mut mid = mid;
    let mut j = mid + 1;

    while i <= mid && j <= end {
        if values[i] < values[j] {
            trace.push(Step::compare(i, j));
            i += 1;
        } else {
            let moved = values[j];
            let mut k = j;
            while k > i {
                trace.push(Step::shift(k, k - 1));
                values[k] = values[k - 1];
                k -= 1;
            }
            values[i] = moved;
            i += 1;
            j += 1;
            mid += 1;
        }
    }
}
