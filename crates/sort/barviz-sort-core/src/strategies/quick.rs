//! Quick sort with median-of-three pivot selection.
//!
//! Partitioning emits a step for every comparison regardless of outcome so
//! playback cadence stays uniform: misses are compare steps (or bare
//! markers while the boundary cursor is still before the range start), hits
//! and the two pivot relocations are exchanges.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::error::SortError;
use crate::step::{Step, Trace};
use crate::strategies::check_range;

/// Sort the whole slice ascending, returning the trace of the run.
pub fn sort<T: Ord + Copy + Hash>(values: &mut [T]) -> Trace {
    let mut trace = Trace::default();
    sort_into(values, &mut trace);
    trace
}

/// Sort the whole slice into a caller-provided trace buffer.
pub fn sort_into<T: Ord + Copy + Hash>(values: &mut [T], trace: &mut Trace) {
    if values.len() > 1 {
        sort_range_into(values, trace, 0, values.len() - 1);
    }
}

/// Sort the inclusive sub-range `[start, end]`, validating it first.
pub fn sort_range<T: Ord + Copy + Hash>(
    values: &mut [T],
    start: usize,
    end: usize,
) -> Result<Trace, SortError> {
    check_range(values.len(), start, end)?;
    let mut trace = Trace::default();
    if start < end {
        sort_range_into(values, &mut trace, start, end);
    }
    Ok(trace)
}

fn sort_range_into<T: Ord + Copy + Hash>(
    values: &mut [T],
    trace: &mut Trace,
    start: usize,
    end: usize,
) {
    let p = partition(values, trace, start, end);
    // Recurse only where the sub-range still spans at least two elements.
    if p > start + 1 {
        sort_range_into(values, trace, start, p - 1);
    }
    if p + 1 < end {
        sort_range_into(values, trace, p + 1, end);
    }
}

/// Partition `[start, end]` around the selected pivot; returns the pivot's
/// final index.
///
/// The boundary cursor starts one before `start` (`None` at the left edge);
/// values below the pivot are swapped up to it. Both pivot relocations emit
/// an exchange even when source and destination coincide.
fn partition<T: Ord + Copy + Hash>(
    values: &mut [T],
    trace: &mut Trace,
    start: usize,
    end: usize,
) -> usize {
    let pivot_index = select_pivot(values, start, end);
    values.swap(pivot_index, end);
    trace.push(Step::exchange(pivot_index, end));

    let pivot = values[end];
    let mut boundary: Option<usize> = start.checked_sub(1);

    for j in start..end {
        if values[j] < pivot {
            let i = boundary.map_or(start, |b| b + 1);
            values.swap(i, j);
            trace.push(Step::exchange(i, j));
            boundary = Some(i);
        } else {
            match boundary {
                Some(b) => trace.push(Step::compare(b, j)),
                None => trace.push(Step::marker()),
            }
        }
    }

    let dest = boundary.map_or(start, |b| b + 1);
    values.swap(dest, end);
    trace.push(Step::exchange(dest, end));
    dest
}

/// Median-of-three pivot selection over the values at `start`, `end`, and
/// the whole array's fixed midpoint (not the midpoint of the current
/// sub-range).
///
/// Candidates dedupe by value: a later insertion overwrites the stored
/// index, so equal candidates collapse and fewer than three may survive.
/// The median branch is unreachable from `partition`, whose ranges always
/// have `start < end`; it is kept as-is to preserve the historical pivot
/// choice. The live path picks whichever of `start`/`end` holds the
/// smaller value.
fn select_pivot<T: Ord + Copy + Hash>(values: &[T], start: usize, end: usize) -> usize {
    let mid = values.len() / 2;
    let mut candidates: HashMap<T, usize> = HashMap::with_capacity(3);
    candidates.insert(values[start], start);
    candidates.insert(values[end], end);
    candidates.insert(values[mid], mid);

    if start > end + 1 {
        let lo = values[start].min(values[end]).min(values[mid]);
        let hi = values[start].max(values[end]).max(values[mid]);
        candidates.remove(&lo);
        candidates.remove(&hi);
        // Empty when duplicates collapsed the middle away with an extreme.
        candidates.into_values().next().unwrap_or(end)
    } else if values[start] < values[end] {
        start
    } else {
        end
    }
}
