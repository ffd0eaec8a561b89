//! Heap sort over an implicit binary max-heap.
//!
//! Build phase heapifies every internal node bottom-up; extraction swaps
//! the root with the last live slot, shrinks the heap, and re-heapifies.
//! Every emitted step is an exchange (heap sort never records misses).

use crate::step::{Step, Trace};

/// Sort the whole slice ascending, returning the trace of the run.
pub fn sort<T: Ord + Copy>(values: &mut [T]) -> Trace {
    let mut trace = Trace::default();
    sort_into(values, &mut trace);
    trace
}

/// Sort the whole slice into a caller-provided trace buffer.
pub fn sort_into<T: Ord + Copy>(values: &mut [T], trace: &mut Trace) {
    let n = values.len();
    if n < 2 {
        return;
    }

    // Internal nodes live in the first half of the array.
    for i in (0..n / 2).rev() {
        heapify(values, trace, n, i);
    }

    // Extract the max into the settled tail, then restore heap order over
    // the shrunken prefix. The last iteration's root/root exchange is a
    // harmless self-swap during replay.
    for i in (0..n).rev() {
        values.swap(0, i);
        trace.push(Step::exchange(0, i));
        heapify(values, trace, i, 0);
    }
}

/// Restore max-heap order for the subtree rooted at `root`, considering
/// only the first `size` slots as live.
fn heapify<T: Ord + Copy>(values: &mut [T], trace: &mut Trace, size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < size && values[left] > values[largest] {
        largest = left;
    }
    if right < size && values[right] > values[largest] {
        largest = right;
    }

    if largest != root {
        values.swap(root, largest);
        trace.push(Step::exchange(root, largest));
        heapify(values, trace, size, largest);
    }
}
