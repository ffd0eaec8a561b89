//! Bubble sort with the shrinking-bound optimization.
//!
//! Each pass bubbles the largest remaining value into the settled tail;
//! every adjacent comparison emits exactly one step regardless of outcome,
//! so a trace over `n` elements always holds `n * (n - 1) / 2` steps.

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
    for i in 0..n {
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                trace.push(Step::exchange(j, j + 1));
            } else {
                trace.push(Step::compare(j, j + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_is_triangular() {
        let mut values = [5, 3, 8, 1];
        let trace = sort(&mut values);
        assert_eq!(values, [1, 3, 5, 8]);
        assert_eq!(trace.len(), 6); // n(n-1)/2 for n = 4
    }

    #[test]
    fn sorted_input_never_swaps() {
        let mut values = [1, 2, 3, 4, 5];
        let trace = sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
        assert!(trace.iter().all(|s| !s.swap));
        assert_eq!(trace.len(), 10);
    }
}
