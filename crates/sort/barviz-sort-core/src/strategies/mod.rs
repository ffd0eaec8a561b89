//! Sorting strategies sharing one output contract.
//!
//! Each module sorts a caller-owned slice ascending in place and appends
//! Steps describing every comparison, swap, and shift. `Strategy` is the
//! closed selector adapters dispatch on; there is no plugin registry.

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod quick;

use core::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::step::Trace;

/// Selector for the four interchangeable strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Merge,
    Quick,
    Heap,
    Bubble,
}

impl Strategy {
    /// All strategies, in a stable order (useful for tests and tooling).
    pub const ALL: [Strategy; 4] = [
        Strategy::Merge,
        Strategy::Quick,
        Strategy::Heap,
        Strategy::Bubble,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Merge => "merge",
            Strategy::Quick => "quick",
            Strategy::Heap => "heap",
            Strategy::Bubble => "bubble",
        }
    }

    /// Sort the whole slice ascending, returning the trace of the run.
    pub fn sort<T: Ord + Copy + Hash>(self, values: &mut [T]) -> Trace {
        let mut trace = Trace::default();
        self.sort_into(values, &mut trace);
        trace
    }

    /// Sort into a caller-provided trace buffer (appends; does not clear).
    pub fn sort_into<T: Ord + Copy + Hash>(self, values: &mut [T], trace: &mut Trace) {
        match self {
            Strategy::Merge => merge::sort_into(values, trace),
            Strategy::Quick => quick::sort_into(values, trace),
            Strategy::Heap => heap::sort_into(values, trace),
            Strategy::Bubble => bubble::sort_into(values, trace),
        }
    }
}

/// Validate an inclusive `[start, end]` range against a sequence length.
/// Fails fast; never clamps.
pub(crate) fn check_range(len: usize, start: usize, end: usize) -> Result<(), SortError> {
    if start > end || end >= len {
        return Err(SortError::InvalidRange { start, end, len });
    }
    Ok(())
}
