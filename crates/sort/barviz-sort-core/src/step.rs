//! Step and trace contracts produced by the sorting strategies.
//!
//! A Trace carries the ordered, append-only list of Steps for exactly one
//! sort run. Adapters replay it against their own representation (bar
//! heights, etc.); the core never touches presentation.

use serde::{Deserialize, Serialize};

/// One visualizable event in a sort's execution.
///
/// `indices` names the two positions involved; `None` is the no-op marker
/// used to keep step cadence uniform when quick sort's boundary cursor is
/// still before the range start. `swap` means replay must exchange the two
/// positions. `cascade` marks one link of a multi-step shift chain: its
/// highlight is skipped during replay but the exchange is still applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub indices: Option<(usize, usize)>,
    #[serde(default)]
    pub swap: bool,
    #[serde(default)]
    pub cascade: bool,
}

impl Step {
    /// A comparison that resulted in no movement; replay highlights only.
    #[inline]
    pub fn compare(i: usize, j: usize) -> Self {
        Self {
            indices: Some((i, j)),
            swap: false,
            cascade: false,
        }
    }

    /// A comparison that must exchange positions `i` and `j` during replay.
    #[inline]
    pub fn exchange(i: usize, j: usize) -> Self {
        Self {
            indices: Some((i, j)),
            swap: true,
            cascade: false,
        }
    }

    /// One link of a shift chain: exchanged during replay, not highlighted.
    #[inline]
    pub fn shift(i: usize, j: usize) -> Self {
        Self {
            indices: Some((i, j)),
            swap: true,
            cascade: true,
        }
    }

    /// No-op marker holding a slot in the step cadence.
    #[inline]
    pub fn marker() -> Self {
        Self {
            indices: None,
            swap: false,
            cascade: false,
        }
    }

    #[inline]
    pub fn is_marker(&self) -> bool {
        self.indices.is_none()
    }
}

/// Ordered trace of Steps for one sort invocation.
///
/// Created empty at sort start, appended to only by the running strategy,
/// handed off whole to the replay consumer, never mutated during replay.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trace {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            steps: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    #[inline]
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Number of steps that move elements during replay.
    pub fn swap_count(&self) -> usize {
        self.steps.iter().filter(|s| s.swap).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_flags() {
        assert_eq!(
            Step::compare(1, 2),
            Step {
                indices: Some((1, 2)),
                swap: false,
                cascade: false
            }
        );
        assert!(Step::exchange(0, 3).swap);
        let shift = Step::shift(4, 3);
        assert!(shift.swap && shift.cascade);
        assert!(Step::marker().is_marker());
        assert!(!Step::marker().swap);
    }

    #[test]
    fn trace_push_and_counts() {
        let mut trace = Trace::default();
        assert!(trace.is_empty());
        trace.push(Step::compare(0, 1));
        trace.push(Step::exchange(0, 1));
        trace.push(Step::shift(2, 1));
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.swap_count(), 2);
        trace.clear();
        assert!(trace.is_empty());
    }
}
