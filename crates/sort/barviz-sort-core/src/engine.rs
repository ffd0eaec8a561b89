//! Engine: a thin wrapper that owns configuration and a reusable trace
//! buffer so repeated sorts do not reallocate.
//!
//! Methods: new, sort (clear buffer, run strategy, borrow trace),
//! last_trace.

use core::hash::Hash;

use crate::config::Config;
use crate::step::Trace;
use crate::strategies::Strategy;

/// Reusable sort driver for adapters that trigger many runs (one per
/// button press, in the typical visualizer).
#[derive(Debug, Default)]
pub struct Engine {
    cfg: Config,
    trace: Trace,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            trace: Trace::with_capacity(cfg.trace_capacity),
            cfg,
        }
    }

    /// Sort `values` in place with `strategy`, returning the trace of this
    /// run. The buffer is cleared first; the borrow is valid until the next
    /// call.
    pub fn sort<T: Ord + Copy + Hash>(&mut self, strategy: Strategy, values: &mut [T]) -> &Trace {
        self.trace.clear();
        strategy.sort_into(values, &mut self.trace);
        &self.trace
    }

    /// The trace of the most recent run (empty before the first).
    pub fn last_trace(&self) -> &Trace {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_cleared_between_runs() {
        let mut engine = Engine::new(Config::default());
        let mut a = [3, 1, 2];
        let first_len = engine.sort(Strategy::Bubble, &mut a).len();
        assert_eq!(first_len, 3);

        let mut b = [2, 1];
        let second_len = engine.sort(Strategy::Bubble, &mut b).len();
        assert_eq!(second_len, 1);
        assert_eq!(engine.last_trace().len(), 1);
    }
}
