//! Error types for trace generation and replay.

use thiserror::Error;

/// Errors produced by range-based sort entry points and by replay.
///
/// Empty or singleton inputs are valid no-ops (empty trace), never errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A sub-range entry point was handed indices outside the sequence or
    /// with `start > end`. Never silently clamped.
    #[error("invalid range [{start}, {end}] for sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A replayed step referenced a position outside the replay state.
    #[error("step index {index} out of bounds for sequence of length {len}")]
    StepOutOfBounds { index: usize, len: usize },
}
