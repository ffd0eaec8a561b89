//! Core configuration for barviz-sort-core.

use serde::{Deserialize, Serialize};

/// Configuration for engine sizing.
/// Keep this minimal in v1; expand as needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hint for the reusable step trace buffer.
    pub trace_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_capacity: 1024,
        }
    }
}
