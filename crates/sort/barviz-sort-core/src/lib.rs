#![allow(dead_code)]
//! Barviz Sort Core (renderer-agnostic)
//!
//! This crate defines the step/trace model, the four sorting strategies
//! (merge, quick, heap, bubble), the replay contract, and a small Engine
//! wrapper that reuses a trace buffer across runs. Strategies mutate a
//! caller-owned slice in place while appending Steps; replaying the trace
//! against a copy of the pre-sort slice reproduces the same final order.

pub mod config;
pub mod engine;
pub mod error;
pub mod replay;
pub mod step;
pub mod strategies;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use engine::Engine;
pub use error::SortError;
pub use replay::{apply_trace, replay};
pub use step::{Step, Trace};
pub use strategies::{bubble, heap, merge, quick, Strategy};
