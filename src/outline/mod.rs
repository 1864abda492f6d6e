//! Outline assembly: formatting declarations and running batches
//!
//! - formatter: declaration list -> outline text
//! - engine: batch orchestration with a worker pool and cancellation
//! - cache: optional parse cache keyed by content hash and language

pub mod cache;
pub mod engine;
pub mod formatter;

pub use cache::OutlineCache;
pub use engine::{CancellationToken, OutlineEngine};
pub use formatter::OutlineFormatter;
