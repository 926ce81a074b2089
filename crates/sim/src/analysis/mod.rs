//! Summary statistics over replicate batches.

pub mod summary;

pub use summary::{mean, proportion};
