//! Statistics and timing primitives for the benchmark harness.

pub mod summary;
pub mod trials;

pub use summary::StatsSummary;
pub use trials::TrialRunner;
