//! Console user interface for the benchmark harness.

pub mod report;
