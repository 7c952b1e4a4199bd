//! Coin Segmentation Benchmark Library
//!
//! This library provides modular components for benchmarking a
//! watershed-style coin segmentation pipeline.

pub mod core;
pub mod segmentation;
pub mod stats;
pub mod ui;

pub use crate::core::run_benchmark;

/// Library version
pub const VERSION: &str = "0.1.0";
