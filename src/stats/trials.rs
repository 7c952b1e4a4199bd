//! Timed trial execution for the benchmark harness.

use std::time::Instant;

/// Runs an operation a fixed number of times, recording the wall-clock
/// duration of each call in microseconds.
///
/// Trials run strictly sequentially on the calling thread, with no isolation
/// between them: later trials observe cache warmth and allocator state left
/// behind by earlier ones, which is an intentional characteristic of the
/// benchmark. There is no warm-up phase and no outlier rejection.
#[derive(Debug, Clone, Copy)]
pub struct TrialRunner {
    trials: usize,
}

impl TrialRunner {
    pub fn new(trials: usize) -> Self {
        Self { trials }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run `op` exactly `trials` times and return the elapsed time of each
    /// call, in microseconds, in trial order. Return values of `op` are
    /// discarded; only the timing matters.
    pub fn run<F, R>(&self, op: F) -> Vec<f64>
    where
        F: FnMut() -> R,
    {
        self.run_observed(op, |_| {})
    }

    /// Like [`TrialRunner::run`], but invokes `observer` with the completed
    /// trial index after each sample is recorded. The observer runs outside
    /// the timed window, so progress reporting does not contaminate the
    /// measurements.
    pub fn run_observed<F, R, O>(&self, mut op: F, mut observer: O) -> Vec<f64>
    where
        F: FnMut() -> R,
        O: FnMut(usize),
    {
        let mut run_times = Vec::with_capacity(self.trials);
        for i in 0..self.trials {
            let start = Instant::now();
            let _ = op();
            run_times.push(start.elapsed().as_micros() as f64);
            observer(i);
        }
        run_times
    }
}
