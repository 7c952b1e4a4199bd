//! Summary statistics over benchmark duration samples.

use serde::Serialize;

/// Aggregate statistics for a sequence of duration samples, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl StatsSummary {
    /// Compute summary statistics from raw duration samples.
    ///
    /// `std_dev` is the population standard deviation (divisor N, not N-1).
    /// An empty slice yields a zeroed summary rather than an error or NaN.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let mut min = samples[0];
        let mut max = samples[0];
        let mut sum = 0.0;
        for &t in samples {
            if t < min {
                min = t;
            }
            if t > max {
                max = t;
            }
            sum += t;
        }
        let mean = sum / samples.len() as f64;

        let variance = samples
            .iter()
            .map(|t| (t - mean).powi(2))
            .sum::<f64>()
            / samples.len() as f64;

        Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_samples_yield_zeroed_summary() {
        let summary = StatsSummary::from_samples(&[]);
        assert_eq!(
            summary,
            StatsSummary {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                std_dev: 0.0
            }
        );
    }

    #[test]
    fn single_sample_has_zero_spread() {
        let summary = StatsSummary::from_samples(&[42.5]);
        assert_eq!(summary.min, 42.5);
        assert_eq!(summary.max, 42.5);
        assert_eq!(summary.mean, 42.5);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn small_ascending_sequence() {
        let summary = StatsSummary::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 3.0);
        assert!((summary.std_dev - 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn constant_sequence_has_zero_std_dev() {
        let summary = StatsSummary::from_samples(&[10.0, 10.0, 10.0]);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.mean, 10.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn std_dev_uses_population_divisor() {
        // Textbook example: population std dev is exactly 2.0; the sample
        // estimator (divisor N-1) would give ~2.138 instead.
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = StatsSummary::from_samples(&samples);
        assert!((summary.mean - 5.0).abs() < EPS);
        assert!((summary.std_dev - 2.0).abs() < EPS);
    }

    #[test]
    fn mean_is_bounded_by_min_and_max() {
        let cases: [&[f64]; 4] = [
            &[3.0],
            &[1.5, 9.25, 0.75],
            &[100.0, 200.0, 150.0, 175.0],
            &[0.0, 0.0, 1.0],
        ];
        for samples in cases {
            let summary = StatsSummary::from_samples(samples);
            assert!(summary.min <= summary.mean);
            assert!(summary.mean <= summary.max);
            assert!(summary.std_dev >= 0.0);
        }
    }

    #[test]
    fn summary_is_deterministic() {
        let samples = [12.0, 7.5, 88.25, 3.125, 40.0];
        assert_eq!(
            StatsSummary::from_samples(&samples),
            StatsSummary::from_samples(&samples)
        );
    }
}
