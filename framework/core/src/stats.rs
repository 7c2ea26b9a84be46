/// Descriptive statistics over the successful trial durations of one workload, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation, `N - 1` denominator. Exactly zero for a single run.
    pub stdev: f64,
    /// Number of successful trials, always at least 1.
    pub runs: usize,
}

/// Reduce a workload's successful durations to [BenchmarkStats].
///
/// Returns `None` for an empty slice, there is nothing to report for a workload without a
/// successful trial.
pub fn aggregate(durations: &[f64]) -> Option<BenchmarkStats> {
    let runs = durations.len();
    if runs == 0 {
        return None;
    }

    let min = durations.iter().copied().fold(f64::INFINITY, f64::min);
    let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Rounding can push the mean of near-identical values just outside the observed range.
    let mean = (durations.iter().sum::<f64>() / runs as f64).clamp(min, max);

    let stdev = if runs > 1 {
        let sum_sq = durations.iter().map(|d| (d - mean).powi(2)).sum::<f64>();
        (sum_sq / (runs - 1) as f64).sqrt()
    } else {
        0.0
    };

    Some(BenchmarkStats {
        min,
        max,
        mean,
        stdev,
        runs,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_should_compute_sample_statistics() {
        let stats = aggregate(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(
            stats,
            BenchmarkStats {
                min: 10.0,
                max: 30.0,
                mean: 20.0,
                stdev: 10.0,
                runs: 3,
            }
        );
    }

    #[test]
    fn test_should_report_zero_stdev_for_single_run() {
        let stats = aggregate(&[42.5]).unwrap();
        assert_eq!(stats.stdev, 0.0);
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.min, 42.5);
        assert_eq!(stats.max, 42.5);
        assert_eq!(stats.mean, 42.5);
    }

    #[test]
    fn test_should_not_aggregate_empty_durations() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn test_should_keep_order_between_min_mean_max() {
        let samples: &[&[f64]] = &[
            &[0.1, 0.1, 0.1],
            &[1e-3, 7.25, 1000.0, 3.5],
            &[0.30000000000000004, 0.3, 0.3, 0.30000000000000004],
            &[5.0, 5.0],
        ];

        for durations in samples {
            let stats = aggregate(durations).unwrap();
            assert!(stats.min <= stats.mean, "{stats:?}");
            assert!(stats.mean <= stats.max, "{stats:?}");
            assert_eq!(stats.runs, durations.len());
        }
    }

    #[test]
    fn test_should_handle_identical_durations() {
        let stats = aggregate(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(stats.stdev, 0.0);
        assert_eq!(stats.mean, 5.0);
    }
}
