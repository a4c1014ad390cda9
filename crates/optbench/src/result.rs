//! Benchmark results and cross-replication aggregation.

use optbench_core::{BenchError, Experiment, Result};
use serde::{Deserialize, Serialize};

/// Quantile levels reported when none are configured.
pub const DEFAULT_QUANTILE_LEVELS: [f64; 3] = [0.25, 0.5, 0.75];

/// The outcome of one (problem, method) replication.
///
/// `optimization_trace[i]` is the best objective value (or best
/// hypervolume, for multi-objective problems) observed using only trials
/// `0..=i`. The trace is stored as supplied; monotonicity is the
/// producer's concern, not enforced here.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Result name, typically `problem_method_replication`.
    pub name: String,
    /// The replication's experiment handle.
    pub experiment: Experiment,
    /// Best-observed value per completed trial.
    pub optimization_trace: Vec<f64>,
    /// Seconds spent fitting models, summed over the replication.
    pub fit_time: f64,
    /// Seconds spent generating candidates, summed over the replication.
    pub gen_time: f64,
}

/// Mean and spread of a scalar across replications.
///
/// Spread is the sample standard deviation (n−1 denominator), 0.0 when
/// only one sample exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarStats {
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl ScalarStats {
    fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let std_dev = if samples.len() < 2 {
            0.0
        } else {
            let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        };
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }
}

/// Type-7 empirical quantile (linear interpolation on sorted samples,
/// `h = (n - 1) q`), chosen for reproducibility across implementations.
fn quantile(sorted: &[f64], level: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * level;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Summary statistics over N same-shape replication results.
///
/// A pure function of its inputs: aggregating the same results twice
/// yields bit-identical output.
///
/// # Example
///
/// ```
/// use optbench::{stubs, AggregatedBenchmarkResult};
///
/// let result = stubs::benchmark_result();
/// let agg = AggregatedBenchmarkResult::from_benchmark_results(&[
///     result.clone(),
///     result.clone(),
/// ])
/// .unwrap();
/// assert_eq!(agg.optimization_trace_mean, result.optimization_trace);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedBenchmarkResult {
    /// Aggregate name, taken from the first result.
    pub name: String,
    /// Per-step mean of the optimization traces.
    pub optimization_trace_mean: Vec<f64>,
    /// Per-step quantile traces, ordered by ascending level.
    pub optimization_trace_quantiles: Vec<(f64, Vec<f64>)>,
    /// Model-fit time statistics across replications.
    pub fit_time: ScalarStats,
    /// Candidate-generation time statistics across replications.
    pub gen_time: ScalarStats,
}

impl AggregatedBenchmarkResult {
    /// Aggregates replication results at the default quantile levels
    /// {0.25, 0.5, 0.75}.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Aggregation` if `results` is empty or the
    /// traces differ in length. Differing lengths are never silently
    /// truncated or padded; that would hide a bug in the upstream
    /// replication run, so the offending result index is reported instead.
    pub fn from_benchmark_results(results: &[BenchmarkResult]) -> Result<Self> {
        Self::from_benchmark_results_with_quantiles(results, &DEFAULT_QUANTILE_LEVELS)
    }

    /// Aggregates replication results at the given quantile levels.
    ///
    /// # Errors
    ///
    /// In addition to the preconditions of
    /// [`from_benchmark_results`](Self::from_benchmark_results), returns
    /// `BenchError::Aggregation` if any level lies outside `[0, 1]`.
    pub fn from_benchmark_results_with_quantiles(
        results: &[BenchmarkResult],
        levels: &[f64],
    ) -> Result<Self> {
        for &level in levels {
            if !(0.0..=1.0).contains(&level) {
                return Err(BenchError::Aggregation(format!(
                    "quantile level {level} is outside [0, 1]"
                )));
            }
        }
        let first = results.first().ok_or_else(|| {
            BenchError::Aggregation("cannot aggregate an empty result list".to_string())
        })?;
        let trace_len = first.optimization_trace.len();
        for (index, result) in results.iter().enumerate() {
            if result.optimization_trace.len() != trace_len {
                return Err(BenchError::Aggregation(format!(
                    "result {index} ('{}') has trace length {}, expected {trace_len}",
                    result.name,
                    result.optimization_trace.len()
                )));
            }
        }

        let mut levels = levels.to_vec();
        levels.sort_by(|a, b| a.total_cmp(b));

        let mut trace_mean = Vec::with_capacity(trace_len);
        let mut trace_quantiles: Vec<(f64, Vec<f64>)> = levels
            .iter()
            .map(|&level| (level, Vec::with_capacity(trace_len)))
            .collect();

        for step in 0..trace_len {
            let mut samples: Vec<f64> = results
                .iter()
                .map(|r| r.optimization_trace[step])
                .collect();
            trace_mean.push(samples.iter().sum::<f64>() / samples.len() as f64);
            samples.sort_by(|a, b| a.total_cmp(b));
            for (level, trace) in &mut trace_quantiles {
                trace.push(quantile(&samples, *level));
            }
        }

        let fit_times: Vec<f64> = results.iter().map(|r| r.fit_time).collect();
        let gen_times: Vec<f64> = results.iter().map(|r| r.gen_time).collect();

        Ok(Self {
            name: first.name.clone(),
            optimization_trace_mean: trace_mean,
            optimization_trace_quantiles: trace_quantiles,
            fit_time: ScalarStats::from_samples(&fit_times),
            gen_time: ScalarStats::from_samples(&gen_times),
        })
    }

    /// Returns the quantile trace for an exact level, if reported.
    pub fn quantile_trace(&self, level: f64) -> Option<&[f64]> {
        self.optimization_trace_quantiles
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, trace)| trace.as_slice())
    }

    /// Returns the trace length shared by all inputs.
    pub fn trace_len(&self) -> usize {
        self.optimization_trace_mean.len()
    }
}
