//! Replication runner.
//!
//! Drives N independent replications of a (problem, method) pair through
//! an execution engine and aggregates the resulting traces. Replications
//! share the immutable problem and method read-only, so they can run
//! sequentially or in parallel with identical results for a deterministic
//! engine.

use rayon::prelude::*;
use tracing::info;

use optbench_core::Result;

use crate::config::BenchmarkSuiteConfig;
use crate::method::BenchmarkMethod;
use crate::problem::BenchmarkProblem;
use crate::result::{AggregatedBenchmarkResult, BenchmarkResult, DEFAULT_QUANTILE_LEVELS};

/// Runs one replication of a method against a problem.
///
/// Implemented by the external optimization engine. The engine reads the
/// problem's search space, optimization config, and runner, plus the
/// method's generation strategy and execution options, and returns a
/// fully-populated trace.
pub trait ExecutionEngine: Send + Sync {
    /// Executes replication `replication` and returns its result.
    fn run_replication(
        &self,
        problem: &BenchmarkProblem,
        method: &BenchmarkMethod,
        replication: usize,
    ) -> Result<BenchmarkResult>;
}

/// Executes repeated replications and aggregates their traces.
///
/// # Example
///
/// ```
/// use optbench::{BenchmarkRunner, RandomSearchEngine, stubs};
///
/// let runner = BenchmarkRunner::new().with_replications(2);
/// let agg = runner
///     .run(
///         &stubs::single_objective_problem().into(),
///         &stubs::sobol_method(),
///         &RandomSearchEngine::new(42),
///     )
///     .unwrap();
/// assert_eq!(agg.trace_len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    replications: usize,
    quantile_levels: Vec<f64>,
    parallel: bool,
}

impl BenchmarkRunner {
    /// Creates a runner with defaults: 3 replications, quantile levels
    /// {0.25, 0.5, 0.75}, sequential execution.
    pub fn new() -> Self {
        Self {
            replications: 3,
            quantile_levels: DEFAULT_QUANTILE_LEVELS.to_vec(),
            parallel: false,
        }
    }

    /// Creates a runner from a suite configuration.
    pub fn from_config(config: &BenchmarkSuiteConfig) -> Self {
        Self {
            replications: config.replications(),
            quantile_levels: config.quantile_levels().to_vec(),
            parallel: config.parallel(),
        }
    }

    /// Sets the number of replications.
    pub fn with_replications(mut self, replications: usize) -> Self {
        self.replications = replications;
        self
    }

    /// Sets the quantile levels reported by aggregation. Levels outside
    /// `[0, 1]` are rejected when aggregation runs.
    pub fn with_quantile_levels(mut self, levels: Vec<f64>) -> Self {
        self.quantile_levels = levels;
        self
    }

    /// Runs replications in parallel. Requires a deterministic engine for
    /// reproducible aggregates.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the number of replications.
    pub fn replications(&self) -> usize {
        self.replications
    }

    /// Runs all replications, returning one result per replication in
    /// replication order.
    pub fn run_replications<E: ExecutionEngine>(
        &self,
        problem: &BenchmarkProblem,
        method: &BenchmarkMethod,
        engine: &E,
    ) -> Result<Vec<BenchmarkResult>> {
        let run_one = |replication: usize| {
            info!(
                event = "replication_start",
                problem = problem.name(),
                method = method.name(),
                replication,
            );
            let result = engine.run_replication(problem, method, replication)?;
            info!(
                event = "replication_end",
                replication,
                trace_len = result.optimization_trace.len(),
            );
            Ok(result)
        };

        if self.parallel {
            (0..self.replications)
                .into_par_iter()
                .map(run_one)
                .collect()
        } else {
            (0..self.replications).map(run_one).collect()
        }
    }

    /// Runs all replications and aggregates their traces.
    pub fn run<E: ExecutionEngine>(
        &self,
        problem: &BenchmarkProblem,
        method: &BenchmarkMethod,
        engine: &E,
    ) -> Result<AggregatedBenchmarkResult> {
        let results = self.run_replications(problem, method, engine)?;
        let aggregated = AggregatedBenchmarkResult::from_benchmark_results_with_quantiles(
            &results,
            &self.quantile_levels,
        )?;
        info!(
            event = "aggregation_end",
            problem = problem.name(),
            method = method.name(),
            replications = results.len(),
        );
        Ok(aggregated)
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use optbench_core::Experiment;

    use crate::stubs;

    use super::*;

    /// Engine returning a fixed trace, tagged with the replication index.
    struct FixedTraceEngine {
        trace: Vec<f64>,
    }

    impl ExecutionEngine for FixedTraceEngine {
        fn run_replication(
            &self,
            problem: &BenchmarkProblem,
            method: &BenchmarkMethod,
            replication: usize,
        ) -> Result<BenchmarkResult> {
            let experiment = Experiment::new(
                format!("{}_{}_{replication}", problem.name(), method.name()),
                problem.search_space().clone(),
                problem.optimization_config().clone(),
                problem.runner().clone(),
            );
            Ok(BenchmarkResult {
                name: experiment.name().to_string(),
                experiment,
                optimization_trace: self.trace.clone(),
                fit_time: 0.0,
                gen_time: 0.0,
            })
        }
    }

    #[test]
    fn test_runner_produces_one_result_per_replication() {
        let problem: BenchmarkProblem = stubs::single_objective_problem().into();
        let method = stubs::sobol_method();
        let engine = FixedTraceEngine {
            trace: vec![3.0, 2.0, 1.0, 0.0],
        };

        let runner = BenchmarkRunner::new().with_replications(5);
        let results = runner
            .run_replications(&problem, &method, &engine)
            .unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[4].name, "branin_SOBOL_4");
    }

    #[test]
    fn test_runner_aggregates_identical_traces() {
        let problem: BenchmarkProblem = stubs::single_objective_problem().into();
        let method = stubs::sobol_method();
        let engine = FixedTraceEngine {
            trace: vec![3.0, 2.0, 1.0, 0.0],
        };

        let agg = BenchmarkRunner::new()
            .with_replications(3)
            .run(&problem, &method, &engine)
            .unwrap();
        assert_eq!(agg.optimization_trace_mean, vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem: BenchmarkProblem = stubs::single_objective_problem().into();
        let method = stubs::sobol_method();
        let engine = FixedTraceEngine {
            trace: vec![1.0, 0.5],
        };

        let sequential = BenchmarkRunner::new()
            .with_replications(4)
            .run(&problem, &method, &engine)
            .unwrap();
        let parallel = BenchmarkRunner::new()
            .with_replications(4)
            .with_parallel(true)
            .run(&problem, &method, &engine)
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
