//! Benchmark methods: an optimization strategy bound to a trial budget.

use std::sync::Arc;
use std::time::Duration;

use optbench_core::{BenchError, Result};
use serde::{Deserialize, Serialize};

/// The kind of model a generation step runs.
///
/// The set of kinds is closed; the strategies themselves live in the
/// external execution engine and are only named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Quasi-random Sobol sampling.
    Sobol,
    /// Uniform random sampling.
    RandomSearch,
    /// Gaussian-process-based Bayesian optimization.
    GaussianProcess,
}

/// One stage of a generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStep {
    model: ModelKind,
    num_trials: i32,
}

impl GenerationStep {
    /// Creates a step that proposes `num_trials` trials with the given
    /// model. A count of `-1` means "run until the budget is exhausted".
    pub fn new(model: ModelKind, num_trials: i32) -> Self {
        Self { model, num_trials }
    }

    /// Returns the model kind.
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Returns the trial count, with `-1` meaning "until the budget is
    /// exhausted".
    pub fn num_trials(&self) -> i32 {
        self.num_trials
    }
}

/// An ordered plan of model stages used to propose trials.
///
/// Consumed by the external execution engine; this harness only validates
/// and transports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStrategy {
    name: String,
    steps: Vec<GenerationStep>,
}

impl GenerationStrategy {
    /// Creates a strategy from ordered steps.
    pub fn new(name: impl Into<String>, steps: Vec<GenerationStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Returns the strategy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the steps in execution order.
    pub fn steps(&self) -> &[GenerationStep] {
        &self.steps
    }
}

/// Execution options handed to the engine for each replication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOptions {
    total_trials: Option<u32>,
    poll_interval: Duration,
}

impl ExecutionOptions {
    /// Creates options with a bound trial budget.
    pub fn new(total_trials: u32) -> Self {
        Self {
            total_trials: Some(total_trials),
            ..Self::default()
        }
    }

    /// Sets the interval at which the engine polls running trials.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Returns the total trial budget, if bound.
    pub fn total_trials(&self) -> Option<u32> {
        self.total_trials
    }

    /// Returns the trial poll interval.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for ExecutionOptions {
    /// Options with no trial budget bound. A method cannot be built from
    /// these until a budget is set.
    fn default() -> Self {
        Self {
            total_trials: None,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// An optimization strategy bound to an execution budget.
///
/// The strategy and options are stored by reference (shared with the
/// caller), since they may be large and reused across many replications of
/// possibly many problems.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use optbench::{
///     BenchmarkMethod, ExecutionOptions, GenerationStep, GenerationStrategy, ModelKind,
/// };
///
/// let gs = Arc::new(GenerationStrategy::new(
///     "SOBOL",
///     vec![GenerationStep::new(ModelKind::Sobol, -1)],
/// ));
/// let options = Arc::new(ExecutionOptions::new(10));
/// let method = BenchmarkMethod::new("Sobol10", gs.clone(), options).unwrap();
/// assert!(Arc::ptr_eq(method.generation_strategy(), &gs));
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkMethod {
    name: String,
    generation_strategy: Arc<GenerationStrategy>,
    execution_options: Arc<ExecutionOptions>,
}

impl BenchmarkMethod {
    /// Creates a benchmark method.
    ///
    /// The trial budget is validated here, synchronously, never deferred
    /// to run time: an unbounded method cannot be compared across
    /// replications or scheduled by the execution engine.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::UserInput` if `execution_options.total_trials`
    /// is unset.
    pub fn new(
        name: impl Into<String>,
        generation_strategy: Arc<GenerationStrategy>,
        execution_options: Arc<ExecutionOptions>,
    ) -> Result<Self> {
        if execution_options.total_trials().is_none() {
            return Err(BenchError::UserInput(
                "ExecutionOptions.total_trials may not be None".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            generation_strategy,
            execution_options,
        })
    }

    /// Returns the method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared generation strategy.
    pub fn generation_strategy(&self) -> &Arc<GenerationStrategy> {
        &self.generation_strategy
    }

    /// Returns the shared execution options.
    pub fn execution_options(&self) -> &Arc<ExecutionOptions> {
        &self.execution_options
    }

    /// Returns the total trial budget. Always bound for a constructed
    /// method.
    pub fn total_trials(&self) -> u32 {
        // Validated in `new`.
        self.execution_options
            .total_trials()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sobol_strategy() -> Arc<GenerationStrategy> {
        Arc::new(GenerationStrategy::new(
            "SOBOL",
            vec![GenerationStep::new(ModelKind::Sobol, 10)],
        ))
    }

    #[test]
    fn test_method_stores_strategy_by_reference() {
        let gs = sobol_strategy();
        let options = Arc::new(ExecutionOptions::new(10));
        let method = BenchmarkMethod::new("Sobol10", gs.clone(), options.clone()).unwrap();

        assert!(Arc::ptr_eq(method.generation_strategy(), &gs));
        assert!(Arc::ptr_eq(method.execution_options(), &options));
        assert_eq!(method.total_trials(), 10);
    }

    #[test]
    fn test_total_trials_none_rejected_at_construction() {
        let err = BenchmarkMethod::new(
            "Sobol10",
            sobol_strategy(),
            Arc::new(ExecutionOptions::default()),
        )
        .unwrap_err();

        assert!(matches!(err, BenchError::UserInput(_)));
        assert!(err.to_string().contains("total_trials may not be None"));
    }

    #[test]
    fn test_exhaust_budget_sentinel() {
        let step = GenerationStep::new(ModelKind::GaussianProcess, -1);
        assert_eq!(step.num_trials(), -1);
    }

    #[test]
    fn test_strategy_toml_round_trip() {
        let gs = GenerationStrategy::new(
            "Sobol+GP",
            vec![
                GenerationStep::new(ModelKind::Sobol, 3),
                GenerationStep::new(ModelKind::GaussianProcess, -1),
            ],
        );
        let toml = toml::to_string(&gs).unwrap();
        let back: GenerationStrategy = toml::from_str(&toml).unwrap();
        assert_eq!(back, gs);
    }
}
