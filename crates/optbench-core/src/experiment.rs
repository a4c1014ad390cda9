//! The trial-runner seam and the per-replication experiment handle.

use std::fmt;
use std::sync::Arc;

use crate::objective::OptimizationConfig;
use crate::parameter::SearchSpace;

/// Evaluation entry point an execution engine calls to run one trial.
///
/// `point` holds one value per search-space dimension, in dimension order.
/// The returned vector holds one metric value per objective, in metric
/// order. Implementations must be pure with respect to the point: the same
/// point always yields the same values.
pub trait TrialRunner: Send + Sync {
    /// Evaluates a point, returning one value per objective.
    fn evaluate(&self, point: &[f64]) -> Vec<f64>;
}

/// One replication's view of a (problem, method) pair.
///
/// The experiment shares (rather than owns) the problem's search space,
/// optimization config, and runner, so many replications can reference the
/// same problem instance without copying it.
#[derive(Clone)]
pub struct Experiment {
    name: String,
    search_space: Arc<SearchSpace>,
    optimization_config: Arc<OptimizationConfig>,
    runner: Arc<dyn TrialRunner>,
}

impl Experiment {
    /// Creates an experiment from shared problem handles.
    pub fn new(
        name: impl Into<String>,
        search_space: Arc<SearchSpace>,
        optimization_config: Arc<OptimizationConfig>,
        runner: Arc<dyn TrialRunner>,
    ) -> Self {
        Self {
            name: name.into(),
            search_space,
            optimization_config,
            runner,
        }
    }

    /// Returns the experiment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared search space.
    pub fn search_space(&self) -> &Arc<SearchSpace> {
        &self.search_space
    }

    /// Returns the shared optimization config.
    pub fn optimization_config(&self) -> &Arc<OptimizationConfig> {
        &self.optimization_config
    }

    /// Returns the shared trial runner.
    pub fn runner(&self) -> &Arc<dyn TrialRunner> {
        &self.runner
    }
}

impl fmt::Debug for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Experiment")
            .field("name", &self.name)
            .field("search_space", &self.search_space)
            .field("optimization_config", &self.optimization_config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Objective;

    struct SumRunner;

    impl TrialRunner for SumRunner {
        fn evaluate(&self, point: &[f64]) -> Vec<f64> {
            vec![point.iter().sum()]
        }
    }

    #[test]
    fn test_experiment_shares_handles() {
        let space = Arc::new(SearchSpace::from_bounds(&[(0.0, 1.0)]).unwrap());
        let config = Arc::new(OptimizationConfig::single_objective(Objective::minimize(
            "sum",
        )));
        let runner: Arc<dyn TrialRunner> = Arc::new(SumRunner);

        let exp = Experiment::new("test", space.clone(), config.clone(), runner.clone());
        assert!(Arc::ptr_eq(exp.search_space(), &space));
        assert!(Arc::ptr_eq(exp.optimization_config(), &config));
        assert_eq!(exp.runner().evaluate(&[0.25, 0.5]), vec![0.75]);
    }
}
