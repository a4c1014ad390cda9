//! Benchmark problems derived from analytic test functions.
//!
//! A benchmark problem packages the three things an execution engine needs
//! to run trials (search space, optimization config, runner) with the
//! scoring target the aggregator needs afterwards: the known optimal value
//! for single-objective problems, or the reference point and maximum
//! hypervolume for multi-objective ones. All metadata is read from the
//! test-function descriptor and passed through exactly, never recomputed.

use std::fmt;
use std::sync::Arc;

use optbench_core::{
    BenchError, Objective, OptimizationConfig, Result, SearchSpace, TrialRunner,
};
use optbench_functions::{MultiObjectiveFunction, SyntheticFunction};

fn derive_search_space(name: &str, dim: usize, bounds: &[(f64, f64)]) -> Result<SearchSpace> {
    if bounds.len() != dim {
        return Err(BenchError::Config(format!(
            "test function '{name}' declares dim {dim} but {} bounds",
            bounds.len()
        )));
    }
    SearchSpace::from_bounds(bounds)
}

/// Trial runner backed by a single-objective synthetic function.
struct SyntheticRunner<F: SyntheticFunction> {
    function: F,
}

impl<F: SyntheticFunction> TrialRunner for SyntheticRunner<F> {
    fn evaluate(&self, point: &[f64]) -> Vec<f64> {
        vec![self.function.evaluate(point)]
    }
}

/// Trial runner backed by a multi-objective synthetic function.
struct MultiObjectiveRunner<F: MultiObjectiveFunction> {
    function: F,
}

impl<F: MultiObjectiveFunction> TrialRunner for MultiObjectiveRunner<F> {
    fn evaluate(&self, point: &[f64]) -> Vec<f64> {
        self.function.evaluate(point)
    }
}

/// A single-objective benchmark problem with a known global optimum.
///
/// # Example
///
/// ```
/// use optbench::SingleObjectiveBenchmarkProblem;
/// use optbench_functions::Branin;
///
/// let problem = SingleObjectiveBenchmarkProblem::from_synthetic(Branin).unwrap();
/// assert_eq!(problem.search_space().len(), 2);
/// assert_eq!(problem.optimal_value(), 0.397887);
/// ```
#[derive(Clone)]
pub struct SingleObjectiveBenchmarkProblem {
    name: String,
    search_space: Arc<SearchSpace>,
    optimization_config: Arc<OptimizationConfig>,
    runner: Arc<dyn TrialRunner>,
    optimal_value: f64,
}

impl SingleObjectiveBenchmarkProblem {
    /// Derives a problem from a synthetic test function's metadata.
    ///
    /// The search space has exactly `dim` parameters named `x0..x(dim-1)`
    /// carrying the function's declared bounds bit-exactly; the sole
    /// objective minimizes the runner's output (test-function convention).
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Config` if the declared bounds do not match
    /// the declared dimensionality.
    pub fn from_synthetic<F: SyntheticFunction + 'static>(function: F) -> Result<Self> {
        let name = function.name().to_string();
        let search_space = derive_search_space(&name, function.dim(), &function.bounds())?;
        let optimization_config =
            OptimizationConfig::single_objective(Objective::minimize(name.clone()));
        let optimal_value = function.optimal_value();
        Ok(Self {
            name,
            search_space: Arc::new(search_space),
            optimization_config: Arc::new(optimization_config),
            runner: Arc::new(SyntheticRunner { function }),
            optimal_value,
        })
    }

    /// Returns the problem name.
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

    /// Returns the objective evaluation entry point.
    pub fn runner(&self) -> &Arc<dyn TrialRunner> {
        &self.runner
    }

    /// Returns the known global optimum, the normalization target for
    /// scoring a trace.
    pub fn optimal_value(&self) -> f64 {
        self.optimal_value
    }
}

impl fmt::Debug for SingleObjectiveBenchmarkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleObjectiveBenchmarkProblem")
            .field("name", &self.name)
            .field("search_space", &self.search_space)
            .field("optimization_config", &self.optimization_config)
            .field("optimal_value", &self.optimal_value)
            .finish_non_exhaustive()
    }
}

/// A multi-objective benchmark problem with a known Pareto front.
#[derive(Clone)]
pub struct MultiObjectiveBenchmarkProblem {
    name: String,
    search_space: Arc<SearchSpace>,
    optimization_config: Arc<OptimizationConfig>,
    runner: Arc<dyn TrialRunner>,
    reference_point: Vec<f64>,
    maximum_hypervolume: f64,
}

impl MultiObjectiveBenchmarkProblem {
    /// Derives a problem from a multi-objective test function's metadata.
    ///
    /// The reference point and maximum hypervolume are precomputed
    /// properties of the known Pareto front, read from the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Config` if the bounds/dimension disagree or
    /// the reference point's length does not match the objective count.
    pub fn from_synthetic<F: MultiObjectiveFunction + 'static>(function: F) -> Result<Self> {
        let name = function.name().to_string();
        let search_space = derive_search_space(&name, function.dim(), &function.bounds())?;

        let reference_point = function.reference_point();
        let num_objectives = function.num_objectives();
        if reference_point.len() != num_objectives {
            return Err(BenchError::Config(format!(
                "test function '{name}' declares {num_objectives} objectives but a \
                 reference point of length {}",
                reference_point.len()
            )));
        }

        let objectives = (0..num_objectives)
            .map(|i| Objective::minimize(format!("{name}_{i}")))
            .collect();
        Ok(Self {
            name,
            search_space: Arc::new(search_space),
            optimization_config: Arc::new(OptimizationConfig::multi_objective(objectives)),
            maximum_hypervolume: function.max_hypervolume(),
            runner: Arc::new(MultiObjectiveRunner { function }),
            reference_point,
        })
    }

    /// Returns the problem name.
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

    /// Returns the objective evaluation entry point.
    pub fn runner(&self) -> &Arc<dyn TrialRunner> {
        &self.runner
    }

    /// Returns the hypervolume reference point, one entry per objective.
    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Returns the hypervolume of the true Pareto front relative to the
    /// reference point, the normalization target for multi-objective
    /// traces.
    pub fn maximum_hypervolume(&self) -> f64 {
        self.maximum_hypervolume
    }
}

impl fmt::Debug for MultiObjectiveBenchmarkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiObjectiveBenchmarkProblem")
            .field("name", &self.name)
            .field("search_space", &self.search_space)
            .field("optimization_config", &self.optimization_config)
            .field("reference_point", &self.reference_point)
            .field("maximum_hypervolume", &self.maximum_hypervolume)
            .finish_non_exhaustive()
    }
}

/// A benchmark problem of either kind.
///
/// The set of problem kinds is closed, so dispatch is on the variant
/// rather than on open-ended trait objects. Cloning shares the underlying
/// search space, config, and runner.
#[derive(Debug, Clone)]
pub enum BenchmarkProblem {
    /// Single-objective problem with a known global optimum.
    SingleObjective(SingleObjectiveBenchmarkProblem),
    /// Multi-objective problem with a known Pareto front.
    MultiObjective(MultiObjectiveBenchmarkProblem),
}

impl BenchmarkProblem {
    /// Returns the problem name.
    pub fn name(&self) -> &str {
        match self {
            Self::SingleObjective(p) => p.name(),
            Self::MultiObjective(p) => p.name(),
        }
    }

    /// Returns the shared search space.
    pub fn search_space(&self) -> &Arc<SearchSpace> {
        match self {
            Self::SingleObjective(p) => p.search_space(),
            Self::MultiObjective(p) => p.search_space(),
        }
    }

    /// Returns the shared optimization config.
    pub fn optimization_config(&self) -> &Arc<OptimizationConfig> {
        match self {
            Self::SingleObjective(p) => p.optimization_config(),
            Self::MultiObjective(p) => p.optimization_config(),
        }
    }

    /// Returns the objective evaluation entry point.
    pub fn runner(&self) -> &Arc<dyn TrialRunner> {
        match self {
            Self::SingleObjective(p) => p.runner(),
            Self::MultiObjective(p) => p.runner(),
        }
    }
}

impl From<SingleObjectiveBenchmarkProblem> for BenchmarkProblem {
    fn from(problem: SingleObjectiveBenchmarkProblem) -> Self {
        Self::SingleObjective(problem)
    }
}

impl From<MultiObjectiveBenchmarkProblem> for BenchmarkProblem {
    fn from(problem: MultiObjectiveBenchmarkProblem) -> Self {
        Self::MultiObjective(problem)
    }
}

#[cfg(test)]
mod tests {
    use optbench_functions::{Ackley, BraninCurrin};

    use super::*;

    struct LyingBounds;

    impl SyntheticFunction for LyingBounds {
        fn name(&self) -> &str {
            "lying"
        }

        fn dim(&self) -> usize {
            3
        }

        fn bounds(&self) -> Vec<(f64, f64)> {
            vec![(0.0, 1.0); 2]
        }

        fn optimal_value(&self) -> f64 {
            0.0
        }

        fn evaluate(&self, _point: &[f64]) -> f64 {
            0.0
        }
    }

    struct ShortReferencePoint;

    impl MultiObjectiveFunction for ShortReferencePoint {
        fn name(&self) -> &str {
            "short_ref"
        }

        fn dim(&self) -> usize {
            2
        }

        fn bounds(&self) -> Vec<(f64, f64)> {
            vec![(0.0, 1.0); 2]
        }

        fn num_objectives(&self) -> usize {
            2
        }

        fn reference_point(&self) -> Vec<f64> {
            vec![1.0]
        }

        fn max_hypervolume(&self) -> f64 {
            1.0
        }

        fn evaluate(&self, _point: &[f64]) -> Vec<f64> {
            vec![0.0, 0.0]
        }
    }

    #[test]
    fn test_single_objective_from_synthetic() {
        let function = Ackley::new(5);
        let bounds = function.bounds();
        let problem = SingleObjectiveBenchmarkProblem::from_synthetic(function).unwrap();

        assert_eq!(problem.search_space().len(), 5);
        for (i, p) in problem.search_space().parameters().iter().enumerate() {
            assert_eq!(p.name(), format!("x{i}"));
            assert_eq!(p.lower(), bounds[i].0);
            assert_eq!(p.upper(), bounds[i].1);
        }
        assert_eq!(problem.optimal_value(), 0.0);
        assert_eq!(problem.optimization_config().num_objectives(), 1);
        assert!(problem.optimization_config().objectives()[0].is_minimized());
    }

    #[test]
    fn test_multi_objective_from_synthetic() {
        let function = BraninCurrin;
        let bounds = function.bounds();
        let reference_point = function.reference_point();
        let max_hv = function.max_hypervolume();
        let problem = MultiObjectiveBenchmarkProblem::from_synthetic(function).unwrap();

        assert_eq!(problem.search_space().len(), 2);
        for (i, p) in problem.search_space().parameters().iter().enumerate() {
            assert_eq!(p.lower(), bounds[i].0);
            assert_eq!(p.upper(), bounds[i].1);
        }
        assert_eq!(problem.reference_point(), reference_point.as_slice());
        assert_eq!(problem.maximum_hypervolume(), max_hv);
        assert_eq!(problem.optimization_config().num_objectives(), 2);
    }

    #[test]
    fn test_bounds_dimension_mismatch_rejected() {
        let err = SingleObjectiveBenchmarkProblem::from_synthetic(LyingBounds).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
        assert!(err.to_string().contains("dim 3"));
    }

    #[test]
    fn test_reference_point_arity_mismatch_rejected() {
        let err = MultiObjectiveBenchmarkProblem::from_synthetic(ShortReferencePoint).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
        assert!(err.to_string().contains("reference point"));
    }

    #[test]
    fn test_problems_format_without_exposing_runner() {
        let single = SingleObjectiveBenchmarkProblem::from_synthetic(Ackley::new(2)).unwrap();
        let formatted = format!("{single:?}");
        assert!(formatted.contains("SingleObjectiveBenchmarkProblem"));
        assert!(formatted.contains("optimal_value"));

        let multi = MultiObjectiveBenchmarkProblem::from_synthetic(BraninCurrin).unwrap();
        let formatted = format!("{multi:?}");
        assert!(formatted.contains("reference_point"));
        assert!(formatted.ends_with(".. }"));
    }

    #[test]
    fn test_variant_accessors_share_handles() {
        let problem =
            SingleObjectiveBenchmarkProblem::from_synthetic(Ackley::new(2)).unwrap();
        let space = problem.search_space().clone();
        let wrapped: BenchmarkProblem = problem.into();
        assert!(Arc::ptr_eq(wrapped.search_space(), &space));
        assert_eq!(wrapped.name(), "ackley");
    }
}
