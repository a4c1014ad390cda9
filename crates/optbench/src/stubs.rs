//! Canned problems, methods, and results shared by tests and examples.

use std::sync::Arc;

use optbench_core::Experiment;
use optbench_functions::{Branin, BraninCurrin};

use crate::method::{
    BenchmarkMethod, ExecutionOptions, GenerationStep, GenerationStrategy, ModelKind,
};
use crate::problem::{MultiObjectiveBenchmarkProblem, SingleObjectiveBenchmarkProblem};
use crate::result::BenchmarkResult;

/// Branin-based single-objective problem.
pub fn single_objective_problem() -> SingleObjectiveBenchmarkProblem {
    SingleObjectiveBenchmarkProblem::from_synthetic(Branin)
        .expect("Branin metadata is well-formed")
}

/// Branin/Currin-based multi-objective problem.
pub fn multi_objective_problem() -> MultiObjectiveBenchmarkProblem {
    MultiObjectiveBenchmarkProblem::from_synthetic(BraninCurrin)
        .expect("BraninCurrin metadata is well-formed")
}

/// A Sobol method with a four-trial budget.
pub fn sobol_method() -> BenchmarkMethod {
    BenchmarkMethod::new(
        "SOBOL",
        Arc::new(GenerationStrategy::new(
            "SOBOL",
            vec![GenerationStep::new(ModelKind::Sobol, -1)],
        )),
        Arc::new(ExecutionOptions::new(4)),
    )
    .expect("budget is bound")
}

/// A completed replication with the given trace.
pub fn benchmark_result_with_trace(optimization_trace: Vec<f64>) -> BenchmarkResult {
    let problem = single_objective_problem();
    let experiment = Experiment::new(
        "stub_experiment",
        problem.search_space().clone(),
        problem.optimization_config().clone(),
        problem.runner().clone(),
    );
    BenchmarkResult {
        name: "stub_result".to_string(),
        experiment,
        optimization_trace,
        fit_time: 0.1,
        gen_time: 0.2,
    }
}

/// A completed replication with the trace `[3, 2, 1, 0]`.
pub fn benchmark_result() -> BenchmarkResult {
    benchmark_result_with_trace(vec![3.0, 2.0, 1.0, 0.0])
}
