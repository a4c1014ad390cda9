//! End-to-end harness scenarios: derive a problem, run replications,
//! aggregate, and report.

use std::sync::Arc;

use optbench::{
    stubs, AggregatedBenchmarkResult, BenchmarkMethod, BenchmarkProblem, BenchmarkRunner,
    BenchmarkSuiteConfig, CsvExporter, ExecutionOptions, GenerationStep, GenerationStrategy,
    MarkdownReport, ModelKind, RandomSearchEngine, SingleObjectiveBenchmarkProblem,
};
use optbench_functions::SyntheticFunction;

/// Four-dimensional unit-cube function with a known optimum, as a stand-in
/// for an externally defined descriptor.
struct UnitCube4;

impl SyntheticFunction for UnitCube4 {
    fn name(&self) -> &str {
        "unit_cube4"
    }

    fn dim(&self) -> usize {
        4
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0.0, 1.0); 4]
    }

    fn optimal_value(&self) -> f64 {
        0.397
    }

    fn evaluate(&self, point: &[f64]) -> f64 {
        point.iter().sum::<f64>() + 0.397
    }
}

#[test]
fn derived_search_space_matches_descriptor_metadata() {
    let problem = SingleObjectiveBenchmarkProblem::from_synthetic(UnitCube4).unwrap();

    let parameters = problem.search_space().parameters();
    assert_eq!(parameters.len(), 4);
    for (i, p) in parameters.iter().enumerate() {
        assert_eq!(p.name(), format!("x{i}"));
        assert_eq!(p.lower(), 0.0);
        assert_eq!(p.upper(), 1.0);
    }
    assert_eq!(problem.optimal_value(), 0.397);
}

#[test]
fn two_replication_aggregation_scenario() {
    let a = stubs::benchmark_result_with_trace(vec![3.0, 2.0, 1.0, 0.0]);
    let b = stubs::benchmark_result_with_trace(vec![4.0, 2.0, 0.0, 0.0]);

    let agg = AggregatedBenchmarkResult::from_benchmark_results(&[a, b]).unwrap();
    assert_eq!(agg.optimization_trace_mean, vec![3.5, 2.0, 0.5, 0.0]);
}

#[test]
fn full_run_from_suite_config() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = BenchmarkSuiteConfig::from_toml_str(
        r#"
        name = "smoke"
        replications = 4
        seed = 17
        quantile_levels = [0.25, 0.5, 0.75]
    "#,
    )
    .unwrap();

    let problem: BenchmarkProblem =
        SingleObjectiveBenchmarkProblem::from_synthetic(UnitCube4)
            .unwrap()
            .into();
    let method = BenchmarkMethod::new(
        "Random8",
        Arc::new(GenerationStrategy::new(
            "RANDOM",
            vec![GenerationStep::new(ModelKind::RandomSearch, -1)],
        )),
        Arc::new(ExecutionOptions::new(8)),
    )
    .unwrap();
    let engine = RandomSearchEngine::new(config.seed());

    let runner = BenchmarkRunner::from_config(&config);
    let results = runner.run_replications(&problem, &method, &engine).unwrap();
    assert_eq!(results.len(), 4);
    for result in &results {
        assert_eq!(result.optimization_trace.len(), 8);
        // Best-so-far values never fall below the known optimum.
        assert!(result
            .optimization_trace
            .iter()
            .all(|&v| v >= 0.397));
    }

    let agg = runner.run(&problem, &method, &engine).unwrap();
    assert_eq!(agg.trace_len(), 8);

    let csv = CsvExporter::to_string(&agg);
    assert!(csv.lines().count() == 9);
    let md = MarkdownReport::to_string(&agg);
    assert!(md.contains("## Summary"));
}

#[test]
fn multi_objective_full_run() {
    let problem: BenchmarkProblem = stubs::multi_objective_problem().into();
    let max_hv = match &problem {
        BenchmarkProblem::MultiObjective(p) => p.maximum_hypervolume(),
        _ => unreachable!(),
    };

    let agg = BenchmarkRunner::new()
        .with_replications(3)
        .run(&problem, &stubs::sobol_method(), &RandomSearchEngine::new(5))
        .unwrap();

    // Observed hypervolume never exceeds the true front's hypervolume.
    assert!(agg
        .optimization_trace_mean
        .iter()
        .all(|&hv| hv >= 0.0 && hv <= max_hv));
}
