//! Reproducible benchmarking harness for black-box optimization methods.
//!
//! This crate standardizes three concerns:
//! - Defining a benchmark *problem*: a search space plus objective(s) with
//!   known optimal value(s), derived from an analytic test function's
//!   metadata
//! - Defining a benchmark *method*: an optimization strategy bound to a
//!   finite trial budget, validated at construction
//! - Running a method against a problem for N independent replications and
//!   aggregating the raw traces into comparable statistics
//!
//! The optimization engine itself is an external collaborator behind the
//! [`ExecutionEngine`] trait; a seeded [`RandomSearchEngine`] baseline is
//! included so the harness runs end to end out of the box.
//!
//! # Example
//!
//! ```
//! use optbench::{
//!     BenchmarkRunner, RandomSearchEngine, SingleObjectiveBenchmarkProblem,
//! };
//! use optbench_functions::Branin;
//!
//! let problem = SingleObjectiveBenchmarkProblem::from_synthetic(Branin).unwrap();
//! let method = optbench::stubs::sobol_method();
//!
//! let agg = BenchmarkRunner::new()
//!     .with_replications(2)
//!     .run(&problem.into(), &method, &RandomSearchEngine::new(0))
//!     .unwrap();
//!
//! assert_eq!(agg.trace_len(), 4);
//! ```

mod config;
mod engine;
mod method;
mod problem;
mod report;
mod result;
mod runner;
pub mod stubs;

pub use config::{BenchmarkSuiteConfig, ConfigFileError};
pub use engine::RandomSearchEngine;
pub use method::{
    BenchmarkMethod, ExecutionOptions, GenerationStep, GenerationStrategy, ModelKind,
};
pub use problem::{
    BenchmarkProblem, MultiObjectiveBenchmarkProblem, SingleObjectiveBenchmarkProblem,
};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{
    AggregatedBenchmarkResult, BenchmarkResult, ScalarStats, DEFAULT_QUANTILE_LEVELS,
};
pub use runner::{BenchmarkRunner, ExecutionEngine};

pub use optbench_core::{
    BenchError, Experiment, Objective, OptimizationConfig, RangeParameter, Result, SearchSpace,
    TrialRunner,
};
