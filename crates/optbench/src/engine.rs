//! Reference execution engine.
//!
//! Random search is the weakest baseline any optimization method must
//! beat, and the simplest engine that exercises the whole harness end to
//! end. Real optimization engines live outside this crate and implement
//! [`ExecutionEngine`](crate::ExecutionEngine) the same way.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use optbench_core::{BenchError, Experiment, Result};

use crate::method::BenchmarkMethod;
use crate::problem::BenchmarkProblem;
use crate::result::BenchmarkResult;
use crate::runner::ExecutionEngine;

/// Seeded uniform random search over the problem's search space.
///
/// Replication `i` uses seed `base_seed + i`, so every replication is
/// independent yet the whole run is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct RandomSearchEngine {
    seed: u64,
}

impl RandomSearchEngine {
    /// Creates an engine with the given base seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ExecutionEngine for RandomSearchEngine {
    fn run_replication(
        &self,
        problem: &BenchmarkProblem,
        method: &BenchmarkMethod,
        replication: usize,
    ) -> Result<BenchmarkResult> {
        let total_trials = method.total_trials() as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(replication as u64));
        let started = Instant::now();

        let mut trace = Vec::with_capacity(total_trials);
        match problem {
            BenchmarkProblem::SingleObjective(p) => {
                let mut best = f64::INFINITY;
                for _ in 0..total_trials {
                    let point = sample_point(&mut rng, problem);
                    let value = p.runner().evaluate(&point)[0];
                    best = best.min(value);
                    trace.push(best);
                }
            }
            BenchmarkProblem::MultiObjective(p) => {
                if p.reference_point().len() != 2 {
                    return Err(BenchError::Config(format!(
                        "random search supports two objectives, problem '{}' has {}",
                        p.name(),
                        p.reference_point().len()
                    )));
                }
                let mut observed: Vec<[f64; 2]> = Vec::with_capacity(total_trials);
                for _ in 0..total_trials {
                    let point = sample_point(&mut rng, problem);
                    let values = p.runner().evaluate(&point);
                    observed.push([values[0], values[1]]);
                    trace.push(hypervolume_2d(
                        &observed,
                        [p.reference_point()[0], p.reference_point()[1]],
                    ));
                }
            }
        }

        let experiment = Experiment::new(
            format!("{}_{}_{replication}", problem.name(), method.name()),
            problem.search_space().clone(),
            problem.optimization_config().clone(),
            problem.runner().clone(),
        );
        Ok(BenchmarkResult {
            name: experiment.name().to_string(),
            experiment,
            optimization_trace: trace,
            // Random search fits no model.
            fit_time: 0.0,
            gen_time: started.elapsed().as_secs_f64(),
        })
    }
}

fn sample_point(rng: &mut ChaCha8Rng, problem: &BenchmarkProblem) -> Vec<f64> {
    problem
        .search_space()
        .parameters()
        .iter()
        .map(|p| rng.random_range(p.lower()..p.upper()))
        .collect()
}

/// Hypervolume dominated by `points` relative to `reference`, for two
/// minimized objectives. Points outside the reference box contribute
/// nothing.
fn hypervolume_2d(points: &[[f64; 2]], reference: [f64; 2]) -> f64 {
    let mut front: Vec<[f64; 2]> = points
        .iter()
        .copied()
        .filter(|p| p[0] < reference[0] && p[1] < reference[1])
        .collect();
    front.sort_by(|a, b| a[0].total_cmp(&b[0]));

    // Sweep left to right; only points improving the second objective
    // extend the dominated region.
    let mut hypervolume = 0.0;
    let mut ceiling = reference[1];
    for point in front {
        if point[1] < ceiling {
            hypervolume += (reference[0] - point[0]) * (ceiling - point[1]);
            ceiling = point[1];
        }
    }
    hypervolume
}
