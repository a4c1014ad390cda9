//! Multi-objective synthetic test functions.

use crate::descriptor::MultiObjectiveFunction;
use crate::synthetic::branin;

/// Two-objective Branin/Currin pair on the unit square.
///
/// Both objectives are minimized. The reference point and maximum
/// hypervolume are the precomputed constants published for this problem's
/// Pareto front; they are metadata, not recomputed here.
#[derive(Debug, Clone, Copy)]
pub struct BraninCurrin;

impl BraninCurrin {
    fn currin(x1: f64, x2: f64) -> f64 {
        let factor = if x2 == 0.0 {
            1.0
        } else {
            1.0 - (-1.0 / (2.0 * x2)).exp()
        };
        let numer = 2300.0 * x1.powi(3) + 1900.0 * x1 * x1 + 2092.0 * x1 + 60.0;
        let denom = 100.0 * x1.powi(3) + 500.0 * x1 * x1 + 4.0 * x1 + 20.0;
        factor * numer / denom
    }
}

impl MultiObjectiveFunction for BraninCurrin {
    fn name(&self) -> &str {
        "branin_currin"
    }

    fn dim(&self) -> usize {
        2
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0.0, 1.0), (0.0, 1.0)]
    }

    fn num_objectives(&self) -> usize {
        2
    }

    fn reference_point(&self) -> Vec<f64> {
        vec![18.0, 6.0]
    }

    fn max_hypervolume(&self) -> f64 {
        59.36011874867746
    }

    fn evaluate(&self, point: &[f64]) -> Vec<f64> {
        let (x1, x2) = (point[0], point[1]);
        // The Branin arm rescales the unit square onto Branin's domain.
        vec![
            branin(15.0 * x1 - 5.0, 15.0 * x2),
            Self::currin(x1, x2),
        ]
    }
}
