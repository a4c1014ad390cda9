//! Single-objective synthetic test functions.

use std::f64::consts::{E, PI};

use crate::descriptor::SyntheticFunction;

/// Sphere function: unimodal, convex. Global minimum f(0,...,0) = 0.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    dim: usize,
}

impl Sphere {
    /// Creates a sphere function of the given dimensionality.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl SyntheticFunction for Sphere {
    fn name(&self) -> &str {
        "sphere"
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(-5.12, 5.12); self.dim]
    }

    fn optimal_value(&self) -> f64 {
        0.0
    }

    fn evaluate(&self, point: &[f64]) -> f64 {
        point.iter().map(|xi| xi * xi).sum()
    }
}

/// Rastrigin function: highly multimodal. Global minimum f(0,...,0) = 0.
#[derive(Debug, Clone, Copy)]
pub struct Rastrigin {
    dim: usize,
}

impl Rastrigin {
    /// Creates a Rastrigin function of the given dimensionality.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl SyntheticFunction for Rastrigin {
    fn name(&self) -> &str {
        "rastrigin"
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(-5.12, 5.12); self.dim]
    }

    fn optimal_value(&self) -> f64 {
        0.0
    }

    fn evaluate(&self, point: &[f64]) -> f64 {
        let n = point.len() as f64;
        10.0 * n
            + point
                .iter()
                .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }
}

/// Ackley function: nearly flat with a deep well. Global minimum
/// f(0,...,0) = 0.
#[derive(Debug, Clone, Copy)]
pub struct Ackley {
    dim: usize,
}

impl Ackley {
    /// Creates an Ackley function of the given dimensionality.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl SyntheticFunction for Ackley {
    fn name(&self) -> &str {
        "ackley"
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(-32.768, 32.768); self.dim]
    }

    fn optimal_value(&self) -> f64 {
        0.0
    }

    fn evaluate(&self, point: &[f64]) -> f64 {
        let n = point.len() as f64;
        let sum_sq: f64 = point.iter().map(|xi| xi * xi).sum();
        let sum_cos: f64 = point.iter().map(|xi| (2.0 * PI * xi).cos()).sum();
        -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
    }
}

/// Branin function (2D). Three global minima with f* = 0.397887.
#[derive(Debug, Clone, Copy)]
pub struct Branin;

/// Branin on its standard domain. Shared with the Branin arm of
/// [`crate::BraninCurrin`], which rescales from the unit square.
pub(crate) fn branin(x1: f64, x2: f64) -> f64 {
    let b = 5.1 / (4.0 * PI * PI);
    let c = 5.0 / PI;
    let t = 1.0 / (8.0 * PI);
    (x2 - b * x1 * x1 + c * x1 - 6.0).powi(2) + 10.0 * (1.0 - t) * x1.cos() + 10.0
}

impl SyntheticFunction for Branin {
    fn name(&self) -> &str {
        "branin"
    }

    fn dim(&self) -> usize {
        2
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(-5.0, 10.0), (0.0, 15.0)]
    }

    fn optimal_value(&self) -> f64 {
        0.397887
    }

    fn evaluate(&self, point: &[f64]) -> f64 {
        branin(point[0], point[1])
    }
}
