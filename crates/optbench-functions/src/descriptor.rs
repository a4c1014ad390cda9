//! Descriptor traits for analytic test functions.

/// A single-objective analytic test function with known metadata.
///
/// Bounds and the optimal value are declared properties of the function,
/// not computed by the harness; problems derived from a descriptor pass
/// them through exactly. Test functions follow the minimization
/// convention.
pub trait SyntheticFunction: Send + Sync {
    /// Returns the function name.
    fn name(&self) -> &str;

    /// Returns the number of dimensions.
    fn dim(&self) -> usize;

    /// Returns per-dimension `(lower, upper)` bounds, of length `dim`.
    fn bounds(&self) -> Vec<(f64, f64)>;

    /// Returns the known global minimum value.
    fn optimal_value(&self) -> f64;

    /// Evaluates the function at a point of length `dim`.
    fn evaluate(&self, point: &[f64]) -> f64;
}

/// A multi-objective analytic test function with a known Pareto front.
///
/// The reference point and maximum hypervolume are precomputed properties
/// of the front relative to that reference point. Recomputing hypervolume
/// from the analytic front is the descriptor author's responsibility, not
/// the harness's.
pub trait MultiObjectiveFunction: Send + Sync {
    /// Returns the function name.
    fn name(&self) -> &str;

    /// Returns the number of dimensions.
    fn dim(&self) -> usize;

    /// Returns per-dimension `(lower, upper)` bounds, of length `dim`.
    fn bounds(&self) -> Vec<(f64, f64)>;

    /// Returns the number of objectives.
    fn num_objectives(&self) -> usize;

    /// Returns the hypervolume reference point, one entry per objective.
    fn reference_point(&self) -> Vec<f64>;

    /// Returns the hypervolume of the true Pareto front relative to the
    /// reference point.
    fn max_hypervolume(&self) -> f64;

    /// Evaluates the function at a point, returning one value per
    /// objective.
    fn evaluate(&self, point: &[f64]) -> Vec<f64>;
}
