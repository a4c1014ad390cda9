//! Analytic test-function descriptors for optbench.
//!
//! Each descriptor exposes the closed-form metadata a benchmark problem is
//! derived from: dimensionality, per-dimension bounds, and the known
//! optimum (single-objective) or reference point and maximum hypervolume
//! (multi-objective). Descriptors also evaluate points so an execution
//! engine can run trials against them.
//!
//! # Example
//!
//! ```
//! use optbench_functions::{Branin, SyntheticFunction};
//!
//! let f = Branin;
//! assert_eq!(f.dim(), 2);
//! assert_eq!(f.bounds().len(), 2);
//! // The known optimum, read from metadata rather than recomputed.
//! assert!((f.optimal_value() - 0.397887).abs() < 1e-6);
//! ```

mod descriptor;
mod multi_objective;
mod synthetic;

pub use descriptor::{MultiObjectiveFunction, SyntheticFunction};
pub use multi_objective::BraninCurrin;
pub use synthetic::{Ackley, Branin, Rastrigin, Sphere};
