//! Range parameters and search spaces.
//!
//! A search space is an ordered collection of range parameters, one per
//! decision variable. Insertion order is dimension order, and parameter
//! names are unique within a space. Spaces derived from an analytic test
//! function use the names `x0..x(dim-1)` so that dimension `i`'s bounds
//! equal the function's declared bounds for dimension `i`.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// A continuous decision variable with inclusive numeric bounds.
///
/// Immutable once constructed; `lower < upper` is enforced at construction.
///
/// # Example
///
/// ```
/// use optbench_core::RangeParameter;
///
/// let p = RangeParameter::new("x0", -5.0, 10.0).unwrap();
/// assert_eq!(p.name(), "x0");
/// assert_eq!(p.lower(), -5.0);
/// assert_eq!(p.upper(), 10.0);
///
/// assert!(RangeParameter::new("bad", 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeParameter {
    name: String,
    lower: f64,
    upper: f64,
}

impl RangeParameter {
    /// Creates a new range parameter.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Config` if `lower >= upper`.
    pub fn new(name: impl Into<String>, lower: f64, upper: f64) -> Result<Self> {
        let name = name.into();
        if lower >= upper {
            return Err(BenchError::Config(format!(
                "parameter '{name}': lower bound {lower} must be strictly below upper bound {upper}"
            )));
        }
        Ok(Self { name, lower, upper })
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

/// An ordered, immutable collection of range parameters.
///
/// # Example
///
/// ```
/// use optbench_core::SearchSpace;
///
/// let space = SearchSpace::from_bounds(&[(0.0, 1.0), (-1.0, 1.0)]).unwrap();
/// assert_eq!(space.len(), 2);
/// assert_eq!(space.parameters()[1].name(), "x1");
/// assert_eq!(space.get("x1").unwrap().lower(), -1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    parameters: Vec<RangeParameter>,
}

impl SearchSpace {
    /// Builds a search space from an ordered list of parameters.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Config` if two parameters share a name.
    pub fn new(parameters: Vec<RangeParameter>) -> Result<Self> {
        for (i, p) in parameters.iter().enumerate() {
            if parameters[..i].iter().any(|q| q.name() == p.name()) {
                return Err(BenchError::Config(format!(
                    "duplicate parameter name '{}'",
                    p.name()
                )));
            }
        }
        Ok(Self { parameters })
    }

    /// Derives a search space from per-dimension bounds.
    ///
    /// Parameter `i` is named `x{i}` and carries `bounds[i]` exactly, with
    /// no rounding or clamping.
    pub fn from_bounds(bounds: &[(f64, f64)]) -> Result<Self> {
        let parameters = bounds
            .iter()
            .enumerate()
            .map(|(i, &(lower, upper))| RangeParameter::new(format!("x{i}"), lower, upper))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parameters)
    }

    /// Returns the parameters in dimension order.
    pub fn parameters(&self) -> &[RangeParameter] {
        &self.parameters
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&RangeParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Returns the number of dimensions.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns whether the space has no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
