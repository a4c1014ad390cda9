//! Objectives and optimization configs.

use serde::{Deserialize, Serialize};

/// A single objective: a named metric and its optimization direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    name: String,
    minimize: bool,
}

impl Objective {
    /// Creates an objective that minimizes the named metric.
    pub fn minimize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimize: true,
        }
    }

    /// Creates an objective that maximizes the named metric.
    pub fn maximize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimize: false,
        }
    }

    /// Returns the metric name this objective targets.
    pub fn metric_name(&self) -> &str {
        &self.name
    }

    /// Returns true if the metric is minimized.
    pub fn is_minimized(&self) -> bool {
        self.minimize
    }
}

/// Describes the direction(s) of optimization for a benchmark problem.
///
/// Single-objective problems hold exactly one objective; multi-objective
/// problems hold one per metric, in metric order.
///
/// # Example
///
/// ```
/// use optbench_core::{Objective, OptimizationConfig};
///
/// let config = OptimizationConfig::single_objective(Objective::minimize("branin"));
/// assert_eq!(config.num_objectives(), 1);
/// assert!(config.objectives()[0].is_minimized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationConfig {
    objectives: Vec<Objective>,
}

impl OptimizationConfig {
    /// Creates a config with a single objective.
    pub fn single_objective(objective: Objective) -> Self {
        Self {
            objectives: vec![objective],
        }
    }

    /// Creates a config with multiple objectives, in metric order.
    pub fn multi_objective(objectives: Vec<Objective>) -> Self {
        Self { objectives }
    }

    /// Returns the objectives in metric order.
    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Returns the number of objectives.
    pub fn num_objectives(&self) -> usize {
        self.objectives.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_objective_config() {
        let config = OptimizationConfig::single_objective(Objective::minimize("ackley"));
        assert_eq!(config.num_objectives(), 1);
        assert_eq!(config.objectives()[0].metric_name(), "ackley");
    }

    #[test]
    fn test_multi_objective_order_preserved() {
        let config = OptimizationConfig::multi_objective(vec![
            Objective::minimize("branin"),
            Objective::minimize("currin"),
        ]);
        assert_eq!(config.num_objectives(), 2);
        assert_eq!(config.objectives()[1].metric_name(), "currin");
    }
}
