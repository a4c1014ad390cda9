//! Optbench Core - Core types for benchmarking black-box optimization methods
//!
//! This crate provides the fundamental abstractions for optbench:
//! - Range parameters and search spaces describing decision variables
//! - Optimization configs describing objectives and their directions
//! - The trial-runner seam between a problem and an execution engine
//! - Error types shared across the harness

pub mod error;
pub mod experiment;
pub mod objective;
pub mod parameter;

pub use error::{BenchError, Result};
pub use experiment::{Experiment, TrialRunner};
pub use objective::{Objective, OptimizationConfig};
pub use parameter::{RangeParameter, SearchSpace};
