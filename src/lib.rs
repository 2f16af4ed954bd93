//! Monte Carlo evaluation of reorder-point inventory policies under
//! stochastic demand, stochastic lead time and weekly supply disruptions.

pub mod error;
pub mod io;
pub mod model;
pub mod scenarios;
pub mod simulation;
pub mod stochastic;
pub mod strategy;
