pub mod config;
pub mod cost;
pub mod engine;
pub mod monte_carlo;
pub mod sweep;
