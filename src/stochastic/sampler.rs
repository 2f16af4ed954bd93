// src/stochastic/sampler.rs

use crate::error::{Result, SimError};
use rand::Rng;
use rand_distr::{Distribution, Normal, Triangular};
use std::fmt;

/// A pluggable one-dimensional distribution.
///
/// Demand and lead time are both configured as a `Sampler`, so tests can swap
/// either for a `Constant` without touching the trial loop.
#[derive(Debug, Clone)]
pub enum Sampler {
    Normal {
        mean: f64,
        std_dev: f64,
        dist: Normal<f64>,
    },
    Triangular {
        min: f64,
        mode: f64,
        max: f64,
        dist: Triangular<f64>,
    },
    Constant(f64),
}

impl Sampler {
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| SimError::InvalidDistribution(format!("normal({mean}, {std_dev}): {e}")))?;
        Ok(Sampler::Normal {
            mean,
            std_dev,
            dist,
        })
    }

    /// Arguments follow the (min, mode, max) convention, not `rand_distr`'s
    /// (min, max, mode).
    pub fn triangular(min: f64, mode: f64, max: f64) -> Result<Self> {
        if !(min < max) {
            return Err(SimError::InvalidDistribution(format!(
                "triangular({min}, {mode}, {max}): min must be below max"
            )));
        }
        let dist = Triangular::new(min, max, mode).map_err(|e| {
            SimError::InvalidDistribution(format!("triangular({min}, {mode}, {max}): {e}"))
        })?;
        Ok(Sampler::Triangular {
            min,
            mode,
            max,
            dist,
        })
    }

    pub fn constant(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(SimError::InvalidDistribution(format!(
                "constant({value}) is not finite"
            )));
        }
        Ok(Sampler::Constant(value))
    }

    /// Smallest value the distribution can produce.
    pub fn min_support(&self) -> f64 {
        match self {
            Sampler::Normal { .. } => f64::NEG_INFINITY,
            Sampler::Triangular { min, .. } => *min,
            Sampler::Constant(v) => *v,
        }
    }

    /// Draws a sample, clamps negatives to zero and truncates toward zero.
    pub fn draw_units<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let raw: f64 = self.sample(rng);
        // `as` saturates, and maps NaN to 0.
        raw.max(0.0) as u64
    }
}

impl Distribution<f64> for Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Normal { dist, .. } => dist.sample(rng),
            Sampler::Triangular { dist, .. } => dist.sample(rng),
            Sampler::Constant(v) => *v,
        }
    }
}

impl fmt::Display for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sampler::Normal { mean, std_dev, .. } => write!(f, "normal({mean}, {std_dev})"),
            Sampler::Triangular { min, mode, max, .. } => {
                write!(f, "triangular({min}, {mode}, {max})")
            }
            Sampler::Constant(v) => write!(f, "constant({v})"),
        }
    }
}
