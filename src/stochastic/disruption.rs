// src/stochastic/disruption.rs

use rand::Rng;

/// One named, independent source of supply risk (transport, labor, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSource {
    pub name: String,
    /// Probability that this source fires on a review day.
    pub probability: f64,
}

impl RiskSource {
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            probability,
        }
    }
}

/// Periodic supply disruptions.
///
/// Risk is only assessed on review days (`day % review_period_days == 0`).
/// A review day is disrupted if any source fires; every other day is clear.
#[derive(Debug, Clone, PartialEq)]
pub struct DisruptionModel {
    pub review_period_days: u32,
    pub sources: Vec<RiskSource>,
}

impl DisruptionModel {
    pub fn weekly(sources: Vec<RiskSource>) -> Self {
        Self {
            review_period_days: 7,
            sources,
        }
    }

    /// A model that never disrupts.
    pub fn none() -> Self {
        Self::weekly(Vec::new())
    }

    pub fn is_review_day(&self, day: u32) -> bool {
        self.review_period_days > 0 && day % self.review_period_days == 0
    }

    /// Draws the disruption flag for `day`. Consumes randomness only on
    /// review days, and stops drawing once one source has fired.
    pub fn draw<R: Rng + ?Sized>(&self, day: u32, rng: &mut R) -> bool {
        if !self.is_review_day(day) {
            return false;
        }
        self.sources
            .iter()
            .any(|source| rng.gen::<f64>() < source.probability)
    }

    /// Probability that a review day is disrupted.
    pub fn review_day_probability(&self) -> f64 {
        1.0 - self
            .sources
            .iter()
            .map(|s| 1.0 - s.probability)
            .product::<f64>()
    }
}

impl Default for DisruptionModel {
    fn default() -> Self {
        Self::weekly(vec![RiskSource::new("transport", 0.1)])
    }
}
