// src/simulation/config.rs

use crate::error::{Result, SimError};
use crate::stochastic::disruption::DisruptionModel;
use crate::stochastic::sampler::Sampler;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct CostRates {
    pub holding_per_unit_day: f64,
    pub stockout_per_unit: f64,
    pub per_order: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            holding_per_unit_day: 0.02,
            stockout_per_unit: 1.00,
            per_order: 100.0,
        }
    }
}

/// Everything one group of trials needs. Read-only once built.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub label: String,
    pub description: String,
    /// Optional grouping tag for reports, e.g. a plant's region.
    pub group: Option<String>,

    pub demand: Sampler,
    pub lead_time: Sampler,

    pub initial_inventory: u64,
    pub reorder_point: u64,
    pub order_qty: u64,

    pub disruptions: DisruptionModel,
    pub costs: CostRates,
    pub horizon_days: u32,
}

impl Configuration {
    /// A configuration with the standard policy: 50,000 units on hand,
    /// reorder at 30,000, order 50,000, weekly transport risk, 180 days.
    pub fn new(label: impl Into<String>, demand: Sampler, lead_time: Sampler) -> Self {
        Self {
            label: label.into(),
            description: String::new(),
            group: None,
            demand,
            lead_time,
            initial_inventory: 50_000,
            reorder_point: 30_000,
            order_qty: 50_000,
            disruptions: DisruptionModel::default(),
            costs: CostRates::default(),
            horizon_days: 180,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_policy(mut self, initial_inventory: u64, reorder_point: u64, order_qty: u64) -> Self {
        self.initial_inventory = initial_inventory;
        self.reorder_point = reorder_point;
        self.order_qty = order_qty;
        self
    }

    pub fn with_disruptions(mut self, disruptions: DisruptionModel) -> Self {
        self.disruptions = disruptions;
        self
    }

    pub fn with_costs(mut self, costs: CostRates) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Rejects configurations no trial should run under.
    pub fn validate(&self) -> Result<()> {
        let reject = |reason: String| {
            Err(SimError::InvalidConfiguration {
                label: self.label.clone(),
                reason,
            })
        };

        if self.horizon_days == 0 {
            return reject("horizon must be at least one day".into());
        }
        if self.order_qty == 0 {
            return reject("order quantity must be positive".into());
        }

        let rates = [
            ("holding cost", self.costs.holding_per_unit_day),
            ("stockout cost", self.costs.stockout_per_unit),
            ("order cost", self.costs.per_order),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return reject(format!("{name} must be finite and non-negative, got {rate}"));
            }
        }

        // Truncated draws must be at least one day so arrivals land strictly
        // after the day the order was placed.
        let lead_floor = self.lead_time.min_support();
        if !(lead_floor >= 1.0) {
            return reject(format!(
                "lead time support must start at one day or later, got {lead_floor}"
            ));
        }

        if self.disruptions.review_period_days == 0 {
            return reject("disruption review period must be positive".into());
        }
        for source in &self.disruptions.sources {
            if !(0.0..=1.0).contains(&source.probability) {
                return reject(format!(
                    "risk `{}` probability {} outside [0, 1]",
                    source.name, source.probability
                ));
            }
        }

        Ok(())
    }
}

/// Trials per configuration for each study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyTrials {
    pub baseline: usize,
    pub plants: usize,
    pub strategies: usize,
}

impl Default for StudyTrials {
    fn default() -> Self {
        Self {
            baseline: 1000,
            plants: 500,
            strategies: 300,
        }
    }
}

/// Run-wide knobs shared by every study.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub trials: StudyTrials,
    /// Master seed. `None` draws one from OS entropy at startup.
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub histogram_bins: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            trials: StudyTrials::default(),
            seed: None,
            output_dir: PathBuf::from("results"),
            histogram_bins: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stochastic::disruption::RiskSource;

    fn valid() -> Configuration {
        Configuration::new(
            "test",
            Sampler::normal(100.0, 20.0).unwrap(),
            Sampler::triangular(2.0, 4.0, 7.0).unwrap(),
        )
    }

    fn reason(config: &Configuration) -> String {
        match config.validate() {
            Err(SimError::InvalidConfiguration { reason, .. }) => reason,
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn standard_configuration_is_valid() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_zero_horizon() {
        assert!(reason(&valid().with_horizon(0)).contains("horizon"));
    }

    #[test]
    fn rejects_negative_costs() {
        let config = valid().with_costs(CostRates {
            holding_per_unit_day: -0.01,
            ..CostRates::default()
        });
        assert!(reason(&config).contains("holding"));

        let config = valid().with_costs(CostRates {
            per_order: f64::INFINITY,
            ..CostRates::default()
        });
        assert!(reason(&config).contains("order cost"));
    }

    #[test]
    fn rejects_lead_time_below_one_day() {
        let mut config = valid();
        config.lead_time = Sampler::triangular(0.0, 4.0, 7.0).unwrap();
        assert!(reason(&config).contains("lead time"));

        config.lead_time = Sampler::normal(4.0, 1.0).unwrap();
        assert!(reason(&config).contains("lead time"));

        config.lead_time = Sampler::constant(1.0).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let config = valid().with_disruptions(DisruptionModel::weekly(vec![RiskSource::new(
            "labor", 1.5,
        )]));
        assert!(reason(&config).contains("labor"));
    }

    #[test]
    fn rejects_zero_review_period() {
        let config = valid().with_disruptions(DisruptionModel {
            review_period_days: 0,
            sources: Vec::new(),
        });
        assert!(reason(&config).contains("review period"));
    }
}
