// src/simulation/sweep.rs

use crate::error::Result;
use crate::simulation::config::Configuration;
use crate::simulation::engine::TrialResult;
use crate::simulation::monte_carlo::{run_trials, summarize, SummaryRecord};
use tracing::{debug, info};

/// Mixes a base seed with a position so sibling runs get unrelated streams.
/// Nested derivations stay distinct because the finalizer is non-linear.
pub fn derive_seed(seed: u64, index: u64) -> u64 {
    let offset = index.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    mix64(seed.wrapping_add(offset))
}

fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// An ordered set of named configurations evaluated with the same trial count.
#[derive(Debug, Clone)]
pub struct ConfigurationSweep {
    pub name: String,
    pub trials: usize,
    configurations: Vec<Configuration>,
}

impl ConfigurationSweep {
    pub fn new(name: impl Into<String>, trials: usize) -> Self {
        Self {
            name: name.into(),
            trials,
            configurations: Vec::new(),
        }
    }

    pub fn with(mut self, config: Configuration) -> Self {
        self.configurations.push(config);
        self
    }

    pub fn push(&mut self, config: Configuration) {
        self.configurations.push(config);
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Summaries in input order.
    pub fn run(&self, seed: u64) -> Result<Vec<SummaryRecord>> {
        Ok(self
            .run_with_results(seed)?
            .into_iter()
            .map(|(summary, _)| summary)
            .collect())
    }

    /// Like `run`, but also hands back every trial result.
    ///
    /// All configurations are validated first, so one bad entry aborts the
    /// sweep before any trial runs.
    pub fn run_with_results(&self, seed: u64) -> Result<Vec<(SummaryRecord, Vec<TrialResult>)>> {
        for config in &self.configurations {
            config.validate()?;
        }

        info!(
            sweep = %self.name,
            configurations = self.configurations.len(),
            trials = self.trials,
            "starting sweep"
        );

        let mut outcomes = Vec::with_capacity(self.configurations.len());
        for (index, config) in self.configurations.iter().enumerate() {
            let config_seed = derive_seed(seed, index as u64);
            debug!(
                label = %config.label,
                demand = %config.demand,
                lead_time = %config.lead_time,
                review_day_disruption = config.disruptions.review_day_probability(),
                seed = config_seed,
                "running configuration"
            );
            let results = run_trials(config, self.trials, config_seed)?;
            let summary = summarize(config, &results);
            info!(
                sweep = %self.name,
                label = %summary.label,
                mean_service_level = %format!("{:.4}", summary.mean_service_level),
                mean_stockout_days = %format!("{:.2}", summary.mean_stockout_days),
                mean_total_cost = %format!("{:.2}", summary.mean_total_cost),
                "configuration complete"
            );
            outcomes.push((summary, results));
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::stochastic::sampler::Sampler;

    fn config(label: &str, initial: u64) -> Configuration {
        Configuration::new(
            label,
            Sampler::normal(1_000.0, 200.0).unwrap(),
            Sampler::triangular(2.0, 4.0, 7.0).unwrap(),
        )
        .with_policy(initial, 3_000, 5_000)
        .with_horizon(60)
    }

    #[test]
    fn preserves_input_order() {
        let sweep = ConfigurationSweep::new("order", 20)
            .with(config("c", 5_000))
            .with(config("a", 9_000))
            .with(config("b", 1_000));
        let labels: Vec<_> = sweep.run(1).unwrap().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn invalid_entry_aborts_the_sweep() {
        let sweep = ConfigurationSweep::new("broken", 10)
            .with(config("ok", 5_000))
            .with(config("bad", 5_000).with_horizon(0));
        match sweep.run(1) {
            Err(SimError::InvalidConfiguration { label, .. }) => assert_eq!(label, "bad"),
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn reruns_are_reproducible() {
        let sweep = ConfigurationSweep::new("repeat", 15)
            .with(config("x", 5_000))
            .with(config("y", 8_000));
        let first = sweep.run_with_results(42).unwrap();
        let second = sweep.run_with_results(42).unwrap();
        for ((_, a), (_, b)) in first.iter().zip(&second) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn derived_seeds_differ_by_position() {
        assert_ne!(derive_seed(7, 0), derive_seed(7, 1));
        assert_ne!(derive_seed(0, 0), 0);
    }

    #[test]
    fn study_and_configuration_seeds_never_collide() {
        // Three studies of 1, 5 and 4 configurations, as run by the binary.
        for master in [0, 1, 12_345, u64::MAX] {
            let mut seeds = vec![master];
            for (study, count) in [(0u64, 1u64), (1, 5), (2, 4)] {
                let study_seed = derive_seed(master, study);
                seeds.extend((0..count).map(|config| derive_seed(study_seed, config)));
            }
            let mut unique = seeds.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), seeds.len(), "collision under master seed {master}");
        }
    }
}
