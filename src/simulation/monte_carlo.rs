// src/simulation/monte_carlo.rs

use crate::error::{Result, SimError};
use crate::simulation::config::Configuration;
use crate::simulation::engine::{run_trial, TrialResult};
use crate::strategy::reorder_point::ReorderPointPolicy;
use crate::strategy::traits::ReorderPolicy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Summary statistics over all trials of one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    pub label: String,
    pub description: String,
    pub group: Option<String>,
    pub trials: usize,
    pub mean_service_level: f64,
    pub service_level_std_dev: f64,
    pub service_level_p2_5: f64,
    pub service_level_p97_5: f64,
    pub mean_stockout_days: f64,
    pub mean_total_cost: f64,
    pub mean_holding_cost: f64,
    pub mean_stockout_cost: f64,
    pub mean_ordering_cost: f64,
    pub total_cost_p2_5: f64,
    pub total_cost_p97_5: f64,
    pub mean_orders_placed: f64,
}

/// Random stream for trial `index`: one ChaCha key per configuration, one
/// stream per trial, so a trial's draws never depend on scheduling.
pub fn trial_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Runs `trials` independent trials of `config` under its reorder-point
/// policy, in parallel. Results come back in trial order.
pub fn run_trials(config: &Configuration, trials: usize, seed: u64) -> Result<Vec<TrialResult>> {
    let policy = ReorderPointPolicy::from(config);
    run_trials_with_policy(config, &policy, trials, seed)
}

pub fn run_trials_with_policy(
    config: &Configuration,
    policy: &dyn ReorderPolicy,
    trials: usize,
    seed: u64,
) -> Result<Vec<TrialResult>> {
    config.validate()?;
    if trials == 0 {
        return Err(SimError::NoTrials {
            label: config.label.clone(),
        });
    }

    Ok((0..trials)
        .into_par_iter()
        .map(|index| {
            let mut rng = trial_rng(seed, index);
            run_trial(config, policy, &mut rng)
        })
        .collect())
}

/// Runs and reduces in one go.
pub fn aggregate(config: &Configuration, trials: usize, seed: u64) -> Result<SummaryRecord> {
    let results = run_trials(config, trials, seed)?;
    Ok(summarize(config, &results))
}

/// Reduces trial results to a `SummaryRecord`. `results` must be non-empty.
pub fn summarize(config: &Configuration, results: &[TrialResult]) -> SummaryRecord {
    let mut service: Vec<f64> = results.iter().map(|r| r.service_level).collect();
    let mut costs: Vec<f64> = results.iter().map(|r| r.total_cost).collect();
    service.sort_by(f64::total_cmp);
    costs.sort_by(f64::total_cmp);

    let mean_service_level = mean(&service);
    let record = SummaryRecord {
        label: config.label.clone(),
        description: config.description.clone(),
        group: config.group.clone(),
        trials: results.len(),
        mean_service_level,
        service_level_std_dev: std_dev(&service, mean_service_level),
        service_level_p2_5: percentile(&service, 2.5),
        service_level_p97_5: percentile(&service, 97.5),
        mean_stockout_days: mean_by(results, |r| r.stockout_days as f64),
        mean_total_cost: mean(&costs),
        mean_holding_cost: mean_by(results, |r| r.holding_cost),
        mean_stockout_cost: mean_by(results, |r| r.stockout_cost),
        mean_ordering_cost: mean_by(results, |r| r.ordering_cost),
        total_cost_p2_5: percentile(&costs, 2.5),
        total_cost_p97_5: percentile(&costs, 97.5),
        mean_orders_placed: mean_by(results, |r| r.orders_placed as f64),
    };

    debug!(
        label = %record.label,
        trials = record.trials,
        mean_service_level = record.mean_service_level,
        mean_total_cost = record.mean_total_cost,
        "configuration summarized"
    );
    record
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn mean_by(results: &[TrialResult], f: impl Fn(&TrialResult) -> f64) -> f64 {
    results.iter().map(f).sum::<f64>() / results.len() as f64
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Percentile of ascending `sorted` data using linear interpolation between
/// closest ranks, inclusive of both ends (`p` in 0..=100).
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let weight = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}
