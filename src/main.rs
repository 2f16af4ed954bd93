use inventory_risk_sim::error::Result;
use inventory_risk_sim::io::reporting;
use inventory_risk_sim::scenarios;
use inventory_risk_sim::simulation::config::RunSettings;
use inventory_risk_sim::simulation::engine::trace_trial;
use inventory_risk_sim::simulation::monte_carlo::trial_rng;
use inventory_risk_sim::simulation::sweep::{derive_seed, ConfigurationSweep};
use inventory_risk_sim::strategy::reorder_point::ReorderPointPolicy;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Inventory Replenishment Risk Simulation ===");

    if let Err(e) = run(&RunSettings::default()) {
        error!(error = %e, "simulation aborted");
        std::process::exit(1);
    }

    println!("\nSimulation Complete.");
}

fn run(settings: &RunSettings) -> Result<()> {
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, "master seed");
    let out = &settings.output_dir;

    // 1. BASELINE
    let baseline = scenarios::baseline(settings.trials.baseline)?;
    let baseline_seed = derive_seed(seed, 0);
    let mut outcomes = baseline.run_with_results(baseline_seed)?;
    if let Some((summary, trials)) = outcomes.pop() {
        reporting::print_summary_table("Baseline", std::slice::from_ref(&summary));
        reporting::print_headline(&summary);
        reporting::print_cost_breakdown(std::slice::from_ref(&summary));

        reporting::write_csv(&out.join("baseline_trials.csv"), &trials)?;
        let service: Vec<f64> = trials.iter().map(|t| t.service_level).collect();
        reporting::write_csv(
            &out.join("service_level_histogram.csv"),
            &reporting::histogram(&service, settings.histogram_bins),
        )?;
    }
    export_trace(&baseline, baseline_seed, out)?;

    // 2. PER-PLANT
    let plants = scenarios::by_plant(settings.trials.plants)?;
    let plant_summaries = plants.run(derive_seed(seed, 1))?;
    reporting::print_summary_table("Performance by Plant", &plant_summaries);
    reporting::print_cost_breakdown(&plant_summaries);
    reporting::write_csv(&out.join("plant_summary.csv"), &plant_summaries)?;

    // 3. STRATEGIES
    let strategies = scenarios::strategies(settings.trials.strategies)?;
    let strategy_summaries = strategies.run(derive_seed(seed, 2))?;
    reporting::print_summary_table("Strategy Comparison", &strategy_summaries);
    reporting::print_cost_breakdown(&strategy_summaries);
    reporting::write_csv(&out.join("strategy_summary.csv"), &strategy_summaries)?;

    Ok(())
}

/// Day-by-day log of the first baseline trial, replayed from its stream.
fn export_trace(sweep: &ConfigurationSweep, sweep_seed: u64, out: &std::path::Path) -> Result<()> {
    let Some(config) = sweep.configurations().first() else {
        return Ok(());
    };
    let policy = ReorderPointPolicy::from(config);
    let mut rng = trial_rng(derive_seed(sweep_seed, 0), 0);
    let (result, history) = trace_trial(config, &policy, &mut rng);
    info!(
        stockout_days = result.stockout_days,
        service_level = result.service_level,
        "traced first baseline trial"
    );
    reporting::write_csv(&out.join("baseline_trace.csv"), &history)
}
