// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::monte_carlo::SummaryRecord;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes any serializable records to a CSV file, creating parent
/// directories as needed.
///
/// # Arguments
/// * `file_path` - Where to write, e.g. "results/baseline_trials.csv".
/// * `records` - Rows to write, one per record.
pub fn write_csv<T: Serialize>(file_path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(file_path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(rows = records.len(), path = %file_path.display(), "exported csv");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over the data range. The last bin is closed on
/// both ends, so the maximum is counted.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + width * i as f64,
            upper: lo + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// Prints a study's comparison table to stdout.
pub fn print_summary_table(title: &str, records: &[SummaryRecord]) {
    println!("\n=== {} ===", title);
    println!(
        "{:<36} {:>8} {:>17} {:>10} {:>14}",
        "Configuration", "Service", "95% interval", "Stockouts", "Total cost"
    );
    for r in records {
        println!(
            "{:<36} {:>8.4} {:>17} {:>10.2} {:>14.2}",
            r.label,
            r.mean_service_level,
            format!("({:.2}, {:.2})", r.service_level_p2_5, r.service_level_p97_5),
            r.mean_stockout_days,
            r.mean_total_cost
        );
    }
}

/// Mean cost per trial split by component, in the study's configuration order.
pub fn print_cost_breakdown(records: &[SummaryRecord]) {
    println!("\n--- Cost Analysis (mean per trial) ---");
    for r in records {
        println!(
            "{}: holding ${:.2}, stockout ${:.2}, ordering ${:.2}, total ${:.2}",
            r.label, r.mean_holding_cost, r.mean_stockout_cost, r.mean_ordering_cost, r.mean_total_cost
        );
    }
}

/// The one-configuration summary used for the baseline study.
pub fn print_headline(record: &SummaryRecord) {
    println!("Avg Service Level: {:.2}", record.mean_service_level);
    println!(
        "95% CI: ({:.2}, {:.2})",
        record.service_level_p2_5, record.service_level_p97_5
    );
    println!("Avg Stockout Days: {:.2}", record.mean_stockout_days);
}
