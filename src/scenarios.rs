// src/scenarios.rs

//! Parameter tables for the three studies: a single baseline, one
//! configuration per bottling plant, and a set of strategic alternatives.

use crate::error::Result;
use crate::simulation::config::Configuration;
use crate::simulation::sweep::ConfigurationSweep;
use crate::stochastic::disruption::{DisruptionModel, RiskSource};
use crate::stochastic::sampler::Sampler;

const DEMAND_STD_DEV: f64 = 2_000.0;

fn standard_lead_time() -> Result<Sampler> {
    Sampler::triangular(2.0, 4.0, 7.0)
}

fn supply_risks(transport: f64, labor: f64, raw_material: f64) -> DisruptionModel {
    DisruptionModel::weekly(vec![
        RiskSource::new("transport delay", transport),
        RiskSource::new("labor shortage", labor),
        RiskSource::new("raw material delay", raw_material),
    ])
}

pub fn baseline(trials: usize) -> Result<ConfigurationSweep> {
    let config = Configuration::new(
        "Baseline",
        Sampler::normal(10_000.0, DEMAND_STD_DEV)?,
        standard_lead_time()?,
    )
    .with_description("National network, single transport risk")
    .with_disruptions(DisruptionModel::weekly(vec![RiskSource::new("transport delay", 0.1)]));

    Ok(ConfigurationSweep::new("baseline", trials).with(config))
}

struct Plant {
    name: &'static str,
    region: &'static str,
    base_demand: f64,
}

const PLANTS: &[Plant] = &[
    Plant { name: "Charlotte, NC", region: "Southeast", base_demand: 9_500.0 },
    Plant { name: "Birmingham, AL", region: "South", base_demand: 8_700.0 },
    Plant { name: "Los Angeles, CA", region: "West", base_demand: 11_000.0 },
    Plant { name: "Chicago, IL", region: "Midwest", base_demand: 10_200.0 },
    Plant { name: "Bedford, NH", region: "Northeast", base_demand: 8_000.0 },
];

pub fn by_plant(trials: usize) -> Result<ConfigurationSweep> {
    let mut sweep = ConfigurationSweep::new("by-plant", trials);
    for plant in PLANTS {
        let config = Configuration::new(
            plant.name,
            Sampler::normal(plant.base_demand, DEMAND_STD_DEV)?,
            standard_lead_time()?,
        )
        .with_description(format!("{} region plant", plant.region))
        .with_group(plant.region)
        .with_disruptions(supply_risks(0.1, 0.05, 0.07));
        sweep.push(config);
    }
    Ok(sweep)
}

pub fn strategies(trials: usize) -> Result<ConfigurationSweep> {
    let demand = Sampler::normal(10_000.0, DEMAND_STD_DEV)?;
    let standard = |label: &str| -> Result<Configuration> {
        Ok(Configuration::new(label, demand.clone(), standard_lead_time()?)
            .with_disruptions(supply_risks(0.1, 0.05, 0.07)))
    };

    Ok(ConfigurationSweep::new("strategies", trials)
        .with(standard("Base Case")?.with_description("Standard configuration"))
        .with(
            standard("Higher Inventory Buffer")?
                .with_policy(70_000, 50_000, 50_000)
                .with_description("Increased initial inventory and reorder point"),
        )
        .with(Configuration {
            lead_time: Sampler::triangular(3.0, 4.0, 5.0)?,
            ..standard("Reduced Lead Time Variability")?
                .with_description("Tighter lead time distribution")
        })
        .with(
            standard("Diversified Sourcing (Lower Risk)")?
                .with_disruptions(supply_risks(0.05, 0.03, 0.04))
                .with_description("Reduced disruption probabilities"),
        ))
}
