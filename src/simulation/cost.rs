// src/simulation/cost.rs

use crate::simulation::config::CostRates;

/// Running cost totals for one trial. No discounting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostLedger {
    pub holding: f64,
    pub stockout: f64,
    pub ordering: f64,
}

impl CostLedger {
    pub fn charge_stockout(&mut self, rates: &CostRates, unmet_units: u64) {
        self.stockout += unmet_units as f64 * rates.stockout_per_unit;
    }

    pub fn charge_order(&mut self, rates: &CostRates) {
        self.ordering += rates.per_order;
    }

    /// Charged every day on end-of-day inventory.
    pub fn charge_holding(&mut self, rates: &CostRates, inventory: u64) {
        self.holding += inventory as f64 * rates.holding_per_unit_day;
    }

    pub fn total(&self) -> f64 {
        self.holding + self.stockout + self.ordering
    }
}
