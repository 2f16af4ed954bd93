// src/simulation/engine.rs

use crate::model::order::Order;
use crate::model::state::TrialState;
use crate::simulation::config::Configuration;
use crate::strategy::traits::{PolicyAction, PolicyState, ReorderPolicy};
use rand::Rng;
use serde::Serialize;
use tracing::trace;

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialResult {
    pub stockout_days: u32,
    pub service_level: f64,
    pub total_cost: f64,
    pub holding_cost: f64,
    pub stockout_cost: f64,
    pub ordering_cost: f64,
    pub total_demand: u64,
    pub fulfilled_demand: u64,
    pub orders_placed: u32,
}

/// One row of a day-by-day trace, written to CSV.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub demand: u64,
    pub shipped: u64,
    pub unmet: u64,
    pub received: u64,
    pub inventory: u64,
    pub in_transit: u64,
    pub disrupted: bool,
    pub order_placed: bool,
    pub order_pending: bool,
    pub cost_to_date: f64,
}

/// A single fixed-horizon run of the inventory model.
pub struct Trial<'a> {
    config: &'a Configuration,
    policy: &'a dyn ReorderPolicy,
    state: TrialState,
    history: Option<Vec<DayRecord>>,
}

impl<'a> Trial<'a> {
    pub fn new(config: &'a Configuration, policy: &'a dyn ReorderPolicy) -> Self {
        Self {
            config,
            policy,
            state: TrialState::new(config.initial_inventory),
            history: None,
        }
    }

    /// Keep a `DayRecord` for every simulated day.
    pub fn recording(mut self) -> Self {
        self.history = Some(Vec::with_capacity(self.config.horizon_days as usize));
        self
    }

    pub fn state(&self) -> &TrialState {
        &self.state
    }

    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TrialResult {
        for day in 0..self.config.horizon_days {
            self.step(day, rng);
        }
        self.result()
    }

    /// Simulates `day`. Today's arrivals are shelved after demand is served,
    /// so they cannot cover same-day demand.
    pub fn step<R: Rng + ?Sized>(&mut self, day: u32, rng: &mut R) {
        let config = self.config;
        let state = &mut self.state;

        let demand = config.demand.draw_units(rng);
        let fulfillment = state.fulfill(demand);
        if fulfillment.is_stockout() {
            state.costs.charge_stockout(&config.costs, fulfillment.unmet);
        }

        let received = state.receive(day);
        let disrupted = config.disruptions.draw(day, rng);

        let mut order_placed = false;
        match self
            .policy
            .evaluate(state.policy_state, state.inventory, disrupted)
        {
            PolicyAction::PlaceOrder { quantity } => {
                let lead_time = config.lead_time.draw_units(rng);
                let order = Order::new(quantity, day, lead_time);
                trace!(day, quantity, arrival_day = order.arrival_day, "order placed");
                state.place_order(order);
                state.costs.charge_order(&config.costs);
                order_placed = true;
            }
            PolicyAction::Clear => state.policy_state = PolicyState::NoOrderPending,
            PolicyAction::Hold => {}
        }

        state.costs.charge_holding(&config.costs, state.inventory);

        if let Some(history) = self.history.as_mut() {
            history.push(DayRecord {
                day,
                demand,
                shipped: fulfillment.shipped,
                unmet: fulfillment.unmet,
                received,
                inventory: state.inventory,
                in_transit: state.pipeline.in_transit(),
                disrupted,
                order_placed,
                order_pending: state.policy_state.is_pending(),
                cost_to_date: state.costs.total(),
            });
        }
    }

    pub fn result(&self) -> TrialResult {
        TrialResult {
            stockout_days: self.state.stockout_days,
            service_level: self.state.service_level(),
            total_cost: self.state.costs.total(),
            holding_cost: self.state.costs.holding,
            stockout_cost: self.state.costs.stockout,
            ordering_cost: self.state.costs.ordering,
            total_demand: self.state.total_demand,
            fulfilled_demand: self.state.fulfilled_demand,
            orders_placed: self.state.orders_placed,
        }
    }

    pub fn into_history(self) -> Vec<DayRecord> {
        self.history.unwrap_or_default()
    }
}

/// Runs one trial of `config` under `policy`.
pub fn run_trial<R: Rng + ?Sized>(
    config: &Configuration,
    policy: &dyn ReorderPolicy,
    rng: &mut R,
) -> TrialResult {
    Trial::new(config, policy).run(rng)
}

/// Runs one trial and returns its day-by-day trace alongside the result.
pub fn trace_trial<R: Rng + ?Sized>(
    config: &Configuration,
    policy: &dyn ReorderPolicy,
    rng: &mut R,
) -> (TrialResult, Vec<DayRecord>) {
    let mut trial = Trial::new(config, policy).recording();
    let result = trial.run(rng);
    (result, trial.into_history())
}
