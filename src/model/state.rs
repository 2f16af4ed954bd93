// src/model/state.rs

use crate::model::order::{Order, OrderPipeline};
use crate::simulation::cost::CostLedger;
use crate::strategy::traits::PolicyState;

/// Outcome of serving one day's demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fulfillment {
    pub shipped: u64,
    pub unmet: u64,
}

impl Fulfillment {
    pub fn is_stockout(&self) -> bool {
        self.unmet > 0
    }
}

/// Mutable state of a single trial. Created fresh per trial.
#[derive(Debug, Clone)]
pub struct TrialState {
    pub inventory: u64,
    pub policy_state: PolicyState,
    pub pipeline: OrderPipeline,

    pub total_demand: u64,
    pub fulfilled_demand: u64,
    pub stockout_days: u32,
    pub orders_placed: u32,
    pub costs: CostLedger,
}

impl TrialState {
    pub fn new(initial_inventory: u64) -> Self {
        Self {
            inventory: initial_inventory,
            policy_state: PolicyState::NoOrderPending,
            pipeline: OrderPipeline::new(),
            total_demand: 0,
            fulfilled_demand: 0,
            stockout_days: 0,
            orders_placed: 0,
            costs: CostLedger::default(),
        }
    }

    /// Serves demand from on-hand stock only.
    ///
    /// Ships everything if possible; otherwise ships what is left, empties
    /// the shelf and counts a stockout day.
    pub fn fulfill(&mut self, demand: u64) -> Fulfillment {
        self.total_demand += demand;

        let result = if self.inventory >= demand {
            self.inventory -= demand;
            Fulfillment {
                shipped: demand,
                unmet: 0,
            }
        } else {
            let shipped = self.inventory;
            self.inventory = 0;
            self.stockout_days += 1;
            Fulfillment {
                shipped,
                unmet: demand - shipped,
            }
        };

        self.fulfilled_demand += result.shipped;
        result
    }

    /// Arrivals due today go on the shelf; returns the quantity received.
    pub fn receive(&mut self, day: u32) -> u64 {
        let received = self.pipeline.advance(day);
        self.inventory += received;
        received
    }

    pub fn place_order(&mut self, order: Order) {
        self.pipeline.place(order);
        self.policy_state = PolicyState::OrderPending;
        self.orders_placed += 1;
    }

    /// Fraction of demand served. Defined as 1.0 when nothing was demanded.
    pub fn service_level(&self) -> f64 {
        if self.total_demand == 0 {
            1.0
        } else {
            self.fulfilled_demand as f64 / self.total_demand as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_fulfillment_decrements_inventory() {
        let mut state = TrialState::new(100);
        let f = state.fulfill(60);
        assert_eq!(f, Fulfillment { shipped: 60, unmet: 0 });
        assert_eq!(state.inventory, 40);
        assert_eq!(state.stockout_days, 0);
    }

    #[test]
    fn exact_depletion_is_not_a_stockout() {
        let mut state = TrialState::new(50);
        assert!(!state.fulfill(50).is_stockout());
        assert_eq!(state.inventory, 0);
    }

    #[test]
    fn shortfall_empties_shelf_and_counts_stockout() {
        let mut state = TrialState::new(30);
        let f = state.fulfill(45);
        assert_eq!(f, Fulfillment { shipped: 30, unmet: 15 });
        assert_eq!(state.inventory, 0);
        assert_eq!(state.stockout_days, 1);
        assert_eq!(state.total_demand, 45);
        assert_eq!(state.fulfilled_demand, 30);
    }

    #[test]
    fn service_level_without_demand_is_one() {
        assert_eq!(TrialState::new(0).service_level(), 1.0);
    }

    #[test]
    fn receive_adds_only_due_orders() {
        let mut state = TrialState::new(10);
        state.place_order(Order::new(25, 0, 2));
        assert!(state.policy_state.is_pending());
        assert_eq!(state.receive(1), 0);
        assert_eq!(state.receive(2), 25);
        assert_eq!(state.inventory, 35);
    }
}
