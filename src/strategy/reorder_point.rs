// src/strategy/reorder_point.rs

use crate::simulation::config::Configuration;
use crate::strategy::traits::{PolicyAction, PolicyState, ReorderPolicy};

/// Continuous-review (s, Q) policy with a single outstanding order.
///
/// Orders `order_qty` when inventory is at or below `reorder_point` and
/// nothing is on order, unless the day is disrupted. The pending flag clears
/// once inventory is back above the reorder point. If an arrival does not
/// lift inventory above the threshold the flag stays set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderPointPolicy {
    pub reorder_point: u64,
    pub order_qty: u64,
}

impl ReorderPointPolicy {
    pub fn new(reorder_point: u64, order_qty: u64) -> Self {
        Self {
            reorder_point,
            order_qty,
        }
    }
}

impl From<&Configuration> for ReorderPointPolicy {
    fn from(config: &Configuration) -> Self {
        Self::new(config.reorder_point, config.order_qty)
    }
}

impl ReorderPolicy for ReorderPointPolicy {
    fn evaluate(&self, state: PolicyState, inventory: u64, disrupted: bool) -> PolicyAction {
        let below = inventory <= self.reorder_point;
        match state {
            PolicyState::NoOrderPending if below && !disrupted => PolicyAction::PlaceOrder {
                quantity: self.order_qty,
            },
            PolicyState::OrderPending if !below => PolicyAction::Clear,
            _ => PolicyAction::Hold,
        }
    }
}
