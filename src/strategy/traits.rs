// src/strategy/traits.rs

use std::fmt::Debug;

/// Whether a replenishment order is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyState {
    #[default]
    NoOrderPending,
    OrderPending,
}

impl PolicyState {
    pub fn is_pending(self) -> bool {
        self == PolicyState::OrderPending
    }
}

/// What the policy wants done at the end of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    /// Keep the current state.
    Hold,
    /// Place an order of `quantity` units and move to `OrderPending`.
    PlaceOrder { quantity: u64 },
    /// The outstanding order has landed; move to `NoOrderPending`.
    Clear,
}

/// Decision logic for when to replenish.
///
/// The policy itself is immutable; the trial owns the `PolicyState` and
/// applies the returned action.
pub trait ReorderPolicy: Debug + Send + Sync {
    /// # Arguments
    /// * `state` - Current pending/not-pending state.
    /// * `inventory` - End-of-day on-hand stock, after arrivals.
    /// * `disrupted` - Whether today's supply is disrupted.
    fn evaluate(&self, state: PolicyState, inventory: u64, disrupted: bool) -> PolicyAction;
}
