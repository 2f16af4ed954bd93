// src/model/order.rs

/// A replenishment order in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub quantity: u64,
    pub placed_on: u32,
    pub arrival_day: u32,
}

impl Order {
    pub fn new(quantity: u64, placed_on: u32, lead_time_days: u64) -> Self {
        let lead = u32::try_from(lead_time_days).unwrap_or(u32::MAX);
        Self {
            quantity,
            placed_on,
            arrival_day: placed_on.saturating_add(lead),
        }
    }
}

/// Orders placed but not yet received, each tagged with its arrival day.
#[derive(Debug, Clone, Default)]
pub struct OrderPipeline {
    orders: Vec<Order>,
}

impl OrderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Total quantity of orders arriving exactly on `day`, removing them.
    pub fn receive_arrivals(&mut self, day: u32) -> u64 {
        let mut received = 0;
        self.orders.retain(|order| {
            if order.arrival_day == day {
                received += order.quantity;
                false
            } else {
                true
            }
        });
        received
    }

    /// Drops anything due on or before `day`, so stale entries never linger.
    pub fn prune(&mut self, day: u32) {
        self.orders.retain(|order| order.arrival_day > day);
    }

    /// Arrival processing followed by pruning. Returns the quantity received.
    pub fn advance(&mut self, day: u32) -> u64 {
        let received = self.receive_arrivals(day);
        self.prune(day);
        received
    }

    pub fn in_transit(&self) -> u64 {
        self.orders.iter().map(|o| o.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_is_placement_plus_lead_time() {
        let order = Order::new(500, 10, 4);
        assert_eq!(order.arrival_day, 14);
    }

    #[test]
    fn receives_only_orders_due_today() {
        let mut pipeline = OrderPipeline::new();
        pipeline.place(Order::new(100, 0, 3));
        pipeline.place(Order::new(40, 1, 4));
        pipeline.place(Order::new(7, 2, 1));

        assert_eq!(pipeline.advance(2), 0);
        assert_eq!(pipeline.len(), 3);

        assert_eq!(pipeline.advance(3), 100 + 7);
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.in_transit(), 40);

        assert_eq!(pipeline.advance(5), 40);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn advance_is_idempotent_for_a_day() {
        let mut pipeline = OrderPipeline::new();
        pipeline.place(Order::new(100, 0, 2));
        assert_eq!(pipeline.advance(2), 100);
        assert_eq!(pipeline.advance(2), 0);
    }

    #[test]
    fn prune_drops_overdue_orders() {
        let mut pipeline = OrderPipeline::new();
        pipeline.place(Order::new(5, 0, 1));
        pipeline.place(Order::new(9, 0, 6));
        pipeline.prune(3);
        assert_eq!(pipeline.iter().map(|o| o.arrival_day).collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn huge_lead_time_saturates() {
        let order = Order::new(1, 10, u64::MAX);
        assert_eq!(order.arrival_day, u32::MAX);
    }
}
