//! Immutable delivery service aggregate.
//!
//! Wraps the current orders and slots. Mutating operations return a new
//! service and leave the receiver unchanged.
//!
//! ```
//! use fp_delivery::models::{Order, OrderStatus};
//! use fp_delivery::service::DeliveryService;
//!
//! let empty = DeliveryService::default();
//! let service = empty.place_order(Order::new("o1", "r1").with_total(1200));
//!
//! assert_eq!(empty.revenue(), 0);
//! assert_eq!(service.revenue(), 1200);
//! assert_eq!(service.orders_by_status(OrderStatus::Placed).len(), 1);
//! ```

use crate::filters::by_status;
use crate::models::{Order, OrderStatus, Slot};
use crate::seed::Seed;
use crate::transforms::{add_order, assign_slot, filter_orders, total_revenue};

/// Orders and courier slots known to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryService {
    orders: Vec<Order>,
    slots: Vec<Slot>,
}

impl DeliveryService {
    /// Creates a service over existing orders and slots.
    pub fn new(orders: Vec<Order>, slots: Vec<Slot>) -> Self {
        Self { orders, slots }
    }

    /// Creates a service from a seed's orders and slots.
    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.orders.clone(), seed.slots.clone())
    }

    /// Current orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Current slots.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns a service with `order` appended.
    #[must_use]
    pub fn place_order(&self, order: Order) -> Self {
        Self {
            orders: add_order(&self.orders, order),
            slots: self.slots.clone(),
        }
    }

    /// Returns a service with `slot` appended.
    #[must_use]
    pub fn assign_courier_slot(&self, slot: Slot) -> Self {
        Self {
            orders: self.orders.clone(),
            slots: assign_slot(&self.slots, slot),
        }
    }

    /// Sum of order totals.
    pub fn revenue(&self) -> u128 {
        total_revenue(&self.orders)
    }

    /// Orders with the given status, in placement order.
    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<Order> {
        filter_orders(&self.orders, by_status(status))
    }
}
