//! Delivery performance indicators.
//!
//! Summarizes a dataset the way an operations dashboard would.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Revenue | Sum of order totals (minor units) |
//! | Orders by status | Count per [`OrderStatus`] |
//! | Average order value | Revenue / order count (0 when empty) |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Courier, Order, OrderStatus, Restaurant};
use crate::transforms::total_revenue;

/// Dataset summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryKpi {
    /// Number of restaurants.
    pub restaurants: usize,
    /// Number of orders.
    pub orders: usize,
    /// Number of couriers.
    pub couriers: usize,
    /// Total revenue (minor units).
    pub revenue: u128,
    /// Order count per status. Every status is present, possibly with 0.
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
    /// Mean order total (minor units).
    pub average_order_value: f64,
}

impl DeliveryKpi {
    /// Computes the summary.
    pub fn calculate(restaurants: &[Restaurant], orders: &[Order], couriers: &[Courier]) -> Self {
        let revenue = total_revenue(orders);

        let mut orders_by_status: BTreeMap<OrderStatus, usize> =
            OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for order in orders {
            *orders_by_status.entry(order.status).or_default() += 1;
        }

        let average_order_value = if orders.is_empty() {
            0.0
        } else {
            revenue as f64 / orders.len() as f64
        };

        Self {
            restaurants: restaurants.len(),
            orders: orders.len(),
            couriers: couriers.len(),
            revenue,
            orders_by_status,
            average_order_value,
        }
    }

    /// Number of orders with the given status.
    pub fn count(&self, status: OrderStatus) -> usize {
        self.orders_by_status.get(&status).copied().unwrap_or(0)
    }
}
