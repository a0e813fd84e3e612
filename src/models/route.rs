//! Route model.

use serde::{Deserialize, Serialize};

/// An ordered sequence of orders assigned to one courier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Courier driving the route.
    pub courier_id: String,
    /// Order IDs in visiting order.
    pub orders: Vec<String>,
    /// Declared distance (km).
    pub distance: u32,
    /// Declared duration (minutes).
    pub duration: u32,
}

impl Route {
    /// Creates an empty route for a courier.
    pub fn new(id: impl Into<String>, courier_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            courier_id: courier_id.into(),
            orders: Vec::new(),
            distance: 0,
            duration: 0,
        }
    }

    /// Appends an order ID.
    pub fn with_order(mut self, order_id: impl Into<String>) -> Self {
        self.orders.push(order_id.into());
        self
    }

    /// Sets distance and duration.
    pub fn with_metrics(mut self, distance: u32, duration: u32) -> Self {
        self.distance = distance;
        self.duration = duration;
        self
    }

    /// Number of orders on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the route has no orders.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
