//! Order model.
//!
//! An order is a purchase from one restaurant: an ordered list of
//! `(menu_item_id, quantity)` lines, a total in minor currency units,
//! a timestamp and a lifecycle status.
//!
//! # Timestamps
//! `ts` is kept as a `YYYY-MM-DD HH:MM:SS` string. The format sorts
//! lexically in chronological order, so range queries compare strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single order line: `(menu_item_id, quantity)`.
pub type OrderLine = (String, u32);

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// Restaurant the order was placed with.
    pub rest_id: String,
    /// Line items in the order they were added. May be empty.
    pub items: Vec<OrderLine>,
    /// Order total in minor currency units.
    pub total: u64,
    /// Placement timestamp (`YYYY-MM-DD HH:MM:SS`).
    pub ts: String,
    /// Lifecycle status.
    pub status: OrderStatus,
}

/// Order lifecycle status.
///
/// No transitions are enforced; the status is whatever the data says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted by the restaurant, no courier yet.
    Placed,
    /// A courier has been assigned.
    Assigned,
    /// Handed to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

/// Error returned when parsing an unrecognized status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status '{0}'")]
pub struct UnknownStatus(pub String);

impl Order {
    /// Creates a placed order with no items and a zero total.
    pub fn new(id: impl Into<String>, rest_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rest_id: rest_id.into(),
            items: Vec::new(),
            total: 0,
            ts: String::new(),
            status: OrderStatus::Placed,
        }
    }

    /// Appends a line item.
    pub fn with_item(mut self, menu_item_id: impl Into<String>, quantity: u32) -> Self {
        self.items.push((menu_item_id.into(), quantity));
        self
    }

    /// Sets the total (minor units).
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Sets the placement timestamp.
    pub fn with_ts(mut self, ts: impl Into<String>) -> Self {
        self.ts = ts.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|(_, qty)| u64::from(*qty)).sum()
    }
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Assigned,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Assigned => "assigned",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
