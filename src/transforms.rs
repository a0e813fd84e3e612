//! Pure transforms over immutable record sequences.
//!
//! Every function borrows its input and returns a new collection, so a
//! caller's existing sequence is never affected by an "update".
//!
//! # Usage
//!
//! ```
//! use fp_delivery::models::Order;
//! use fp_delivery::transforms::{add_order, total_revenue};
//!
//! let orders = vec![Order::new("o1", "r1").with_total(1000)];
//! let more = add_order(&orders, Order::new("o2", "r1").with_total(500));
//!
//! assert_eq!(orders.len(), 1);
//! assert_eq!(total_revenue(&more), 1500);
//! ```

use crate::models::{Order, Slot};

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Returns a new sequence with `new_order` appended.
pub fn add_order(orders: &[Order], new_order: Order) -> Vec<Order> {
    appended(orders, new_order)
}

/// Returns a new sequence with `new_slot` appended.
pub fn assign_slot(slots: &[Slot], new_slot: Slot) -> Vec<Slot> {
    appended(slots, new_slot)
}

/// Sum of order totals (minor units). Empty input yields 0.
///
/// Accumulates in `u128`, so the sum is exact for any slice of `u64` totals.
pub fn total_revenue(orders: &[Order]) -> u128 {
    orders
        .iter()
        .fold(0, |acc, order| acc + u128::from(order.total))
}

/// Orders matching `predicate`, in their original relative order.
pub fn filter_orders<P>(orders: &[Order], predicate: P) -> Vec<Order>
where
    P: Fn(&Order) -> bool,
{
    orders.iter().filter(|&o| predicate(o)).cloned().collect()
}

/// Applies `mapper` to each order, preserving length and order.
pub fn map_orders<U, F>(orders: &[Order], mapper: F) -> Vec<U>
where
    F: Fn(&Order) -> U,
{
    orders.iter().map(mapper).collect()
}
