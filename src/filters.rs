//! Predicate factories for filtering records.
//!
//! Each factory captures its parameters and returns a pure closure,
//! ready to hand to [`crate::transforms::filter_orders`] or
//! `Iterator::filter`.

use crate::models::{MenuItem, Order, OrderStatus, Restaurant};

/// Orders placed with the given restaurant.
pub fn by_restaurant(rest_id: impl Into<String>) -> impl Fn(&Order) -> bool {
    let rest_id = rest_id.into();
    move |order| order.rest_id == rest_id
}

/// Orders with the given status.
pub fn by_status(status: OrderStatus) -> impl Fn(&Order) -> bool {
    move |order| order.status == status
}

/// Orders whose timestamp lies in `[start, end]` (lexical comparison).
pub fn by_time_range(start: impl Into<String>, end: impl Into<String>) -> impl Fn(&Order) -> bool {
    let start = start.into();
    let end = end.into();
    move |order| start.as_str() <= order.ts.as_str() && order.ts.as_str() <= end.as_str()
}

/// Orders whose total lies in `[min, max]`.
pub fn by_total_range(min: u64, max: u64) -> impl Fn(&Order) -> bool {
    move |order| (min..=max).contains(&order.total)
}

/// Restaurants in the given zone.
pub fn by_zone(zone: impl Into<String>) -> impl Fn(&Restaurant) -> bool {
    let zone = zone.into();
    move |restaurant| restaurant.zone == zone
}

/// Menu items whose price lies in `[min, max]`.
pub fn by_price_range(min: u32, max: u32) -> impl Fn(&MenuItem) -> bool {
    move |item| (min..=max).contains(&item.price)
}
