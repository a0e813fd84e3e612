//! Accumulating list traversals.
//!
//! Both functions walk their input head-first, threading an explicit
//! accumulator through a fold. Stack usage is constant in the input length.

use crate::models::{Order, Restaurant, Route};

/// Expands a route into one `"Order {id} -> Courier {courier}"` line per
/// order, in route order. An empty route yields an empty vector.
///
/// # Example
/// ```
/// use fp_delivery::models::Route;
/// use fp_delivery::recursion::split_route;
///
/// let route = Route::new("rt1", "c1").with_order("o1").with_order("o2");
/// assert_eq!(
///     split_route(&route),
///     vec!["Order o1 -> Courier c1", "Order o2 -> Courier c1"]
/// );
/// ```
pub fn split_route(route: &Route) -> Vec<String> {
    let courier_id = &route.courier_id;
    route
        .orders
        .iter()
        .fold(Vec::with_capacity(route.orders.len()), |mut acc, order_id| {
            acc.push(format!("Order {order_id} -> Courier {courier_id}"));
            acc
        })
}

/// Orders whose restaurant lies in `zone`, in input order.
///
/// Each order's restaurant is the first entry of `restaurants` with a
/// matching `id`. Orders with no matching restaurant are dropped.
pub fn collect_orders_by_zone(
    orders: &[Order],
    restaurants: &[Restaurant],
    zone: &str,
) -> Vec<Order> {
    orders.iter().fold(Vec::new(), |mut acc, order| {
        let in_zone = restaurants
            .iter()
            .find(|r| r.id == order.rest_id)
            .is_some_and(|r| r.in_zone(zone));
        if in_zone {
            acc.push(order.clone());
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_route_empty() {
        let route = Route::new("rt0", "c1");
        assert!(split_route(&route).is_empty());
    }

    #[test]
    fn test_split_route_lines() {
        let route = Route::new("rt1", "c1")
            .with_order("o1")
            .with_order("o2")
            .with_order("o3")
            .with_metrics(12, 45);

        assert_eq!(
            split_route(&route),
            vec![
                "Order o1 -> Courier c1",
                "Order o2 -> Courier c1",
                "Order o3 -> Courier c1",
            ]
        );
    }

    fn zoned() -> (Vec<Order>, Vec<Restaurant>) {
        let restaurants = vec![
            Restaurant::new("r1", "North Pizza", "north"),
            Restaurant::new("r2", "South Sushi", "south"),
            Restaurant::new("r3", "North Grill", "north"),
        ];
        let orders = vec![
            Order::new("o1", "r1").with_total(1000),
            Order::new("o2", "r2").with_total(1500),
            Order::new("o3", "r3").with_total(800),
        ];
        (orders, restaurants)
    }

    #[test]
    fn test_collect_orders_by_zone() {
        let (orders, restaurants) = zoned();

        let north = collect_orders_by_zone(&orders, &restaurants, "north");
        let ids: Vec<_> = north.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o3"]);

        let south = collect_orders_by_zone(&orders, &restaurants, "south");
        assert_eq!(south.len(), 1);
        assert_eq!(south[0].id, "o2");
    }

    #[test]
    fn test_unknown_restaurant_dropped() {
        let (mut orders, restaurants) = zoned();
        orders.push(Order::new("o4", "ghost"));

        let north = collect_orders_by_zone(&orders, &restaurants, "north");
        assert!(north.iter().all(|o| o.id != "o4"));
        assert!(collect_orders_by_zone(&orders, &restaurants, "east").is_empty());
    }

    #[test]
    fn test_first_matching_restaurant_wins() {
        let restaurants = vec![
            Restaurant::new("r1", "Old", "south"),
            Restaurant::new("r1", "Duplicate", "north"),
        ];
        let orders = vec![Order::new("o1", "r1")];

        assert!(collect_orders_by_zone(&orders, &restaurants, "north").is_empty());
        assert_eq!(collect_orders_by_zone(&orders, &restaurants, "south").len(), 1);
    }

    #[test]
    fn test_split_route_long() {
        let route = Route {
            orders: (0..100_000).map(|i| format!("o{i}")).collect(),
            ..Route::new("rt-long", "c1")
        };

        let lines = split_route(&route);
        assert_eq!(lines.len(), 100_000);
        assert_eq!(lines[0], "Order o0 -> Courier c1");
        assert_eq!(lines[99_999], "Order o99999 -> Courier c1");
    }

    #[test]
    fn test_collect_orders_by_zone_long() {
        let restaurants = vec![
            Restaurant::new("r1", "North Pizza", "north"),
            Restaurant::new("r2", "South Sushi", "south"),
        ];
        let orders: Vec<Order> = (0..100_000)
            .map(|i| Order::new(format!("o{i}"), if i % 2 == 0 { "r1" } else { "r2" }))
            .collect();

        let north = collect_orders_by_zone(&orders, &restaurants, "north");
        assert_eq!(north.len(), 50_000);
        assert_eq!(north[0].id, "o0");
        assert_eq!(north[49_999].id, "o99998");
    }
}
