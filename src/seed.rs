//! Seed data loading.
//!
//! Turns an untyped JSON document into the five domain collections:
//!
//! ```text
//! restaurants: [{id, name, zone}]
//! menu_items:  [{id, rest_id, name, price, prep_time}]
//! orders:      [{id, rest_id, items: [[menu_item_id, qty], ...], total, ts, status}]
//! couriers:    [{id, name, vehicle, zone}]
//! slots:       [{id, courier_id, start, end}]
//! ```
//!
//! Missing collections are empty. Unknown fields are ignored. A record with
//! a missing or ill-typed required field fails the whole load; hosts that
//! must keep running use [`load_or_fallback`].

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{SeedError, SeedResult};
use crate::models::{Courier, MenuItem, Order, OrderStatus, Restaurant, Slot};

/// The five collections of a seed dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Seed {
    /// Restaurants.
    pub restaurants: Vec<Restaurant>,
    /// Menu items.
    pub menu_items: Vec<MenuItem>,
    /// Orders.
    pub orders: Vec<Order>,
    /// Couriers.
    pub couriers: Vec<Courier>,
    /// Courier availability slots.
    pub slots: Vec<Slot>,
}

impl Seed {
    /// Minimal dataset used when the real seed cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            restaurants: vec![Restaurant::new("r1", "Test Restaurant", "center")],
            menu_items: Vec::new(),
            orders: vec![Order::new("o1", "r1")
                .with_item("m1", 1)
                .with_total(1000)
                .with_ts("2024-01-15 10:00:00")
                .with_status(OrderStatus::Delivered)],
            couriers: vec![Courier::new("c1", "Test Courier", "bike", "center")],
            slots: vec![Slot::new("s1", "c1", "10:00", "12:00")],
        }
    }

    /// Splits into `(restaurants, menu_items, orders, couriers, slots)`.
    pub fn into_parts(
        self,
    ) -> (
        Vec<Restaurant>,
        Vec<MenuItem>,
        Vec<Order>,
        Vec<Courier>,
        Vec<Slot>,
    ) {
        (
            self.restaurants,
            self.menu_items,
            self.orders,
            self.couriers,
            self.slots,
        )
    }

    /// Whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
            && self.menu_items.is_empty()
            && self.orders.is_empty()
            && self.couriers.is_empty()
            && self.slots.is_empty()
    }
}

/// Parses a seed document.
///
/// # Errors
/// [`SeedError::Shape`] if the root is not an object or a collection is
/// not an array; [`SeedError::Record`] for the first malformed record.
pub fn load_seed(data: &Value) -> SeedResult<Seed> {
    let root = data
        .as_object()
        .ok_or_else(|| SeedError::shape("seed root must be a JSON object"))?;

    let seed = Seed {
        restaurants: records(root, "restaurants")?,
        menu_items: records(root, "menu_items")?,
        orders: records(root, "orders")?,
        couriers: records(root, "couriers")?,
        slots: records(root, "slots")?,
    };

    info!(
        restaurants = seed.restaurants.len(),
        menu_items = seed.menu_items.len(),
        orders = seed.orders.len(),
        couriers = seed.couriers.len(),
        slots = seed.slots.len(),
        "loaded seed data"
    );
    Ok(seed)
}

fn records<T: DeserializeOwned>(
    root: &Map<String, Value>,
    collection: &'static str,
) -> SeedResult<Vec<T>> {
    let Some(value) = root.get(collection) else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| SeedError::shape(format!("'{collection}' must be an array")))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            <T as Deserialize<'_>>::deserialize(item).map_err(|source| SeedError::Record {
                collection,
                index,
                source,
            })
        })
        .collect()
}

/// Parses seed JSON text.
pub fn load_seed_str(json: &str) -> SeedResult<Seed> {
    let data: Value = serde_json::from_str(json)?;
    load_seed(&data)
}

/// Reads and parses a seed file.
pub fn load_seed_file(path: impl AsRef<Path>) -> SeedResult<Seed> {
    let text = std::fs::read_to_string(path)?;
    load_seed_str(&text)
}

/// Loads a seed file, substituting [`Seed::fallback`] on any error.
pub fn load_or_fallback(path: impl AsRef<Path>) -> Seed {
    let path = path.as_ref();
    match load_seed_file(path) {
        Ok(seed) => seed,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "seed load failed; using fallback dataset");
            Seed::fallback()
        }
    }
}
