//! Restaurant and menu models.

use serde::{Deserialize, Serialize};

/// A restaurant that receives orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Coarse geographic grouping (e.g., "north", "center").
    pub zone: String,
}

/// A dish offered by a restaurant.
///
/// Prices are in minor currency units, preparation time in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique menu item identifier.
    pub id: String,
    /// Owning restaurant ID.
    pub rest_id: String,
    /// Display name.
    pub name: String,
    /// Price in minor currency units.
    pub price: u32,
    /// Preparation time in minutes.
    pub prep_time: u32,
}

impl Restaurant {
    /// Creates a restaurant.
    pub fn new(id: impl Into<String>, name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            zone: zone.into(),
        }
    }

    /// Whether this restaurant belongs to the given zone.
    #[inline]
    pub fn in_zone(&self, zone: &str) -> bool {
        self.zone == zone
    }
}

impl MenuItem {
    /// Creates a menu item with zero price and preparation time.
    pub fn new(id: impl Into<String>, rest_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rest_id: rest_id.into(),
            name: name.into(),
            price: 0,
            prep_time: 0,
        }
    }

    /// Sets the price (minor units).
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Sets the preparation time (minutes).
    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }
}
