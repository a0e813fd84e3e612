//! Courier and availability models.
//!
//! Couriers deliver orders using a vehicle and work in a zone. Their
//! availability is declared as slots: plain `[start, end]` string windows
//! compared lexically, without calendar semantics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A delivery courier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Courier {
    /// Unique courier identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Vehicle used for deliveries.
    pub vehicle: Vehicle,
    /// Zone the courier works in.
    pub zone: String,
}

/// Courier vehicle.
///
/// Serialized as a lowercase string. Unrecognized names are preserved
/// in [`Vehicle::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Vehicle {
    /// Bicycle.
    Bike,
    /// Car.
    Car,
    /// Scooter.
    Scooter,
    /// Any other vehicle name.
    Other(String),
}

/// A courier availability window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier.
    pub id: String,
    /// Courier this window belongs to.
    pub courier_id: String,
    /// Window start (lexically comparable string).
    pub start: String,
    /// Window end (lexically comparable string).
    pub end: String,
}

impl Courier {
    /// Creates a courier.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vehicle: impl Into<Vehicle>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vehicle: vehicle.into(),
            zone: zone.into(),
        }
    }

    /// Whether the courier rides the given vehicle.
    #[inline]
    pub fn rides(&self, vehicle: &Vehicle) -> bool {
        &self.vehicle == vehicle
    }
}

impl Vehicle {
    /// Lowercase vehicle name.
    pub fn as_str(&self) -> &str {
        match self {
            Vehicle::Bike => "bike",
            Vehicle::Car => "car",
            Vehicle::Scooter => "scooter",
            Vehicle::Other(name) => name,
        }
    }
}

impl From<String> for Vehicle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "bike" => Vehicle::Bike,
            "car" => Vehicle::Car,
            "scooter" => Vehicle::Scooter,
            _ => Vehicle::Other(name),
        }
    }
}

impl From<&str> for Vehicle {
    fn from(name: &str) -> Self {
        Vehicle::from(name.to_string())
    }
}

impl From<Vehicle> for String {
    fn from(vehicle: Vehicle) -> Self {
        match vehicle {
            Vehicle::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Slot {
    /// Creates a slot.
    pub fn new(
        id: impl Into<String>,
        courier_id: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            courier_id: courier_id.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `start` does not sort after `end`.
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Whether a time string falls within `[start, end]` (inclusive, lexical).
    pub fn covers(&self, time: &str) -> bool {
        self.start.as_str() <= time && time <= self.end.as_str()
    }
}
