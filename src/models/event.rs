//! Audit events and declarative rules.
//!
//! Neither record is interpreted by the data-processing functions:
//! events are kept for auditing, and rules only select built-in
//! policies by kind (see [`crate::policy`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An audit event with an open payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: String,
    /// Event timestamp.
    pub ts: String,
    /// Event name.
    pub name: String,
    /// Arbitrary key-value payload.
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// A declarative rule reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule identifier.
    pub id: String,
    /// Rule kind (e.g., "max_total", "vehicle_load").
    pub kind: String,
    /// Arbitrary key-value payload (not interpreted).
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Recognized rule kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Upper bound on an order total.
    MaxOrderTotal,
    /// Vehicle capacity for heavy orders.
    VehicleLoad,
    /// Unrecognized kind.
    Other(String),
}

impl Event {
    /// Creates an event with an empty payload.
    pub fn new(id: impl Into<String>, ts: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ts: ts.into(),
            name: name.into(),
            payload: Map::new(),
        }
    }

    /// Adds a payload entry.
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

impl Rule {
    /// Creates a rule with an empty payload.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Adds a payload entry.
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Parsed rule kind.
    pub fn rule_kind(&self) -> RuleKind {
        RuleKind::parse(&self.kind)
    }
}

impl RuleKind {
    /// Parses a kind string. Unknown kinds map to [`RuleKind::Other`].
    pub fn parse(kind: &str) -> Self {
        match kind {
            "max_total" => RuleKind::MaxOrderTotal,
            "vehicle_load" => RuleKind::VehicleLoad,
            other => RuleKind::Other(other.to_string()),
        }
    }
}
