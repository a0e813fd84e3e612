//! Delivery domain models.
//!
//! Immutable value records for the food-delivery domain. Records are never
//! updated in place: every "change" in this crate produces a new collection
//! (see [`crate::transforms`]) and leaves the old one valid.
//!
//! # Domain Mappings
//!
//! | Record | Role | Identity |
//! |--------|------|----------|
//! | Restaurant | Source of orders, carries a zone | `id` |
//! | MenuItem | Priced dish of a restaurant | `id` |
//! | Order | Customer purchase with line items | `id` |
//! | Courier | Delivery agent with a vehicle | `id` |
//! | Slot | Courier availability window | `id` |
//! | Route | Ordered list of order ids for a courier | `id` |
//! | Event | Audit record (not interpreted) | `id` |
//! | Rule | Declarative policy reference | `id` |

mod courier;
mod event;
mod order;
mod restaurant;
mod route;

pub use courier::{Courier, Slot, Vehicle};
pub use event::{Event, Rule, RuleKind};
pub use order::{Order, OrderLine, OrderStatus, UnknownStatus};
pub use restaurant::{MenuItem, Restaurant};
pub use route::Route;
