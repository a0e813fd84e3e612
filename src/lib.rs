//! Functional data-processing kernel for a food-delivery domain.
//!
//! Immutable records, pure transforms, recursive traversals, a memoized
//! route cost estimator and Maybe/Either based order rules. Presentation
//! (dashboards, menus, data sourcing) is left to the host, which calls
//! these functions and renders their results.
//!
//! # Modules
//!
//! - **`models`**: Domain records: `Restaurant`, `MenuItem`, `Order`,
//!   `Courier`, `Slot`, `Route`, `Event`, `Rule`
//! - **`transforms`**: Append/filter/map/aggregate over record slices
//! - **`filters`**: Predicate factories (restaurant, status, time, zone, price)
//! - **`recursion`**: Route splitting and zone-based order collection
//! - **`memo`**: LRU memo cache and the route cost estimator
//! - **`ftypes`**: `Maybe`, `Either`, and the order lookup/validation rules
//! - **`policy`**: Order policies behind the validation rules
//! - **`service`**: Immutable `DeliveryService` aggregate
//! - **`seed`**: Seed document loading with a fallback dataset
//! - **`validation`**: Cross-collection seed integrity checks
//! - **`report`**: Dataset KPIs
//!
//! # Example
//!
//! ```
//! use fp_delivery::ftypes::{safe_order, validate_order};
//! use fp_delivery::seed::Seed;
//! use fp_delivery::service::DeliveryService;
//!
//! let seed = Seed::fallback();
//! let service = DeliveryService::from_seed(&seed);
//!
//! let order = safe_order(service.orders(), "o1");
//! assert!(order.is_just());
//! assert!(order
//!     .into_option()
//!     .map(|o| validate_order(&o, &[], &seed.couriers).is_right())
//!     .unwrap_or(false));
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod ftypes;
pub mod memo;
pub mod models;
pub mod policy;
pub mod recursion;
pub mod report;
pub mod seed;
pub mod service;
pub mod transforms;
pub mod validation;
