//! Memoized route costing.
//!
//! [`MemoCache`] is a bounded, least-recently-used memo table with a narrow
//! `get_or_compute` / `clear` interface. [`RouteCostEstimator`] owns one
//! and serves synthetic route costs from it.
//!
//! # Concurrency
//! The cache may be shared across threads. For a given key the compute
//! closure runs at most once while its entry is resident; callers of the
//! same key wait for that result. Distinct keys compute independently.

mod cache;
mod estimator;

pub use cache::{CacheInfo, MemoCache};
pub use estimator::{CostKey, PerformanceReport, RouteCost, RouteCostEstimator};
