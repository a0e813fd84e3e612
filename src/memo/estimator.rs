//! Synthetic route cost estimator.
//!
//! # Cost Model
//!
//! For order IDs `ids` (lengths counted in characters):
//!
//! | Field | Definition |
//! |-------|-----------|
//! | orders_count | `ids.len()` |
//! | distance | `Σ len(id) × 2` |
//! | duration | `(Σ len(id)) × 3` |
//! | cost | `orders_count × 100 + distance × 2 + duration × 5` |
//!
//! Courier IDs take part in the cache key only.

use std::num::NonZeroUsize;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CacheInfo, MemoCache};
use crate::config::{EstimatorConfig, DEFAULT_CACHE_CAPACITY};
use crate::error::ConfigError;
use crate::models::{Courier, Order};

const BASE_COST_PER_ORDER: u64 = 100;
const DISTANCE_PER_CHAR: u64 = 2;
const DURATION_PER_CHAR: u64 = 3;
const COST_PER_DISTANCE: u64 = 2;
const COST_PER_DURATION: u64 = 5;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CACHE_CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("default cache capacity must be non-zero"),
};

/// Cache key: the full argument tuple of a cost computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostKey {
    /// Route identifier.
    pub route_id: String,
    /// Order IDs in route order.
    pub order_ids: Vec<String>,
    /// Courier IDs.
    pub courier_ids: Vec<String>,
}

/// Estimated route cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCost {
    /// Synthetic distance.
    pub distance: u64,
    /// Synthetic duration.
    pub duration: u64,
    /// Total cost.
    pub cost: u64,
    /// Number of orders on the route.
    pub orders_count: usize,
    /// Route identifier.
    pub route_id: String,
}

/// Timing of one cold and one warm cost computation.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    /// Elapsed time of the uncached call.
    pub first_call_time: Duration,
    /// Elapsed time of the cached call.
    pub cached_call_time: Duration,
    /// `first_call_time / cached_call_time`, or 0.0 if the cached call took no time.
    pub speedup: f64,
    /// Result of the first call.
    pub result: RouteCost,
}

impl RouteCost {
    /// Computes the cost directly, without caching or delay.
    pub fn compute(route_id: &str, order_ids: &[String]) -> Self {
        let total_chars: u64 = order_ids.iter().map(|id| id.chars().count() as u64).sum();
        let orders_count = order_ids.len();
        let distance = total_chars * DISTANCE_PER_CHAR;
        let duration = total_chars * DURATION_PER_CHAR;
        let cost = orders_count as u64 * BASE_COST_PER_ORDER
            + distance * COST_PER_DISTANCE
            + duration * COST_PER_DURATION;

        Self {
            distance,
            duration,
            cost,
            orders_count,
            route_id: route_id.to_string(),
        }
    }
}

/// Route cost estimator backed by an owned LRU memo cache.
///
/// # Example
/// ```
/// use fp_delivery::config::EstimatorConfig;
/// use fp_delivery::memo::RouteCostEstimator;
///
/// let config = EstimatorConfig::default().with_simulated_delay_ms(0);
/// let estimator = RouteCostEstimator::new(&config).unwrap();
///
/// let cost = estimator.compute_route_cost_cached("route1", &["a".into()], &[]);
/// assert_eq!(cost.cost, 119);
/// assert_eq!(estimator.cache_info().misses, 1);
/// ```
#[derive(Debug)]
pub struct RouteCostEstimator {
    cache: MemoCache<CostKey, RouteCost>,
    delay: Duration,
}

impl Default for RouteCostEstimator {
    fn default() -> Self {
        Self::with_capacity(
            DEFAULT_CAPACITY,
            EstimatorConfig::default().simulated_delay(),
        )
    }
}

impl RouteCostEstimator {
    /// Creates an estimator from configuration.
    pub fn new(config: &EstimatorConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_capacity(config.capacity()?, config.simulated_delay()))
    }

    fn with_capacity(capacity: NonZeroUsize, delay: Duration) -> Self {
        Self {
            cache: MemoCache::new(capacity),
            delay,
        }
    }

    /// Cost for the given identifiers, served from cache when possible.
    ///
    /// On a miss the simulated delay runs before computing.
    pub fn compute_route_cost_cached(
        &self,
        route_id: &str,
        order_ids: &[String],
        courier_ids: &[String],
    ) -> RouteCost {
        let key = CostKey {
            route_id: route_id.to_string(),
            order_ids: order_ids.to_vec(),
            courier_ids: courier_ids.to_vec(),
        };

        self.cache.get_or_compute(key, || {
            debug!(
                route_id,
                orders = order_ids.len(),
                couriers = courier_ids.len(),
                "route cost cache miss"
            );
            thread::sleep(self.delay);
            RouteCost::compute(route_id, order_ids)
        })
    }

    /// Cost for the given records, keyed by their IDs only.
    pub fn compute_route_cost(
        &self,
        route_id: &str,
        orders: &[Order],
        couriers: &[Courier],
    ) -> RouteCost {
        let order_ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();
        let courier_ids: Vec<String> = couriers.iter().map(|c| c.id.clone()).collect();
        self.compute_route_cost_cached(route_id, &order_ids, &courier_ids)
    }

    /// Clears the cache, then times a cold and a warm call.
    pub fn measure_performance(
        &self,
        route_id: &str,
        orders: &[Order],
        couriers: &[Courier],
    ) -> PerformanceReport {
        self.cache_clear();

        let start = Instant::now();
        let result = self.compute_route_cost(route_id, orders, couriers);
        let first_call_time = start.elapsed();

        let start = Instant::now();
        let cached = self.compute_route_cost(route_id, orders, couriers);
        let cached_call_time = start.elapsed();
        debug_assert_eq!(cached, result);

        let speedup = if cached_call_time.is_zero() {
            0.0
        } else {
            first_call_time.as_secs_f64() / cached_call_time.as_secs_f64()
        };

        debug!(
            route_id,
            first_ms = first_call_time.as_secs_f64() * 1000.0,
            cached_ms = cached_call_time.as_secs_f64() * 1000.0,
            speedup,
            "measured route cost memoization"
        );

        PerformanceReport {
            first_call_time,
            cached_call_time,
            speedup,
            result,
        }
    }

    /// Empties the cache; later calls recompute.
    pub fn cache_clear(&self) {
        self.cache.clear();
    }

    /// Cache statistics.
    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }
}
