//! Cost estimator configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid
//! configuration.
//!
//! ```
//! use fp_delivery::config::EstimatorConfig;
//!
//! let config = EstimatorConfig::from_json_str(r#"{"simulated_delay_ms": 5}"#).unwrap();
//! assert_eq!(config.cache_capacity, 128);
//! assert_eq!(config.simulated_delay_ms, 5);
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::ConfigError;

/// Default number of cached route costs.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Default artificial delay for an uncached cost computation (ms).
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 100;

/// Settings for [`crate::memo::RouteCostEstimator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Maximum number of distinct argument tuples kept (LRU beyond this).
    pub cache_capacity: usize,
    /// Delay applied to each uncached computation (ms).
    pub simulated_delay_ms: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}

impl EstimatorConfig {
    /// Parses a JSON configuration and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Sets the simulated delay (ms).
    pub fn with_simulated_delay_ms(mut self, delay_ms: u64) -> Self {
        self.simulated_delay_ms = delay_ms;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.capacity().map(|_| ())
    }

    /// Cache capacity as a non-zero count.
    pub fn capacity(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.cache_capacity).ok_or(ConfigError::ZeroCapacity)
    }

    /// Simulated delay as a duration.
    #[inline]
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}
