//! Error types for loading data and configuration.
//!
//! Business-rule outcomes are not errors here: they are returned as
//! [`crate::ftypes::Either`] values. These types cover input that could
//! not be turned into domain records at all.

use thiserror::Error;

/// Result type for seed loading.
pub type SeedResult<T> = Result<T, SeedError>;

/// Seed data could not be loaded.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Reading the seed source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The root or a collection has the wrong JSON type.
    #[error("Invalid seed shape: {0}")]
    Shape(String),

    /// A record is missing a required field or has an ill-typed one.
    #[error("Malformed {collection} record #{index}: {source}")]
    Record {
        /// Collection name (e.g., "orders").
        collection: &'static str,
        /// Zero-based position in the collection.
        index: usize,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

impl SeedError {
    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }
}

/// Configuration is invalid.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The cache must hold at least one entry.
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,

    /// The configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
