//! Metricast Facade
//!
//! High-level API for metric forecasting. Re-exports all public types from
//! the metricast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use metricast_api::*;

// Explicit re-exports for documentation
pub use metricast_api::prelude;

// Re-export core modules for direct access
pub use metricast_core::{confidence, engine, period, regression, seasonality, smoothing, stats, summary};

// Re-export SPI modules
pub use metricast_spi::{contract, model};
