//! Consumable device cost simulation library
//!
//! This crate estimates the cumulative cost of running a consumable device
//! (a refillable or disposable product) under random daily usage, using
//! Monte Carlo simulation. It provides:
//! - Device profiles describing unit price, usage lifetime and initial cost
//! - A cost-path simulator with Poisson daily usage and a full-reset
//!   replenishment rule
//! - An ensemble sampler with explicit, reproducible seeding
//! - Per-day mean and percentile-band summaries
//! - Multi-device comparison feeding a pluggable `CurveSink`
//!
//! ```ignore
//! use vapecost_core::{DeviceProfile, EnsembleConfig, compare_devices};
//!
//! let devices = vec![DeviceProfile::new("Vuse", 10.0, 4, 20.0)?];
//! let config = EnsembleConfig {
//!     total_days: 100,
//!     num_simulations: 2000,
//!     usage_rate: 0.25,
//!     seed: Some(42),
//! };
//! let curves = compare_devices(&devices, &config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod comparison;
pub mod config;
pub mod ensemble;
pub mod error;
pub mod simulation;
pub mod sink;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use comparison::{compare_devices, device_configs, publish, summarize_device};
pub use config::{ComparisonConfig, EnsembleConfig};
pub use ensemble::{run_ensemble, run_ensemble_with};
pub use error::{Result, SimulationError};
pub use model::{CostPath, DeviceCurve, DeviceProfile, Ensemble, SummaryCurve};
pub use simulation::{simulate_path, simulate_path_seeded};
pub use sink::CurveSink;
pub use summary::summarize;
