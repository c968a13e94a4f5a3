//! Simulation configuration
//!
//! `ComparisonConfig` is the user-facing shape: it deserializes from a
//! configuration file and keeps horizon and simulation count as signed
//! integers so out-of-range values are reported as invalid arguments rather
//! than parse failures. `validate` turns it into the checked
//! `EnsembleConfig` the simulation engine runs on.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::{DEFAULT_USAGE_RATE, DeviceProfile, validate_usage_rate};

fn default_total_days() -> i64 {
    100
}

fn default_num_simulations() -> i64 {
    2000
}

fn default_usage_rate() -> f64 {
    DEFAULT_USAGE_RATE
}

/// Checked parameters for sampling one ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    pub total_days: usize,
    pub num_simulations: usize,
    /// Mean daily usage-units
    pub usage_rate: f64,
    /// Master seed; `None` draws one from the thread-local generator
    pub seed: Option<u64>,
}

impl EnsembleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_simulations == 0 {
            return Err(SimulationError::invalid(
                "num_simulations",
                self.num_simulations,
                "must be positive",
            ));
        }
        validate_usage_rate(self.usage_rate)
    }
}

/// A set of devices compared over one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default = "default_total_days")]
    pub total_days: i64,
    #[serde(default = "default_num_simulations")]
    pub num_simulations: i64,
    #[serde(default = "default_usage_rate")]
    pub usage_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub devices: Vec<DeviceProfile>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            total_days: default_total_days(),
            num_simulations: default_num_simulations(),
            usage_rate: DEFAULT_USAGE_RATE,
            seed: None,
            devices: stock_devices(),
        }
    }
}

impl ComparisonConfig {
    /// Check every field and produce the engine configuration
    pub fn validate(&self) -> Result<EnsembleConfig> {
        let total_days = usize::try_from(self.total_days).map_err(|_| {
            SimulationError::invalid("total_days", self.total_days, "must be non-negative")
        })?;
        let num_simulations = usize::try_from(self.num_simulations)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                SimulationError::invalid(
                    "num_simulations",
                    self.num_simulations,
                    "must be positive",
                )
            })?;

        for device in &self.devices {
            device.validate()?;
        }

        let config = EnsembleConfig {
            total_days,
            num_simulations,
            usage_rate: self.usage_rate,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Devices compared when no configuration names any
pub fn stock_devices() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile {
            name: "Vuse".to_string(),
            unit_price: 10.0,
            usage_lifetime: 4,
            initial_cost: 20.0,
        },
        DeviceProfile {
            name: "Geek Italy".to_string(),
            unit_price: 30.0,
            usage_lifetime: 7,
            initial_cost: 0.0,
        },
        DeviceProfile {
            name: "Geekbar".to_string(),
            unit_price: 35.0,
            usage_lifetime: 7,
            initial_cost: 0.0,
        },
    ]
}
