//! Device profiles
//!
//! A profile captures the economics of one consumable product: what the first
//! unit costs, what each replenishment costs, and how many usage-units a fresh
//! unit provides before it is depleted.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Immutable description of one consumable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Brand or model name, used as the curve label
    pub name: String,
    /// Cost of each replenishment event (refill or replacement)
    pub unit_price: f64,
    /// Usage-units a fresh unit provides before depletion
    pub usage_lifetime: u32,
    /// One-time cost of the first unit
    #[serde(default)]
    pub initial_cost: f64,
}

impl DeviceProfile {
    /// Create a validated profile
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        usage_lifetime: u32,
        initial_cost: f64,
    ) -> Result<Self> {
        let profile = Self {
            name: name.into(),
            unit_price,
            usage_lifetime,
            initial_cost,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the invariants a profile must hold before it can be simulated.
    ///
    /// Fields are public so profiles can be deserialized from configuration;
    /// every simulation entry point calls this first.
    pub fn validate(&self) -> Result<()> {
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(SimulationError::invalid(
                "unit_price",
                self.unit_price,
                "must be finite and non-negative",
            ));
        }
        if !self.initial_cost.is_finite() || self.initial_cost < 0.0 {
            return Err(SimulationError::invalid(
                "initial_cost",
                self.initial_cost,
                "must be finite and non-negative",
            ));
        }
        if self.usage_lifetime == 0 {
            return Err(SimulationError::invalid(
                "usage_lifetime",
                self.usage_lifetime,
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_profile() {
        let vuse = DeviceProfile::new("Vuse", 10.0, 4, 20.0).unwrap();
        assert_eq!(vuse.name, "Vuse");
        assert_eq!(vuse.usage_lifetime, 4);
    }

    #[test]
    fn test_zero_lifetime_rejected() {
        let err = DeviceProfile::new("Broken", 10.0, 0, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "usage_lifetime");
    }

    #[test]
    fn test_negative_and_nan_prices_rejected() {
        let err = DeviceProfile::new("Cheap", -1.0, 3, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "unit_price");

        let err = DeviceProfile::new("Odd", 1.0, 3, f64::NAN).unwrap_err();
        assert_eq!(err.parameter(), "initial_cost");
    }

    #[test]
    fn test_initial_cost_defaults_when_omitted() {
        let json = r#"{"name":"Geekbar","unit_price":35.0,"usage_lifetime":7}"#;
        let profile: DeviceProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.initial_cost, 0.0);
        assert!(profile.validate().is_ok());
    }
}
