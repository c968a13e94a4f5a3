//! Daily usage models
//!
//! A usage model answers one question per simulated day: how many
//! usage-units were consumed? `PoissonUsage` is the stochastic model used by
//! the simulator; `FixedUsage` is a deterministic override for scenarios and
//! tests.

use rand::Rng;
use rand::distr::Distribution;
use rand_distr::Poisson;

use crate::error::{Result, SimulationError};

/// Mean daily usage-units when nothing else is configured
pub const DEFAULT_USAGE_RATE: f64 = 0.25;

/// Source of per-day usage counts
pub trait UsageModel {
    fn daily_uses(&mut self) -> u64;
}

/// Poisson-distributed daily usage drawn from a borrowed generator
pub struct PoissonUsage<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    // None when the rate is exactly zero; rand_distr rejects lambda == 0.
    dist: Option<Poisson<f64>>,
}

impl<'a, R: Rng + ?Sized> PoissonUsage<'a, R> {
    pub fn new(rate: f64, rng: &'a mut R) -> Result<Self> {
        validate_usage_rate(rate)?;
        let dist = if rate == 0.0 {
            None
        } else {
            Some(Poisson::new(rate).map_err(|_| {
                SimulationError::invalid("usage_rate", rate, "not a valid Poisson mean")
            })?)
        };
        Ok(Self { rng, dist })
    }
}

impl<R: Rng + ?Sized> UsageModel for PoissonUsage<'_, R> {
    fn daily_uses(&mut self) -> u64 {
        match &self.dist {
            Some(dist) => {
                let draw: f64 = dist.sample(&mut *self.rng);
                draw as u64
            }
            None => 0,
        }
    }
}

/// The same usage count every day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUsage(pub u64);

impl UsageModel for FixedUsage {
    fn daily_uses(&mut self) -> u64 {
        self.0
    }
}

pub fn validate_usage_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(SimulationError::invalid(
            "usage_rate",
            rate,
            "must be finite and non-negative",
        ));
    }
    Ok(())
}
