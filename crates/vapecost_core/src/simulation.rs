use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::model::{CostPath, DeviceProfile, PoissonUsage, UsageModel};

/// Run one cost path with an arbitrary usage model.
///
/// Capacity starts at `usage_lifetime`. Whenever a day's usage drives it to
/// zero or below, one replenishment is bought and capacity resets to full.
/// Any deficit beyond zero is discarded, so a day triggers at most one
/// replenishment no matter how much was used.
pub fn simulate_with_usage<U: UsageModel + ?Sized>(
    device: &DeviceProfile,
    total_days: usize,
    usage: &mut U,
) -> Result<CostPath> {
    device.validate()?;

    let lifetime = i64::from(device.usage_lifetime);
    let mut cost = device.initial_cost;
    let mut remaining = lifetime;
    let mut replenishments = 0usize;
    let mut costs = Vec::with_capacity(total_days);

    for _ in 0..total_days {
        let used = i64::try_from(usage.daily_uses()).unwrap_or(i64::MAX);
        remaining = remaining.saturating_sub(used);

        if remaining <= 0 {
            cost += device.unit_price;
            replenishments += 1;
            remaining = lifetime;
        }

        costs.push(cost);
    }

    Ok(CostPath {
        costs,
        replenishments,
    })
}

/// Run one cost path with Poisson usage drawn from `rng`
pub fn simulate_path<R: Rng + ?Sized>(
    device: &DeviceProfile,
    total_days: usize,
    usage_rate: f64,
    rng: &mut R,
) -> Result<CostPath> {
    let mut usage = PoissonUsage::new(usage_rate, rng)?;
    simulate_with_usage(device, total_days, &mut usage)
}

/// Run one reproducible cost path from a seed
pub fn simulate_path_seeded(
    device: &DeviceProfile,
    total_days: usize,
    usage_rate: f64,
    seed: u64,
) -> Result<CostPath> {
    let mut rng = SmallRng::seed_from_u64(seed);
    simulate_path(device, total_days, usage_rate, &mut rng)
}
