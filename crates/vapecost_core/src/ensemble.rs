//! Ensemble sampling
//!
//! Runs the path simulator many times for one device and collects the paths
//! into a fixed-shape `Ensemble`.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::config::EnsembleConfig;
use crate::error::Result;
use crate::model::{CostPath, DEFAULT_USAGE_RATE, DeviceProfile, Ensemble};
use crate::simulation::simulate_path_seeded;

/// Paths simulated per batch; each batch owns one generator
const MAX_BATCH_SIZE: usize = 100;

/// Sample `num_simulations` independent paths at the default usage rate
/// with a fresh entropy seed.
pub fn run_ensemble(
    device: &DeviceProfile,
    total_days: usize,
    num_simulations: usize,
) -> Result<Ensemble> {
    let config = EnsembleConfig {
        total_days,
        num_simulations,
        usage_rate: DEFAULT_USAGE_RATE,
        seed: None,
    };
    run_ensemble_with(device, &config)
}

/// Sample an ensemble of independent paths.
///
/// A master generator seeded from `config.seed` hands one seed to each batch,
/// and each batch hands one seed to each of its paths, so no generator is
/// ever shared. Rows come back in batch order, which makes a seeded ensemble
/// identical whether or not batches ran in parallel.
pub fn run_ensemble_with(device: &DeviceProfile, config: &EnsembleConfig) -> Result<Ensemble> {
    device.validate()?;
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().next_u64());
    let num_batches = config.num_simulations.div_ceil(MAX_BATCH_SIZE);

    let mut master = SmallRng::seed_from_u64(seed);
    let batch_seeds: Vec<u64> = (0..num_batches).map(|_| master.next_u64()).collect();

    let run_batch = |(i, batch_seed): (usize, u64)| -> Result<Vec<CostPath>> {
        let mut rng = SmallRng::seed_from_u64(batch_seed);

        let batch_size = if i == num_batches - 1 {
            config.num_simulations - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| {
                let path_seed = rng.next_u64();
                simulate_path_seeded(device, config.total_days, config.usage_rate, path_seed)
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let batches: Vec<Vec<CostPath>> = batch_seeds
        .into_par_iter()
        .enumerate()
        .map(run_batch)
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let batches: Vec<Vec<CostPath>> = batch_seeds
        .into_iter()
        .enumerate()
        .map(run_batch)
        .collect::<Result<_>>()?;

    Ensemble::from_paths(config.total_days, batches.into_iter().flatten().collect())
}
