//! Multi-device comparison
//!
//! Every device is simulated over the same horizon and simulation count and
//! summarized on its own. Devices never share random draws.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::config::EnsembleConfig;
use crate::ensemble::run_ensemble_with;
use crate::error::Result;
use crate::model::{DeviceCurve, DeviceProfile};
use crate::sink::CurveSink;
use crate::summary::summarize;

/// Produce one summary curve per device; reproducible when seeded
pub fn compare_devices(
    devices: &[DeviceProfile],
    config: &EnsembleConfig,
) -> Result<Vec<DeviceCurve>> {
    config.validate()?;
    for device in devices {
        device.validate()?;
    }

    devices
        .iter()
        .zip(device_configs(config, devices.len()))
        .map(|(device, device_config)| summarize_device(device, &device_config))
        .collect()
}

/// Per-device ensemble settings for a comparison of `count` devices.
///
/// With a seed, device `i` gets the `i`-th draw of a generator seeded from
/// it; without one, every device draws fresh entropy.
pub fn device_configs(config: &EnsembleConfig, count: usize) -> Vec<EnsembleConfig> {
    let mut seeds = config.seed.map(SmallRng::seed_from_u64);
    (0..count)
        .map(|_| EnsembleConfig {
            seed: seeds.as_mut().map(RngCore::next_u64),
            ..config.clone()
        })
        .collect()
}

/// Sample and summarize one device
pub fn summarize_device(device: &DeviceProfile, config: &EnsembleConfig) -> Result<DeviceCurve> {
    let ensemble = run_ensemble_with(device, config)?;
    Ok(DeviceCurve {
        device: device.clone(),
        curve: summarize(&ensemble)?,
    })
}

/// Hand every curve to `sink`, then finish it
pub fn publish<S: CurveSink>(
    curves: &[DeviceCurve],
    sink: &mut S,
) -> std::result::Result<(), S::Error> {
    for DeviceCurve { device, curve } in curves {
        sink.accept(
            &device.name,
            &curve.days(),
            &curve.mean,
            &curve.lower_band,
            &curve.upper_band,
        )?;
    }
    sink.finish()
}
