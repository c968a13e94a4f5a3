use std::io::Write;
use std::time::Instant;

use vapecost_core::{ComparisonConfig, DeviceCurve, device_configs, publish, summarize_device};

use crate::args::{Args, OutputFormat};
use crate::config_file;
use crate::sinks::{JsonSink, TableSink};

/// Validate the configuration and simulate every device in it
pub fn simulate(config: &ComparisonConfig) -> color_eyre::Result<Vec<DeviceCurve>> {
    let ensemble_config = config.validate()?;

    tracing::info!(
        devices = config.devices.len(),
        total_days = ensemble_config.total_days,
        num_simulations = ensemble_config.num_simulations,
        usage_rate = ensemble_config.usage_rate,
        seed = ?ensemble_config.seed,
        "Starting simulation"
    );

    let started = Instant::now();
    let mut curves = Vec::with_capacity(config.devices.len());

    for (device, device_config) in config
        .devices
        .iter()
        .zip(device_configs(&ensemble_config, config.devices.len()))
    {
        let device_started = Instant::now();
        let DeviceCurve { device, curve } = summarize_device(device, &device_config)?;

        let (p5, p95) = curve.final_band().unwrap_or((0.0, 0.0));
        tracing::info!(
            device = %device.name,
            final_mean = curve.final_mean().unwrap_or(device.initial_cost),
            p5,
            p95,
            elapsed_ms = device_started.elapsed().as_millis() as u64,
            "Simulated device"
        );
        curves.push(DeviceCurve { device, curve });
    }
    tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "Simulation complete");

    Ok(curves)
}

/// Render curves to `out` in the requested format
pub fn render<W: Write>(
    curves: &[DeviceCurve],
    format: OutputFormat,
    every: usize,
    out: W,
) -> color_eyre::Result<()> {
    match format {
        OutputFormat::Table => publish(curves, &mut TableSink::new(out, every))?,
        OutputFormat::Json => publish(curves, &mut JsonSink::new(out))?,
    }
    Ok(())
}

/// Full command-line run: resolve config, simulate, render to `out`
pub fn run<W: Write>(args: &Args, out: W) -> color_eyre::Result<()> {
    let config = config_file::resolve(args)?;
    let curves = simulate(&config)?;
    render(&curves, args.format, args.every, out)
}
