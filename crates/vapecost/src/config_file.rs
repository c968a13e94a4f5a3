//! Loading the comparison configuration
//!
//! Settings are layered: built-in defaults, then the YAML file if one is
//! given, then command-line overrides.

use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use vapecost_core::ComparisonConfig;
use vapecost_core::config::stock_devices;

use crate::args::Args;

/// Parse a YAML configuration document
pub fn from_yaml(yaml: &str) -> color_eyre::Result<ComparisonConfig> {
    serde_saphyr::from_str(yaml).map_err(|e| eyre!("invalid configuration: {e}"))
}

/// Read and parse a YAML configuration file
pub fn load_file(path: &Path) -> color_eyre::Result<ComparisonConfig> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    from_yaml(&content).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

/// Resolve the effective configuration for a run
pub fn resolve(args: &Args) -> color_eyre::Result<ComparisonConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration file");
            load_file(path)?
        }
        None => {
            tracing::info!("No configuration file given, using built-in devices");
            ComparisonConfig::default()
        }
    };

    if config.devices.is_empty() {
        tracing::warn!("Configuration lists no devices, using built-in devices");
        config.devices = stock_devices();
    }

    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut ComparisonConfig, args: &Args) {
    if let Some(days) = args.days {
        config.total_days = days;
    }
    if let Some(simulations) = args.simulations {
        config.num_simulations = simulations;
    }
    if let Some(rate) = args.usage_rate {
        config.usage_rate = rate;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YAML: &str = "\
total_days: 30
num_simulations: 500
seed: 11
devices:
  - name: Pod
    unit_price: 8.5
    usage_lifetime: 3
    initial_cost: 25.0
  - name: Disposable
    unit_price: 12.0
    usage_lifetime: 5
";

    #[test]
    fn test_from_yaml() {
        let config = from_yaml(YAML).unwrap();

        assert_eq!(config.total_days, 30);
        assert_eq!(config.num_simulations, 500);
        assert_eq!(config.usage_rate, 0.25);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.devices[0].name, "Pod");
        assert_eq!(config.devices[1].initial_cost, 0.0);
    }

    #[test]
    fn test_load_file_with_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::parse_from(["vapecost", "--config", &path, "--days", "90", "-r", "0.5"]);
        let config = resolve(&args).unwrap();

        assert_eq!(config.total_days, 90);
        assert_eq!(config.num_simulations, 500);
        assert_eq!(config.usage_rate, 0.5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.devices[0].name, "Pod");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(load_file(&missing).is_err());
    }

    #[test]
    fn test_defaults_without_file() {
        let args = Args::parse_from(["vapecost", "--seed", "3"]);
        let config = resolve(&args).unwrap();

        assert_eq!(config.devices, stock_devices());
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_empty_device_list_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"total_days: 10\n").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::parse_from(["vapecost", "-c", &path]);
        let config = resolve(&args).unwrap();

        assert_eq!(config.total_days, 10);
        assert_eq!(config.devices.len(), 3);
    }
}
