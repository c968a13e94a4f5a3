use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How summary curves are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table, one block per device
    Table,
    /// A single JSON document with every curve
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vapecost")]
#[command(about = "Monte Carlo estimate of what a consumable device costs over time")]
pub struct Args {
    /// YAML file with horizon, simulation count and devices (default: built-in devices)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of days to simulate
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Number of simulated paths per device
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub simulations: Option<i64>,

    /// Mean usage-units consumed per day
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub usage_rate: Option<f64>,

    /// Master seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print every k-th day in table output (the final day is always printed)
    #[arg(short, long, default_value_t = 10)]
    pub every: usize,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}
