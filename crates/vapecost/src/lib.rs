//! Command-line front end for the consumable cost simulator
//!
//! Loads a device comparison from YAML or command-line flags, runs the
//! Monte Carlo simulation from `vapecost_core`, and renders the per-day
//! mean and 5th/95th percentile curves as a text table or JSON.

pub mod app;
pub mod args;
pub mod config_file;
pub mod logging;
pub mod sinks;

pub use app::run;
pub use args::{Args, OutputFormat};
pub use logging::init_logging;
