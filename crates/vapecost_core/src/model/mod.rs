//! Core data types for the cost simulation

mod device;
mod results;
mod usage;

pub use device::DeviceProfile;
pub use results::{CostPath, DeviceCurve, Ensemble, SummaryCurve};
pub use usage::{
    DEFAULT_USAGE_RATE, FixedUsage, PoissonUsage, UsageModel, validate_usage_rate,
};
