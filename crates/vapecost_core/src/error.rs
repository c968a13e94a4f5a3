use std::fmt;

/// Errors raised for malformed or out-of-range simulation inputs
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    InvalidArgument {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl SimulationError {
    pub(crate) fn invalid(
        parameter: &'static str,
        value: impl fmt::Display,
        reason: &'static str,
    ) -> Self {
        SimulationError::InvalidArgument {
            parameter,
            value: value.to_string(),
            reason,
        }
    }

    /// Name of the offending parameter
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            SimulationError::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidArgument {
                parameter,
                value,
                reason,
            } => write!(f, "invalid argument {parameter}={value}: {reason}"),
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
