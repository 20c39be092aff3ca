use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    #[error("Config error: {0}")]
    Config(String),
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Config(err.to_string())
    }
}
