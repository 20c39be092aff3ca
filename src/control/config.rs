use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRACE_MARGIN, DEFAULT_SPIN_RATE, DEFAULT_TIME_SCALE, DEFAULT_TRAJECTORY_STEPS,
    IMPACT_PARTICLE_COUNT, MAX_TRAJECTORY_STEPS,
};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated seconds per wall-clock second.
    pub time_scale: f64,
    pub grace_margin_seconds: f64,
    pub trajectory_steps: usize,
    /// Spin-in-place rate of an orbiting body, rad/s.
    pub orbit_spin_rate: f64,
    pub impact_particle_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_scale: DEFAULT_TIME_SCALE,
            grace_margin_seconds: DEFAULT_GRACE_MARGIN,
            trajectory_steps: DEFAULT_TRAJECTORY_STEPS,
            orbit_spin_rate: DEFAULT_SPIN_RATE,
            impact_particle_count: IMPACT_PARTICLE_COUNT,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(SimulationError::Config(format!(
                "time_scale must be positive, got {}",
                self.time_scale
            )));
        }
        if !(self.grace_margin_seconds.is_finite() && self.grace_margin_seconds >= 0.0) {
            return Err(SimulationError::Config(format!(
                "grace_margin_seconds must not be negative, got {}",
                self.grace_margin_seconds
            )));
        }
        if self.trajectory_steps == 0 {
            return Err(SimulationError::InvalidStepCount(self.trajectory_steps));
        }
        if self.trajectory_steps > MAX_TRAJECTORY_STEPS {
            return Err(SimulationError::Config(format!(
                "trajectory_steps must be at most {}, got {}",
                MAX_TRAJECTORY_STEPS, self.trajectory_steps
            )));
        }
        if !self.orbit_spin_rate.is_finite() {
            return Err(SimulationError::Config(
                "orbit_spin_rate must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.time_scale, 2.0);
        assert_eq!(config.grace_margin_seconds, 0.5);
        assert_eq!(config.trajectory_steps, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(r#"{ "time_scale": 1.0 }"#).unwrap();
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.grace_margin_seconds, 0.5);
        assert_eq!(config.trajectory_steps, 100);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SimulationConfig::from_json(r#"{ "time_scale": 0.0 }"#).is_err());
        assert!(SimulationConfig::from_json(r#"{ "grace_margin_seconds": -1.0 }"#).is_err());
        assert_eq!(
            SimulationConfig::from_json(r#"{ "trajectory_steps": 0 }"#),
            Err(SimulationError::InvalidStepCount(0))
        );
        assert!(SimulationConfig::from_json(r#"{ "trajectory_steps": 500 }"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SimulationConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimulationError::Config(_)));
    }
}
