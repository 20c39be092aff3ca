use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    DEFAULT_ANGULAR_SPEED, DEFAULT_LAUNCH_ANGLE, DEFAULT_LAUNCH_HEIGHT, DEFAULT_LAUNCH_SPEED,
    DEFAULT_RESISTANCE, DEFAULT_SEMI_MAJOR_AXIS, DEFAULT_SEMI_MINOR_AXIS, DEFAULT_VOLTAGE,
    LAUNCH_ANGLE_RANGE, LAUNCH_HEIGHT_RANGE, LAUNCH_SPEED_RANGE, RESISTANCE_RANGE,
    STANDARD_GRAVITY, VOLTAGE_RANGE,
};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmCircuitParameters {
    pub voltage: f64,
    pub resistance: f64,
}

impl OhmCircuitParameters {
    pub fn try_new(voltage: f64, resistance: f64) -> Result<Self, SimulationError> {
        require_positive("voltage", voltage)?;
        require_positive("resistance", resistance)?;
        Ok(OhmCircuitParameters {
            voltage,
            resistance,
        })
    }

    pub fn clamped(voltage: f64, resistance: f64) -> Self {
        OhmCircuitParameters {
            voltage: clamp_to("voltage", voltage, VOLTAGE_RANGE),
            resistance: clamp_to("resistance", resistance, RESISTANCE_RANGE),
        }
    }
}

impl Default for OhmCircuitParameters {
    fn default() -> Self {
        OhmCircuitParameters {
            voltage: DEFAULT_VOLTAGE,
            resistance: DEFAULT_RESISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileParameters {
    pub initial_speed: f64, // m/s
    pub launch_angle_degrees: f64,
    pub initial_height: f64, // m
    pub gravity: f64,        // m/s²
}

impl ProjectileParameters {
    pub fn try_new(
        initial_speed: f64,
        launch_angle_degrees: f64,
        initial_height: f64,
        gravity: f64,
    ) -> Result<Self, SimulationError> {
        require_non_negative("initial_speed", initial_speed)?;
        require_finite("launch_angle_degrees", launch_angle_degrees)?;
        if !(0.0..=90.0).contains(&launch_angle_degrees) {
            return Err(SimulationError::invalid(
                "launch_angle_degrees",
                launch_angle_degrees,
                "must lie within [0, 90] degrees",
            ));
        }
        require_non_negative("initial_height", initial_height)?;
        require_positive("gravity", gravity)?;

        Ok(ProjectileParameters {
            initial_speed,
            launch_angle_degrees,
            initial_height,
            gravity,
        })
    }

    /// Non-positive gravity falls back to standard gravity.
    pub fn clamped(
        initial_speed: f64,
        launch_angle_degrees: f64,
        initial_height: f64,
        gravity: f64,
    ) -> Self {
        let gravity = if gravity.is_finite() && gravity > 0.0 {
            gravity
        } else {
            warn!(gravity, "non-positive gravity replaced with standard gravity");
            STANDARD_GRAVITY
        };

        ProjectileParameters {
            initial_speed: clamp_to("initial_speed", initial_speed, LAUNCH_SPEED_RANGE),
            launch_angle_degrees: clamp_to(
                "launch_angle_degrees",
                launch_angle_degrees,
                LAUNCH_ANGLE_RANGE,
            ),
            initial_height: clamp_to("initial_height", initial_height, LAUNCH_HEIGHT_RANGE),
            gravity,
        }
    }
}

impl Default for ProjectileParameters {
    fn default() -> Self {
        ProjectileParameters {
            initial_speed: DEFAULT_LAUNCH_SPEED,
            launch_angle_degrees: DEFAULT_LAUNCH_ANGLE,
            initial_height: DEFAULT_LAUNCH_HEIGHT,
            gravity: STANDARD_GRAVITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParameters {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    pub angular_speed: f64, // rad/s
}

impl OrbitParameters {
    pub fn try_new(
        semi_major_axis: f64,
        semi_minor_axis: f64,
        angular_speed: f64,
    ) -> Result<Self, SimulationError> {
        require_positive("semi_major_axis", semi_major_axis)?;
        require_positive("semi_minor_axis", semi_minor_axis)?;
        require_positive("angular_speed", angular_speed)?;
        Ok(OrbitParameters {
            semi_major_axis,
            semi_minor_axis,
            angular_speed,
        })
    }
}

impl Default for OrbitParameters {
    fn default() -> Self {
        OrbitParameters {
            semi_major_axis: DEFAULT_SEMI_MAJOR_AXIS,
            semi_minor_axis: DEFAULT_SEMI_MINOR_AXIS,
            angular_speed: DEFAULT_ANGULAR_SPEED,
        }
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::invalid(name, value, "must be finite"))
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(name, value, "must be strictly positive"))
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), SimulationError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(name, value, "must not be negative"))
    }
}

fn clamp_to(name: &'static str, value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_nan() {
        warn!(parameter = name, "NaN input replaced with range minimum");
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(parameter = name, value, clamped, "input clamped to slider range");
    }
    clamped
}
