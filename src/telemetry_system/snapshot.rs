use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    control::{
        animation_clock::ClockPhase,
        parameters::{OhmCircuitParameters, OrbitParameters},
    },
    physics::{
        ohm::{OhmReading, RectLoop},
        orbit::OrbitPosition,
    },
    trajectory_system::{
        kinematics::FlightMetrics,
        sampler::{Trajectory, TrajectorySample},
    },
    utils::vector2d::Vector2D,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSnapshot {
    pub phase: ClockPhase,
    pub simulation_time: f64,
    pub position: Option<Vector2D>,
    pub velocity: Option<Vector2D>,
    pub trajectory: Arc<Trajectory>,
    pub visible_samples: usize,
    pub metrics: FlightMetrics,
    pub impact: bool,
}

impl ProjectileSnapshot {
    pub fn trail(&self) -> &[TrajectorySample] {
        let samples = self.trajectory.samples();
        &samples[..self.visible_samples.min(samples.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSnapshot {
    pub parameters: OhmCircuitParameters,
    pub reading: OhmReading,
    pub active: bool,
    pub layout: RectLoop,
    /// Loop parameters in `[0, 1)`; empty when the circuit is off.
    pub markers: Vec<f64>,
    pub marker_points: Vec<Vector2D>,
    pub indicator_intensity: f64,
    pub wire_glow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSnapshot {
    pub parameters: OrbitParameters,
    pub position: OrbitPosition,
    pub outline: Arc<Vec<OrbitPosition>>,
    pub axial_tilt_degrees: f64,
    pub spin_angle: f64,
    pub elapsed: f64,
    pub period: f64,
    pub is_paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        control::parameters::ProjectileParameters, trajectory_system::sampler::sample_trajectory,
    };

    #[test]
    fn test_trail_clamps_to_trajectory_length() {
        let trajectory = Arc::new(sample_trajectory(&ProjectileParameters::default(), 10));
        let snapshot = ProjectileSnapshot {
            phase: ClockPhase::Running,
            simulation_time: 1.0,
            position: None,
            velocity: None,
            metrics: trajectory.metrics(),
            visible_samples: trajectory.len() + 50,
            trajectory,
            impact: false,
        };

        assert_eq!(snapshot.trail().len(), snapshot.trajectory.len());
    }
}
