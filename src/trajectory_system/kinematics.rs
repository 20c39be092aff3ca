use serde::{Deserialize, Serialize};

use crate::{control::parameters::ProjectileParameters, utils::vector2d::Vector2D};

/// Horizontal and vertical launch velocity components, m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchVelocity {
    pub vx: f64,
    pub vy: f64,
}

// the only degrees-to-radians conversion
pub fn projectile_velocity_components(speed: f64, angle_degrees: f64) -> LaunchVelocity {
    let angle_rad = angle_degrees.to_radians();
    LaunchVelocity {
        vx: speed * angle_rad.cos(),
        vy: speed * angle_rad.sin(),
    }
}

/// Level-ground flight time; launch height is ignored.
pub fn time_of_flight(vy: f64, gravity: f64) -> f64 {
    2.0 * vy / gravity
}

pub fn max_height(initial_height: f64, vy: f64, gravity: f64) -> f64 {
    initial_height + vy * vy / (2.0 * gravity)
}

pub fn range(vx: f64, time_of_flight: f64) -> f64 {
    vx * time_of_flight
}

pub fn position_at_time(initial_height: f64, vx: f64, vy: f64, gravity: f64, t: f64) -> Vector2D {
    Vector2D::new(vx * t, initial_height + vy * t - 0.5 * gravity * t * t)
}

pub fn velocity_at_time(vx: f64, vy: f64, gravity: f64, t: f64) -> Vector2D {
    Vector2D::new(vx, vy - gravity * t)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightMetrics {
    pub time_of_flight: f64,
    pub range: f64,
    pub max_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub velocity: LaunchVelocity,
    pub initial_height: f64,
    pub gravity: f64,
    pub metrics: FlightMetrics,
}

impl Kinematics {
    pub fn new(params: &ProjectileParameters) -> Self {
        let velocity =
            projectile_velocity_components(params.initial_speed, params.launch_angle_degrees);
        let flight_time = time_of_flight(velocity.vy, params.gravity);
        let metrics = FlightMetrics {
            time_of_flight: flight_time,
            range: range(velocity.vx, flight_time),
            max_height: max_height(params.initial_height, velocity.vy, params.gravity),
        };

        debug_assert!(
            metrics.time_of_flight.is_finite()
                && metrics.range.is_finite()
                && metrics.max_height.is_finite(),
            "non-finite flight metrics for {:?}",
            params
        );

        Kinematics {
            velocity,
            initial_height: params.initial_height,
            gravity: params.gravity,
            metrics,
        }
    }

    pub fn position_at(&self, t: f64) -> Vector2D {
        position_at_time(
            self.initial_height,
            self.velocity.vx,
            self.velocity.vy,
            self.gravity,
            t,
        )
    }

    pub fn velocity_at(&self, t: f64) -> Vector2D {
        velocity_at_time(self.velocity.vx, self.velocity.vy, self.gravity, t)
    }

    pub fn time_of_flight(&self) -> f64 {
        self.metrics.time_of_flight
    }
}
