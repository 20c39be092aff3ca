pub mod constants;
pub mod control;
pub mod errors;
pub mod physics;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::animation_clock::{AnimationClock, ClockPhase, FrameScheduler, FrameTicket};
pub use control::config::SimulationConfig;
pub use control::experiment::{OhmExperiment, OrbitExperiment, ProjectileExperiment};
pub use control::parameters::{OhmCircuitParameters, OrbitParameters, ProjectileParameters};
pub use errors::SimulationError;

// Re-export the closed-form physics
pub use physics::ohm::{ohm_current, OhmReading};
pub use physics::orbit::{elliptical_position, orbit_period, OrbitPosition, OrbitState};
pub use trajectory_system::kinematics::{
    max_height, position_at_time, projectile_velocity_components, range, time_of_flight,
    velocity_at_time, FlightMetrics, Kinematics, LaunchVelocity,
};
pub use trajectory_system::sampler::{sample_trajectory, Trajectory, TrajectorySample};

// Re-export what renderers consume
pub use telemetry_system::publisher::SnapshotPublisher;
pub use telemetry_system::snapshot::{CircuitSnapshot, OrbitSnapshot, ProjectileSnapshot};
pub use telemetry_system::telemetry::Telemetry;

pub use utils::vector2d::Vector2D;
