// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.8; // m/s²

// Animation pacing (tuned for visuals, not physics)
pub const DEFAULT_TIME_SCALE: f64 = 2.0; // simulated seconds per wall-clock second
pub const DEFAULT_GRACE_MARGIN: f64 = 0.5; // s past time of flight before auto-stop
pub const DEFAULT_TRAJECTORY_STEPS: usize = 100;
pub const MAX_TRAJECTORY_STEPS: usize = 200;

// Projectile defaults and slider ranges
pub const DEFAULT_LAUNCH_SPEED: f64 = 20.0; // m/s
pub const DEFAULT_LAUNCH_ANGLE: f64 = 45.0; // degrees
pub const DEFAULT_LAUNCH_HEIGHT: f64 = 0.0; // m
pub const LAUNCH_SPEED_RANGE: (f64, f64) = (5.0, 50.0);
pub const LAUNCH_ANGLE_RANGE: (f64, f64) = (0.0, 90.0);
pub const LAUNCH_HEIGHT_RANGE: (f64, f64) = (0.0, 20.0);

// Impact effect
pub const IMPACT_TIME_WINDOW: f64 = 0.1; // s
pub const IMPACT_HEIGHT_THRESHOLD: f64 = 0.1; // m
pub const IMPACT_PARTICLE_COUNT: usize = 20;
pub const IMPACT_BASE_DISTANCE: f64 = 30.0; // px
pub const IMPACT_DISTANCE_SPREAD: f64 = 20.0; // px
pub const IMPACT_HUE_SPREAD: f64 = 60.0; // degrees of hue

// Ohm's law circuit defaults and slider ranges
pub const DEFAULT_VOLTAGE: f64 = 5.0; // V
pub const DEFAULT_RESISTANCE: f64 = 100.0; // Ω
pub const VOLTAGE_RANGE: (f64, f64) = (1.0, 12.0);
pub const RESISTANCE_RANGE: (f64, f64) = (10.0, 500.0);

// Charge flow animation
pub const CHARGE_MARKERS_PER_AMP: f64 = 200.0;
pub const MIN_CHARGE_MARKERS: usize = 8;
pub const MAX_CHARGE_MARKERS: usize = 20;
pub const CHARGE_FLOW_RATE: f64 = 0.5; // loop fractions per second per amp
pub const INDICATOR_IDLE_INTENSITY: f64 = 0.1;
pub const INDICATOR_BASE_INTENSITY: f64 = 0.5;
pub const INDICATOR_MAX_INTENSITY: f64 = 2.0;
pub const WIRE_MAX_GLOW: f64 = 1.5;
pub const GLOW_PER_AMP: f64 = 15.0;

// Circuit layout on the host canvas
pub const DEFAULT_CANVAS_SIZE: (f64, f64) = (800.0, 400.0); // px
pub const CIRCUIT_WIDTH_FRACTION: f64 = 0.7;
pub const CIRCUIT_HEIGHT_FRACTION: f64 = 0.5;
pub const CIRCUIT_MAX_WIDTH: f64 = 400.0; // px
pub const CIRCUIT_MAX_HEIGHT: f64 = 200.0; // px

// Orbit demo (Earth around the Sun)
pub const DEFAULT_SEMI_MAJOR_AXIS: f64 = 18.0;
pub const DEFAULT_SEMI_MINOR_AXIS: f64 = 12.0;
pub const DEFAULT_ANGULAR_SPEED: f64 = 0.5; // rad/s
pub const DEFAULT_SPIN_RATE: f64 = 1.2; // rad/s (0.02 rad per frame at 60 fps)
pub const EARTH_AXIAL_TILT: f64 = 23.5; // degrees
pub const ORBIT_OUTLINE_SEGMENTS: usize = 100;
