use std::sync::Arc;

use tracing::debug;

use crate::{
    constants::{DEFAULT_CANVAS_SIZE, EARTH_AXIAL_TILT, ORBIT_OUTLINE_SEGMENTS},
    errors::SimulationError,
    physics::{
        ohm::{indicator_intensity, wire_glow, ChargeFlow, OhmReading, RectLoop},
        orbit::{orbit_outline, orbit_period, OrbitPosition, OrbitState},
    },
    telemetry_system::snapshot::{CircuitSnapshot, OrbitSnapshot, ProjectileSnapshot},
    trajectory_system::{
        impact::is_impact,
        kinematics::Kinematics,
        sampler::{sample_trajectory, Trajectory},
    },
};

use super::{
    animation_clock::{AnimationClock, ClockPhase, FrameScheduler, FrameTicket},
    config::SimulationConfig,
    parameters::{OhmCircuitParameters, OrbitParameters, ProjectileParameters},
};

#[derive(Debug)]
pub struct ProjectileExperiment {
    params: ProjectileParameters,
    config: SimulationConfig,
    kinematics: Kinematics,
    trajectory: Arc<Trajectory>,
    clock: AnimationClock,
    scheduler: FrameScheduler,
}

impl ProjectileExperiment {
    pub fn new(
        params: ProjectileParameters,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(ProjectileExperiment {
            kinematics: Kinematics::new(&params),
            trajectory: Arc::new(sample_trajectory(&params, config.trajectory_steps)),
            params,
            config,
            clock: AnimationClock::Idle,
            scheduler: FrameScheduler::new(),
        })
    }

    pub fn parameters(&self) -> &ProjectileParameters {
        &self.params
    }

    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Any run in flight is stopped.
    pub fn set_parameters(&mut self, params: ProjectileParameters) {
        if params == self.params {
            return;
        }
        debug!(?params, "projectile parameters changed");
        self.scheduler.cancel();
        self.clock = self.clock.reset();
        self.kinematics = Kinematics::new(&params);
        self.trajectory = Arc::new(sample_trajectory(&params, self.config.trajectory_steps));
        self.params = params;
    }

    /// The returned ticket replaces any outstanding one, so pressing Launch
    /// during a run never starts a second frame chain.
    pub fn launch(&mut self, now: f64) -> FrameTicket {
        self.clock = self.clock.launch(now);
        self.scheduler.request_frame()
    }

    pub fn toggle(&mut self, now: f64) -> Option<FrameTicket> {
        if self.clock.is_running() {
            self.reset();
            None
        } else {
            Some(self.launch(now))
        }
    }

    pub fn pause(&mut self) {
        self.scheduler.cancel();
        self.clock = self.clock.pause();
    }

    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.clock = self.clock.reset();
    }

    /// Idempotent.
    pub fn cancel(&mut self) {
        self.scheduler.cancel();
    }

    pub fn on_frame(&mut self, ticket: FrameTicket, now: f64) -> Option<FrameTicket> {
        if !self.scheduler.accept(ticket) {
            return None;
        }
        self.clock = self
            .clock
            .tick(now, self.kinematics.time_of_flight(), &self.config);
        if self.clock.is_running() {
            Some(self.scheduler.request_frame())
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> ProjectileSnapshot {
        let simulation_time = self.clock.simulation_time();
        let metrics = self.kinematics.metrics;
        let running = self.clock.phase() == ClockPhase::Running;

        let position = if running {
            Some(self.kinematics.position_at(simulation_time)).filter(|p| p.y >= 0.0)
        } else {
            None
        };
        let impact = running
            && is_impact(
                simulation_time,
                metrics.time_of_flight,
                self.kinematics.position_at(simulation_time).y,
            );

        ProjectileSnapshot {
            phase: self.clock.phase(),
            simulation_time,
            position,
            velocity: position.map(|_| self.kinematics.velocity_at(simulation_time)),
            trajectory: Arc::clone(&self.trajectory),
            visible_samples: if running {
                self.trajectory.visible_prefix(simulation_time).len()
            } else {
                0
            },
            metrics,
            impact,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OhmExperiment {
    params: OhmCircuitParameters,
    flow: ChargeFlow,
    active: bool,
    layout: RectLoop,
}

impl OhmExperiment {
    pub fn new(params: OhmCircuitParameters) -> Self {
        let (width, height) = DEFAULT_CANVAS_SIZE;
        OhmExperiment {
            params,
            flow: ChargeFlow::default(),
            active: false,
            layout: RectLoop::for_canvas(width, height),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = RectLoop::for_canvas(width, height);
    }

    pub fn layout(&self) -> &RectLoop {
        &self.layout
    }

    pub fn parameters(&self) -> &OhmCircuitParameters {
        &self.params
    }

    pub fn reading(&self) -> OhmReading {
        OhmReading::from_parameters(&self.params)
    }

    pub fn set_voltage(&mut self, voltage: f64) {
        self.params = OhmCircuitParameters::clamped(voltage, self.params.resistance);
    }

    pub fn set_resistance(&mut self, resistance: f64) {
        self.params = OhmCircuitParameters::clamped(self.params.voltage, resistance);
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
        debug!(active = self.active, "circuit switched");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Back to the reference circuit, switched off. The layout is kept.
    pub fn reset(&mut self) {
        *self = OhmExperiment {
            layout: self.layout,
            ..OhmExperiment::default()
        };
    }

    pub fn advance(&mut self, delta_seconds: f64) {
        let current = self.reading().current_amps;
        self.flow.advance(delta_seconds, current, self.active);
    }

    pub fn snapshot(&self) -> CircuitSnapshot {
        let reading = self.reading();
        let markers = if self.active {
            self.flow.marker_parameters(reading.current_amps)
        } else {
            Vec::new()
        };
        CircuitSnapshot {
            parameters: self.params,
            reading,
            active: self.active,
            layout: self.layout,
            marker_points: markers.iter().map(|&t| self.layout.point_at(t)).collect(),
            markers,
            indicator_intensity: indicator_intensity(reading.current_amps, self.active),
            wire_glow: wire_glow(reading.current_amps, self.active),
        }
    }
}

impl Default for OhmExperiment {
    fn default() -> Self {
        OhmExperiment::new(OhmCircuitParameters::default())
    }
}

#[derive(Debug, Clone)]
pub struct OrbitExperiment {
    params: OrbitParameters,
    state: OrbitState,
    spin_rate: f64,
    outline: Arc<Vec<OrbitPosition>>,
}

impl OrbitExperiment {
    pub fn new(params: OrbitParameters, config: &SimulationConfig) -> Self {
        OrbitExperiment {
            outline: Arc::new(orbit_outline(&params, ORBIT_OUTLINE_SEGMENTS)),
            params,
            state: OrbitState::new(),
            spin_rate: config.orbit_spin_rate,
        }
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn advance(&mut self, delta_seconds: f64) {
        self.state.advance(delta_seconds, self.spin_rate);
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            parameters: self.params,
            position: self.state.position(&self.params),
            outline: Arc::clone(&self.outline),
            axial_tilt_degrees: EARTH_AXIAL_TILT,
            spin_angle: self.state.spin_angle,
            elapsed: self.state.elapsed,
            period: orbit_period(self.params.angular_speed),
            is_paused: self.state.is_paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_projectile() -> ProjectileExperiment {
        ProjectileExperiment::new(
            ProjectileParameters::default(),
            SimulationConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_idle_snapshot_has_path_but_no_projectile() {
        let experiment = reference_projectile();
        let snapshot = experiment.snapshot();

        assert_eq!(snapshot.phase, ClockPhase::Idle);
        assert!(snapshot.position.is_none());
        assert!(!snapshot.trajectory.is_empty());
        assert!(snapshot.trail().is_empty());
    }

    #[test]
    fn test_frame_moves_projectile() {
        let mut experiment = reference_projectile();
        let ticket = experiment.launch(0.0);
        let next = experiment.on_frame(ticket, 0.5);

        assert!(next.is_some());
        let snapshot = experiment.snapshot();
        assert_relative_eq!(snapshot.simulation_time, 1.0);
        let position = snapshot.position.unwrap();
        assert!(position.x > 0.0 && position.y > 0.0);
        assert!(snapshot.visible_samples > 0);
    }

    #[test]
    fn test_cancelled_frame_is_ignored() {
        let mut experiment = reference_projectile();
        let ticket = experiment.launch(0.0);
        experiment.cancel();
        experiment.cancel();

        assert!(experiment.on_frame(ticket, 1.0).is_none());
        assert_eq!(experiment.clock().simulation_time(), 0.0);
    }

    #[test]
    fn test_launch_while_running_keeps_single_frame_chain() {
        let mut experiment = reference_projectile();
        let first = experiment.launch(0.0);
        let second = experiment.launch(0.05);

        assert_eq!(experiment.clock().start_wall_clock(), Some(0.0));
        assert!(experiment.on_frame(first, 0.1).is_none());

        let mut live = vec![second];
        let mut now = 0.1;
        for _ in 0..5 {
            now += 1.0 / 60.0;
            live = live
                .into_iter()
                .filter_map(|ticket| experiment.on_frame(ticket, now))
                .collect();
            assert_eq!(live.len(), 1);
        }
    }

    #[test]
    fn test_parameter_change_stops_run() {
        let mut experiment = reference_projectile();
        let ticket = experiment.launch(0.0);
        experiment.set_parameters(ProjectileParameters {
            launch_angle_degrees: 60.0,
            ..ProjectileParameters::default()
        });

        assert_eq!(experiment.clock(), AnimationClock::Idle);
        assert!(experiment.on_frame(ticket, 0.5).is_none());
        assert_eq!(experiment.parameters().launch_angle_degrees, 60.0);
    }

    #[test]
    fn test_toggle_stops_running_projectile() {
        let mut experiment = reference_projectile();
        assert!(experiment.toggle(0.0).is_some());
        assert!(experiment.toggle(0.1).is_none());
        assert_eq!(experiment.clock().phase(), ClockPhase::Idle);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut experiment = reference_projectile();
        let ticket = experiment.launch(0.0);
        experiment.on_frame(ticket, 0.25);
        assert_eq!(experiment.snapshot(), experiment.snapshot());
    }

    #[test]
    fn test_circuit_markers_only_when_active() {
        let mut circuit = OhmExperiment::default();
        assert!(circuit.snapshot().markers.is_empty());

        circuit.toggle();
        circuit.advance(0.5);
        let snapshot = circuit.snapshot();
        assert_eq!(snapshot.markers.len(), 10);
        assert_eq!(snapshot.marker_points.len(), 10);
        assert_eq!(snapshot.reading.current_amps, 0.05);
    }

    #[test]
    fn test_circuit_marker_points_follow_layout() {
        let mut circuit = OhmExperiment::default();
        circuit.resize(400.0, 300.0);
        circuit.toggle();

        let snapshot = circuit.snapshot();
        let layout = snapshot.layout;
        // the first marker sits at phase 0, the top left corner
        assert_relative_eq!(snapshot.marker_points[0].x, layout.center.x - layout.width / 2.0);
        assert_relative_eq!(snapshot.marker_points[0].y, layout.center.y - layout.height / 2.0);
        for point in &snapshot.marker_points {
            assert!((point.x - layout.center.x).abs() <= layout.width / 2.0 + 1e-9);
            assert!((point.y - layout.center.y).abs() <= layout.height / 2.0 + 1e-9);
        }

        circuit.reset();
        assert_eq!(*circuit.layout(), layout);
    }

    #[test]
    fn test_circuit_setters_clamp_and_reset_restores_reference() {
        let mut circuit = OhmExperiment::default();
        circuit.set_voltage(50.0);
        circuit.set_resistance(0.0);
        assert_eq!(circuit.parameters().voltage, 12.0);
        assert_eq!(circuit.parameters().resistance, 10.0);
        assert_relative_eq!(circuit.reading().current_amps, 1.2);

        circuit.toggle();
        circuit.reset();
        assert!(!circuit.is_active());
        assert_eq!(*circuit.parameters(), OhmCircuitParameters::default());
    }

    #[test]
    fn test_orbit_snapshot_follows_state() {
        let mut orbit =
            OrbitExperiment::new(OrbitParameters::default(), &SimulationConfig::default());
        orbit.advance(1.0);
        orbit.toggle_pause();
        orbit.advance(10.0);

        let snapshot = orbit.snapshot();
        assert!(snapshot.is_paused);
        assert_eq!(snapshot.elapsed, 1.0);
        assert_relative_eq!(snapshot.position.x, 18.0 * 0.5f64.cos());
        assert_relative_eq!(snapshot.position.z, 12.0 * 0.5f64.sin());
    }

    #[test]
    fn test_orbit_snapshot_carries_outline_and_tilt() {
        let orbit = OrbitExperiment::new(OrbitParameters::default(), &SimulationConfig::default());
        let snapshot = orbit.snapshot();

        assert_eq!(snapshot.outline.len(), ORBIT_OUTLINE_SEGMENTS + 1);
        assert_eq!(snapshot.outline[0], OrbitPosition { x: 18.0, z: 0.0 });
        assert_eq!(snapshot.axial_tilt_degrees, 23.5);
    }
}
