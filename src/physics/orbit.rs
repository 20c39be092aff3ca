use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::control::parameters::OrbitParameters;

// orbital plane is horizontal, hence x/z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPosition {
    pub x: f64,
    pub z: f64,
}

pub fn elliptical_position(
    semi_major_axis: f64,
    semi_minor_axis: f64,
    angular_speed: f64,
    elapsed_time: f64,
) -> OrbitPosition {
    let angle = angular_speed * elapsed_time;
    OrbitPosition {
        x: semi_major_axis * angle.cos(),
        z: semi_minor_axis * angle.sin(),
    }
}

pub fn orbit_period(angular_speed: f64) -> f64 {
    TAU / angular_speed
}

/// `segments + 1` points; the last repeats the first.
pub fn orbit_outline(params: &OrbitParameters, segments: usize) -> Vec<OrbitPosition> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * TAU;
            OrbitPosition {
                x: params.semi_major_axis * angle.cos(),
                z: params.semi_minor_axis * angle.sin(),
            }
        })
        .collect()
}

/// Elapsed time only grows by deltas fed in while unpaused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    pub elapsed: f64,
    pub spin_angle: f64,
    pub is_paused: bool,
}

impl OrbitState {
    pub fn new() -> Self {
        OrbitState::default()
    }

    pub fn advance(&mut self, delta_seconds: f64, spin_rate: f64) {
        if self.is_paused || delta_seconds <= 0.0 {
            return;
        }
        self.elapsed += delta_seconds;
        self.spin_angle += spin_rate * delta_seconds;
        debug_assert!(
            self.elapsed.is_finite() && self.spin_angle.is_finite(),
            "non-finite orbit state"
        );
    }

    pub fn pause(&mut self) {
        if !self.is_paused {
            debug!(elapsed = self.elapsed, "orbit paused");
            self.is_paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.is_paused {
            debug!(elapsed = self.elapsed, "orbit resumed");
            self.is_paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.is_paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn reset(&mut self) {
        *self = OrbitState {
            is_paused: self.is_paused,
            ..OrbitState::default()
        };
    }

    pub fn position(&self, params: &OrbitParameters) -> OrbitPosition {
        elliptical_position(
            params.semi_major_axis,
            params.semi_minor_axis,
            params.angular_speed,
            self.elapsed,
        )
    }

    pub fn revolutions(&self, params: &OrbitParameters) -> u64 {
        (self.elapsed / orbit_period(params.angular_speed)).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_at_quarter_turns() {
        let start = elliptical_position(18.0, 12.0, 0.5, 0.0);
        assert_eq!(start, OrbitPosition { x: 18.0, z: 0.0 });

        let quarter = elliptical_position(18.0, 12.0, 0.5, orbit_period(0.5) / 4.0);
        assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(quarter.z, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_period() {
        assert_relative_eq!(orbit_period(0.5), 4.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_pause_freezes_elapsed_time() {
        let mut state = OrbitState::new();
        state.advance(2.0, 1.2);
        state.pause();
        state.advance(30.0, 1.2);
        assert_eq!(state.elapsed, 2.0);
        assert_relative_eq!(state.spin_angle, 2.4);

        state.resume();
        state.advance(0.5, 1.2);
        assert_eq!(state.elapsed, 2.5);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = OrbitState::new();
        state.toggle_pause();
        assert!(state.is_paused);
        state.toggle_pause();
        assert!(!state.is_paused);
    }

    #[test]
    fn test_reset_keeps_pause_flag() {
        let mut state = OrbitState::new();
        state.advance(3.0, 1.0);
        state.pause();
        state.reset();
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.spin_angle, 0.0);
        assert!(state.is_paused);
    }

    #[test]
    fn test_revolutions() {
        let params = OrbitParameters::default();
        let mut state = OrbitState::new();
        state.advance(orbit_period(params.angular_speed) * 2.5, 0.0);
        assert_eq!(state.revolutions(&params), 2);
    }

    #[test]
    fn test_outline_is_closed() {
        let outline = orbit_outline(&OrbitParameters::default(), 64);
        assert_eq!(outline.len(), 65);
        let first = outline[0];
        let last = outline[64];
        assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(first.z, last.z, epsilon = 1e-9);
    }
}
