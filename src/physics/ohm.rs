use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    constants::{
        CHARGE_FLOW_RATE, CHARGE_MARKERS_PER_AMP, CIRCUIT_HEIGHT_FRACTION, CIRCUIT_MAX_HEIGHT,
        CIRCUIT_MAX_WIDTH, CIRCUIT_WIDTH_FRACTION, GLOW_PER_AMP, INDICATOR_BASE_INTENSITY,
        INDICATOR_IDLE_INTENSITY, INDICATOR_MAX_INTENSITY, MAX_CHARGE_MARKERS,
        MIN_CHARGE_MARKERS, WIRE_MAX_GLOW,
    },
    control::parameters::OhmCircuitParameters,
    utils::vector2d::Vector2D,
};

/// `I = V / R`, or zero when the resistance is not positive.
pub fn ohm_current(voltage: f64, resistance: f64) -> f64 {
    if resistance > 0.0 {
        voltage / resistance
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmReading {
    pub current_amps: f64,
    pub current_milliamps: f64,
}

impl OhmReading {
    pub fn from_parameters(params: &OhmCircuitParameters) -> Self {
        let current_amps = ohm_current(params.voltage, params.resistance);
        debug_assert!(current_amps.is_finite(), "non-finite current for {:?}", params);
        OhmReading {
            current_amps,
            current_milliamps: current_amps * 1000.0,
        }
    }
}

pub fn indicator_intensity(current: f64, active: bool) -> f64 {
    if active && current > 0.0 {
        (INDICATOR_BASE_INTENSITY + current * GLOW_PER_AMP).min(INDICATOR_MAX_INTENSITY)
    } else {
        INDICATOR_IDLE_INTENSITY
    }
}

pub fn wire_glow(current: f64, active: bool) -> f64 {
    if active {
        (current * GLOW_PER_AMP).min(WIRE_MAX_GLOW)
    } else {
        0.0
    }
}

pub fn charge_marker_count(current: f64) -> usize {
    let wanted = (current.max(0.0) * CHARGE_MARKERS_PER_AMP).floor() as usize;
    wanted.clamp(MIN_CHARGE_MARKERS, MAX_CHARGE_MARKERS)
}

/// Phase only advances while the circuit is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeFlow {
    phase: f64,
    /// +1 for conventional current direction, -1 for electron flow.
    pub direction: f64,
}

impl Default for ChargeFlow {
    fn default() -> Self {
        ChargeFlow {
            phase: 0.0,
            direction: 1.0,
        }
    }
}

impl ChargeFlow {
    pub fn advance(&mut self, delta_seconds: f64, current: f64, active: bool) {
        if !active {
            return;
        }
        self.phase = (self.phase + delta_seconds * current * CHARGE_FLOW_RATE * self.direction)
            .rem_euclid(1.0);
        trace!(phase = self.phase, "charge flow advanced");
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn marker_parameters(&self, current: f64) -> Vec<f64> {
        let count = charge_marker_count(current);
        (0..count)
            .map(|i| (self.phase + i as f64 / count as f64).rem_euclid(1.0))
            .collect()
    }
}

// walked clockwise from the top left corner, canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectLoop {
    pub center: Vector2D,
    pub width: f64,
    pub height: f64,
}

impl RectLoop {
    pub fn new(center: Vector2D, width: f64, height: f64) -> Self {
        RectLoop {
            center,
            width,
            height,
        }
    }

    /// Loop centred on a `width` x `height` canvas, capped at 400 x 200 px.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        RectLoop {
            center: Vector2D::new(width / 2.0, height / 2.0),
            width: (width * CIRCUIT_WIDTH_FRACTION).min(CIRCUIT_MAX_WIDTH),
            height: (height * CIRCUIT_HEIGHT_FRACTION).min(CIRCUIT_MAX_HEIGHT),
        }
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    // t wraps into [0, 1)
    pub fn point_at(&self, t: f64) -> Vector2D {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let top_left = self.center + Vector2D::new(-half_w, -half_h);
        let top_right = self.center + Vector2D::new(half_w, -half_h);
        let bottom_right = self.center + Vector2D::new(half_w, half_h);
        let bottom_left = self.center + Vector2D::new(-half_w, half_h);

        let mut distance = t.rem_euclid(1.0) * self.perimeter();
        let edges = [
            (top_left, top_right, self.width),
            (top_right, bottom_right, self.height),
            (bottom_right, bottom_left, self.width),
            (bottom_left, top_left, self.height),
        ];
        for (from, to, length) in edges {
            if distance < length {
                return from.lerp(to, distance / length);
            }
            distance -= length;
        }
        top_left
    }
}
