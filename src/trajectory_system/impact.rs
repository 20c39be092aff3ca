use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        IMPACT_BASE_DISTANCE, IMPACT_DISTANCE_SPREAD, IMPACT_HEIGHT_THRESHOLD, IMPACT_HUE_SPREAD,
        IMPACT_TIME_WINDOW,
    },
    utils::vector2d::Vector2D,
};

pub fn is_impact(simulation_time: f64, time_of_flight: f64, height: f64) -> bool {
    (simulation_time - time_of_flight).abs() < IMPACT_TIME_WINDOW
        && height <= IMPACT_HEIGHT_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstParticle {
    /// px from the impact point
    pub offset: Vector2D,
    pub hue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactBurst {
    pub particles: Vec<BurstParticle>,
}

impl ImpactBurst {
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count)
            .map(|i| {
                let angle = (i as f64 / count as f64) * TAU;
                let distance = IMPACT_BASE_DISTANCE + rng.gen::<f64>() * IMPACT_DISTANCE_SPREAD;
                BurstParticle {
                    offset: Vector2D::from_angle(angle) * distance,
                    hue: rng.gen::<f64>() * IMPACT_HUE_SPREAD,
                }
            })
            .collect();

        ImpactBurst { particles }
    }
}
