use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{control::parameters::ProjectileParameters, errors::SimulationError};

use super::kinematics::{FlightMetrics, Kinematics};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time_seconds: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    metrics: FlightMetrics,
}

impl Trajectory {
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn metrics(&self) -> FlightMetrics {
        self.metrics
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn visible_prefix(&self, simulation_time: f64) -> &[TrajectorySample] {
        let time_of_flight = self.metrics.time_of_flight;
        if time_of_flight <= 0.0 || simulation_time <= 0.0 {
            return &[];
        }
        let fraction = simulation_time / time_of_flight;
        let count = (fraction * self.samples.len() as f64).floor() as usize;
        &self.samples[..count.min(self.samples.len())]
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }
}

/// `step_count + 1` instants over `[0, time_of_flight]`; samples below ground
/// are dropped.
pub fn sample_trajectory(params: &ProjectileParameters, step_count: usize) -> Trajectory {
    let step_count = step_count.max(1);
    let kinematics = Kinematics::new(params);
    let time_of_flight = kinematics.time_of_flight();

    let samples: Vec<TrajectorySample> = (0..=step_count)
        .map(|i| {
            let t = (i as f64 / step_count as f64) * time_of_flight;
            let position = kinematics.position_at(t);
            TrajectorySample {
                time_seconds: t,
                x: position.x,
                y: position.y,
            }
        })
        .filter(|sample| sample.y >= 0.0)
        .collect();

    debug_assert!(
        samples
            .iter()
            .all(|s| s.time_seconds.is_finite() && s.x.is_finite() && s.y.is_finite()),
        "non-finite trajectory sample for {:?}",
        params
    );
    trace!(
        steps = step_count,
        kept = samples.len(),
        time_of_flight,
        "trajectory sampled"
    );

    Trajectory {
        samples,
        metrics: kinematics.metrics,
    }
}

pub fn try_sample_trajectory(
    params: &ProjectileParameters,
    step_count: usize,
) -> Result<Trajectory, SimulationError> {
    if step_count == 0 {
        return Err(SimulationError::InvalidStepCount(step_count));
    }
    Ok(sample_trajectory(params, step_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(speed: f64, angle: f64, height: f64) -> ProjectileParameters {
        ProjectileParameters::try_new(speed, angle, height, 9.8).unwrap()
    }

    #[test]
    fn test_sample_count_for_level_launch() {
        let trajectory = sample_trajectory(&params(20.0, 45.0, 0.0), 100);
        // the final sample can dip a hair below zero and be dropped
        assert!(trajectory.len() == 101 || trajectory.len() == 100);
        assert_eq!(trajectory.samples()[0].time_seconds, 0.0);
        assert_eq!(trajectory.samples()[0].x, 0.0);
    }

    #[test]
    fn test_samples_stay_above_ground_and_in_order() {
        let trajectory = sample_trajectory(&params(37.0, 71.0, 12.5), 150);
        let tof = trajectory.metrics().time_of_flight;

        for pair in trajectory.samples().windows(2) {
            assert!(pair[0].time_seconds <= pair[1].time_seconds);
        }
        for sample in trajectory.samples() {
            assert!(sample.y >= 0.0);
            assert!(sample.time_seconds <= tof);
        }
    }

    #[test]
    fn test_deterministic_output() {
        let a = sample_trajectory(&params(23.0, 33.0, 4.0), 200);
        let b = sample_trajectory(&params(23.0, 33.0, 4.0), 200);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_step_has_endpoints() {
        let trajectory = sample_trajectory(&params(10.0, 90.0, 5.0), 1);
        assert_eq!(trajectory.len(), 2);
        let last = trajectory.last().unwrap();
        assert_abs_diff_eq!(last.time_seconds, trajectory.metrics().time_of_flight);
        assert_abs_diff_eq!(last.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_launch_collapses_to_launch_point() {
        let trajectory = sample_trajectory(&params(20.0, 0.0, 0.0), 10);
        assert_eq!(trajectory.len(), 11);
        assert!(trajectory.samples().iter().all(|s| s.x == 0.0 && s.y == 0.0));
    }

    #[test]
    fn test_zero_step_count_is_rejected() {
        assert_eq!(
            try_sample_trajectory(&params(20.0, 45.0, 0.0), 0),
            Err(SimulationError::InvalidStepCount(0))
        );
    }

    #[test]
    fn test_visible_prefix_grows_with_time() {
        let trajectory = sample_trajectory(&params(20.0, 45.0, 0.0), 100);
        let tof = trajectory.metrics().time_of_flight;

        assert!(trajectory.visible_prefix(0.0).is_empty());
        let half = trajectory.visible_prefix(tof / 2.0).len();
        assert!(half > 40 && half < 60, "half-way prefix was {}", half);
        assert_eq!(trajectory.visible_prefix(tof * 3.0).len(), trajectory.len());
    }
}
