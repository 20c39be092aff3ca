use tracing::info;

use crate::control::animation_clock::ClockPhase;

use super::snapshot::ProjectileSnapshot;

pub struct Telemetry {
    pub log: Vec<String>,
    frames: usize,
    peak_height: f64,
    farthest_distance: f64,
    impacts: usize,
    phase_times: Vec<(ClockPhase, f64)>,
    wall_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            frames: 0,
            peak_height: 0.0,
            farthest_distance: 0.0,
            impacts: 0,
            phase_times: Vec::new(),
            wall_time: 0.0,
        }
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    pub fn collect_data(&mut self, snapshot: &ProjectileSnapshot, wall_time: f64) {
        self.wall_time = wall_time;
        self.frames += 1;

        if let Some(position) = snapshot.position {
            self.peak_height = self.peak_height.max(position.y);
            self.farthest_distance = self.farthest_distance.max(position.x);
            self.log.push(format!(
                "Wall: {} | Sim: {} | Position: x = {:.2} m, y = {:.2} m",
                Self::format_time(wall_time),
                Self::format_time(snapshot.simulation_time),
                position.x,
                position.y
            ));
        }
        if snapshot.impact {
            self.impacts += 1;
        }

        let changed = self
            .phase_times
            .last()
            .map_or(true, |(last_phase, _)| *last_phase != snapshot.phase);
        if changed {
            self.phase_times.push((snapshot.phase, wall_time));
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn peak_height(&self) -> f64 {
        self.peak_height
    }

    pub fn farthest_distance(&self) -> f64 {
        self.farthest_distance
    }

    pub fn impact_frames(&self) -> usize {
        self.impacts
    }

    pub fn phase_transitions(&self) -> &[(ClockPhase, f64)] {
        &self.phase_times
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Frames: {}", self.frames),
            format!("Peak Height: {}", Self::format_distance(self.peak_height)),
            format!(
                "Farthest Distance: {}",
                Self::format_distance(self.farthest_distance)
            ),
            format!("Impact Frames: {}", self.impacts),
            format!("Wall Time: {}", Self::format_time(self.wall_time)),
        ];
        for (phase, time) in &self.phase_times {
            lines.push(format!(
                "Phase {:?} reached at: {}",
                phase,
                Self::format_time(*time)
            ));
        }
        lines.join("\n")
    }

    pub fn display_data(&self) {
        for entry in &self.log {
            info!("{}", entry);
        }
        for line in self.summary().lines() {
            info!("{}", line);
        }
    }
}
