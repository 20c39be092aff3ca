use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::SimulationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockPhase {
    Idle,
    Running,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationClock {
    Idle,
    Running {
        /// Host timestamp of the launch, seconds.
        start_wall_clock: f64,
        simulation_time: f64,
    },
    Completed,
}

impl Default for AnimationClock {
    fn default() -> Self {
        AnimationClock::Idle
    }
}

impl AnimationClock {
    /// A clock that is already running keeps its original start time.
    pub fn launch(self, now: f64) -> Self {
        match self {
            AnimationClock::Idle | AnimationClock::Completed => {
                debug!(start_wall_clock = now, "clock launched");
                AnimationClock::Running {
                    start_wall_clock: now,
                    simulation_time: 0.0,
                }
            }
            running @ AnimationClock::Running { .. } => running,
        }
    }

    pub fn tick(self, now: f64, time_of_flight: f64, config: &SimulationConfig) -> Self {
        let AnimationClock::Running {
            start_wall_clock, ..
        } = self
        else {
            return self;
        };

        let elapsed = (now - start_wall_clock).max(0.0);
        let simulation_time = elapsed * config.time_scale;
        debug_assert!(simulation_time.is_finite(), "non-finite simulation time");

        if simulation_time > time_of_flight + config.grace_margin_seconds {
            debug!(simulation_time, time_of_flight, "run completed");
            return AnimationClock::Completed;
        }

        trace!(simulation_time, "clock tick");
        AnimationClock::Running {
            start_wall_clock,
            simulation_time,
        }
    }

    pub fn pause(self) -> Self {
        self.reset()
    }

    pub fn reset(self) -> Self {
        if self != AnimationClock::Idle {
            debug!(from = ?self.phase(), "clock reset");
        }
        AnimationClock::Idle
    }

    pub fn toggle(self, now: f64) -> Self {
        if self.is_running() {
            self.pause()
        } else {
            self.launch(now)
        }
    }

    pub fn phase(&self) -> ClockPhase {
        match self {
            AnimationClock::Idle => ClockPhase::Idle,
            AnimationClock::Running { .. } => ClockPhase::Running,
            AnimationClock::Completed => ClockPhase::Completed,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, AnimationClock::Running { .. })
    }

    pub fn simulation_time(&self) -> f64 {
        match self {
            AnimationClock::Running {
                simulation_time, ..
            } => *simulation_time,
            _ => 0.0,
        }
    }

    pub fn start_wall_clock(&self) -> Option<f64> {
        match self {
            AnimationClock::Running {
                start_wall_clock, ..
            } => Some(*start_wall_clock),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket {
    generation: u64,
}

/// Tracks the single outstanding frame request of a view. Only the most
/// recently issued ticket is ever accepted.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    generation: u64,
    pending: Option<u64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        FrameScheduler::default()
    }

    pub fn request_frame(&mut self) -> FrameTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        FrameTicket {
            generation: self.generation,
        }
    }

    /// Idempotent.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            trace!(generation = self.generation, "frame request cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn accept(&mut self, ticket: FrameTicket) -> bool {
        if self.pending == Some(ticket.generation) {
            self.pending = None;
            true
        } else {
            trace!(
                ticket = ticket.generation,
                current = self.generation,
                "stale frame ignored"
            );
            false
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
