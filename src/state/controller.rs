//! Countdown state machine
//!
//! [`TimerController`] is the single authoritative owner of the countdown.
//! It performs no I/O and knows nothing about time; the ticking task in
//! [`crate::tasks::countdown_timer`] calls [`TimerController::tick`] once per
//! second and the app state turns the returned outcomes into side effects.

use tracing::debug;

use super::{TimerConfig, TimerPhase, TimerState};
use crate::errors::TimerError;

/// Identifies one tick schedule. Every configure, start, stop, reset and
/// completion issues a new generation so ticks from an older schedule are
/// recognised and dropped.
pub type RunId = u64;

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown continues with this many seconds left
    Continue(u32),
    /// Countdown reached zero on this tick; fired once per run
    Completed,
    /// Tick belonged to a cancelled schedule or the timer is not running
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TimerController {
    config: TimerConfig,
    state: TimerState,
    run_id: RunId,
}

impl TimerController {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: TimerState::idle(config.duration_seconds()),
            run_id: 0,
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Generation of the currently valid tick schedule
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Replace duration and repetition target. Refused while running.
    pub fn configure(&mut self, config: TimerConfig) -> Result<(), TimerError> {
        if self.state.is_running() {
            return Err(TimerError::Busy);
        }

        self.config = config;
        self.state = TimerState::idle(config.duration_seconds());
        self.run_id += 1;
        debug!(
            "Timer configured: {}s x {} reps",
            config.duration_seconds(),
            config.repetitions()
        );
        Ok(())
    }

    /// Begin (or resume) counting down. Returns the generation the caller
    /// must attach to its tick schedule.
    pub fn start(&mut self) -> Result<RunId, TimerError> {
        match self.state.phase {
            TimerPhase::Running => return Err(TimerError::AlreadyRunning),
            TimerPhase::Completed => return Err(TimerError::NothingToRun),
            TimerPhase::Idle if self.state.remaining_seconds == 0 => {
                return Err(TimerError::NothingToRun)
            }
            TimerPhase::Idle => {}
        }

        self.run_id += 1;
        self.state.phase = TimerPhase::Running;
        debug!(
            "Timer started (run {}) with {}s remaining",
            self.run_id, self.state.remaining_seconds
        );
        Ok(self.run_id)
    }

    /// Pause the countdown, keeping the remaining time
    pub fn stop(&mut self) -> Result<(), TimerError> {
        if !self.state.is_running() {
            return Err(TimerError::NotRunning(self.state.phase));
        }

        self.run_id += 1;
        self.state.phase = TimerPhase::Idle;
        debug!("Timer paused at {}s", self.state.remaining_seconds);
        Ok(())
    }

    /// Return to a full idle countdown from any phase
    pub fn reset(&mut self) {
        self.run_id += 1;
        self.state = TimerState::idle(self.config.duration_seconds());
        debug!("Timer reset to {}s", self.state.remaining_seconds);
    }

    /// Apply one second of countdown on behalf of schedule `run_id`
    pub fn tick(&mut self, run_id: RunId) -> TickOutcome {
        if run_id != self.run_id || !self.state.is_running() {
            return TickOutcome::Ignored;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds == 0 {
            self.state.phase = TimerPhase::Completed;
            // Invalidate the schedule so no further tick can reach this run.
            self.run_id += 1;
            TickOutcome::Completed
        } else {
            TickOutcome::Continue(self.state.remaining_seconds)
        }
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}
