//! Shared state for one exercise timer widget

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Instant,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use super::{
    progress_fraction, AnimationFrame, ProgressAnimation, RunId, TickOutcome, TimerConfig,
    TimerController, TimerPhase,
};
use crate::{
    errors::TimerError,
    services::{CompletionNotifier, Exercise, ExerciseStore, COMPLETION_MESSAGE, COMPLETION_TITLE},
    tasks::{countdown_task, LogRecorder},
};

/// Who is exercising and on what; handed in at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: String,
    pub exercise_id: String,
}

/// Exercise details as shown above the timer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "exercise", rename_all = "lowercase")]
pub enum ExerciseView {
    Loading,
    Loaded(Exercise),
}

/// Point-in-time view of the timer, published on every change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
    pub remaining_seconds: u32,
    pub duration_seconds: u32,
    pub repetitions: u32,
    /// Elapsed share of the duration, 0.0 to 1.0
    pub progress: f32,
    /// Level of the animated indicator, 1.0 is full
    pub indicator_level: f32,
}

/// Notifications emitted to listeners of the widget
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    Configured(TimerConfig),
    Started { run_id: RunId, remaining_seconds: u32 },
    Paused { remaining_seconds: u32 },
    Reset,
    Tick { remaining_seconds: u32, frame: AnimationFrame },
    Completed,
}

/// Everything mutated by user actions and ticks, kept under one lock
#[derive(Debug)]
struct TimerWidget {
    controller: TimerController,
    animation: ProgressAnimation,
    tick_task: Option<JoinHandle<()>>,
    last_action: Option<(String, DateTime<Utc>)>,
}

impl TimerWidget {
    fn snapshot(&self) -> TimerSnapshot {
        let config = self.controller.config();
        let state = self.controller.state();
        TimerSnapshot {
            phase: state.phase,
            remaining_seconds: state.remaining_seconds,
            duration_seconds: config.duration_seconds(),
            repetitions: config.repetitions(),
            progress: progress_fraction(&state, &config),
            indicator_level: self.animation.level(),
        }
    }

    fn cancel_schedule(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.abort();
        }
    }

    fn record_action(&mut self, action: &str) {
        self.last_action = Some((action.to_string(), Utc::now()));
    }
}

/// Main application state for the timer widget
pub struct AppState {
    pub session: SessionContext,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    widget: Mutex<TimerWidget>,
    exercise: Mutex<ExerciseView>,
    store: Arc<dyn ExerciseStore>,
    recorder: LogRecorder,
    notifier: Arc<dyn CompletionNotifier>,
    /// Channel for widget events
    pub event_tx: broadcast::Sender<TimerEvent>,
    /// Channel for timer snapshots
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    pub fn new(
        session: SessionContext,
        config: TimerConfig,
        store: Arc<dyn ExerciseStore>,
        notifier: Arc<dyn CompletionNotifier>,
    ) -> Self {
        let widget = TimerWidget {
            controller: TimerController::new(config),
            animation: ProgressAnimation::new(),
            tick_task: None,
            last_action: None,
        };
        let (event_tx, _) = broadcast::channel(100);
        let (timer_update_tx, timer_update_rx) = watch::channel(widget.snapshot());

        Self {
            session,
            start_time: Instant::now(),
            port: 0,
            host: String::new(),
            widget: Mutex::new(widget),
            exercise: Mutex::new(ExerciseView::Loading),
            recorder: LogRecorder::new(Arc::clone(&store)),
            store,
            notifier,
            event_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Attach the address the HTTP surface is served on
    pub fn with_address(mut self, host: String, port: u16) -> Self {
        self.host = host;
        self.port = port;
        self
    }

    fn widget(&self) -> MutexGuard<'_, TimerWidget> {
        // Widget state is always left consistent, so a poisoned lock is still usable.
        self.widget.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, snapshot: TimerSnapshot, event: TimerEvent) {
        if let Err(e) = self.timer_update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
        // No subscribers is the normal case for a headless widget.
        let _ = self.event_tx.send(event);
    }

    pub fn store(&self) -> Arc<dyn ExerciseStore> {
        Arc::clone(&self.store)
    }

    /// Select a new duration and repetition target
    pub fn configure(&self, config: TimerConfig) -> Result<TimerSnapshot, TimerError> {
        let mut widget = self.widget();
        widget.controller.configure(config)?;
        widget.cancel_schedule();
        widget.animation.reset_baseline();
        widget.record_action("configure");
        let snapshot = widget.snapshot();
        drop(widget);

        info!(
            "Timer set to {}s x {} reps",
            config.duration_seconds(),
            config.repetitions()
        );
        self.publish(snapshot, TimerEvent::Configured(config));
        Ok(snapshot)
    }

    /// Start or resume the countdown and log the session in the background
    pub fn start(self: &Arc<Self>) -> Result<TimerSnapshot, TimerError> {
        let mut widget = self.widget();
        let run_id = widget.controller.start()?;

        // Only one schedule may tick per widget.
        widget.cancel_schedule();
        widget.tick_task = Some(tokio::spawn(countdown_task(Arc::clone(self), run_id)));
        widget.record_action("start");
        let config = widget.controller.config();
        let snapshot = widget.snapshot();
        drop(widget);

        info!("Timer started with {}s remaining", snapshot.remaining_seconds);
        self.recorder.record_start(
            &self.session.exercise_id,
            &self.session.user_id,
            config.repetitions(),
            config.duration_seconds(),
        );
        self.publish(
            snapshot,
            TimerEvent::Started {
                run_id,
                remaining_seconds: snapshot.remaining_seconds,
            },
        );
        Ok(snapshot)
    }

    /// Pause the countdown
    pub fn stop(&self) -> Result<TimerSnapshot, TimerError> {
        let mut widget = self.widget();
        widget.controller.stop()?;
        widget.cancel_schedule();
        widget.record_action("stop");
        let snapshot = widget.snapshot();
        drop(widget);

        info!("Timer paused at {}s", snapshot.remaining_seconds);
        self.publish(
            snapshot,
            TimerEvent::Paused {
                remaining_seconds: snapshot.remaining_seconds,
            },
        );
        Ok(snapshot)
    }

    /// Return to a full, idle countdown
    pub fn reset(&self) -> TimerSnapshot {
        let mut widget = self.widget();
        widget.controller.reset();
        widget.cancel_schedule();
        widget.animation.reset_baseline();
        widget.record_action("reset");
        let snapshot = widget.snapshot();
        drop(widget);

        info!("Timer reset to {}s", snapshot.remaining_seconds);
        self.publish(snapshot, TimerEvent::Reset);
        snapshot
    }

    /// Apply one tick from schedule `run_id`; called by the countdown task
    pub fn apply_tick(&self, run_id: RunId) -> TickOutcome {
        let mut widget = self.widget();
        let outcome = widget.controller.tick(run_id);
        if outcome == TickOutcome::Ignored {
            debug!("Dropped tick from stale run {}", run_id);
            return outcome;
        }

        let config = widget.controller.config();
        let state = widget.controller.state();
        let frame = widget.animation.advance(&state, &config);
        if outcome == TickOutcome::Completed {
            // The calling task is the schedule and exits on its own.
            widget.tick_task = None;
        }
        let snapshot = widget.snapshot();
        drop(widget);

        self.publish(
            snapshot,
            TimerEvent::Tick {
                remaining_seconds: snapshot.remaining_seconds,
                frame,
            },
        );

        if outcome == TickOutcome::Completed {
            info!("Exercise timer finished");
            self.notifier.vibrate();
            self.notifier.alert(COMPLETION_TITLE, COMPLETION_MESSAGE);
            let _ = self.event_tx.send(TimerEvent::Completed);
        }

        outcome
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.widget().snapshot()
    }

    pub fn config(&self) -> TimerConfig {
        self.widget().controller.config()
    }

    /// Whether a tick schedule is currently held
    pub fn has_schedule(&self) -> bool {
        self.widget().tick_task.is_some()
    }

    pub fn get_last_action(&self) -> Option<(String, DateTime<Utc>)> {
        self.widget().last_action.clone()
    }

    pub fn exercise_view(&self) -> ExerciseView {
        self.exercise
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_exercise(&self, exercise: Exercise) {
        info!("Loaded exercise details: {}", exercise.name);
        *self.exercise.lock().unwrap_or_else(PoisonError::into_inner) =
            ExerciseView::Loaded(exercise);
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
