//! One-second tick schedule for a running countdown

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::state::{AppState, RunId, TickOutcome};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drive the countdown for run `run_id` until it completes or is superseded.
///
/// The task holds no copy of the timer; every tick goes through
/// [`AppState::apply_tick`], which rejects ticks from a superseded run.
pub async fn countdown_task(state: Arc<AppState>, run_id: RunId) {
    debug!("Starting countdown schedule for run {}", run_id);

    // First tick one full period after start, not immediately.
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

    loop {
        interval.tick().await;

        match state.apply_tick(run_id) {
            TickOutcome::Continue(remaining) => {
                debug!("Tick: {}s remaining", remaining);
            }
            TickOutcome::Completed => {
                info!("Countdown for run {} reached zero", run_id);
                break;
            }
            TickOutcome::Ignored => {
                debug!("Run {} superseded, ending schedule", run_id);
                break;
            }
        }
    }
}
