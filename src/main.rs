//! Rep Timer - countdown timer widget for timed exercise sets
//!
//! This is the main entry point for the rep-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use rep_timer::{
    api::create_router,
    config::Config,
    services::LogNotifier,
    state::AppState,
    tasks::load_exercise_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("rep_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting rep-timer v{}", env!("CARGO_PKG_VERSION"));

    let timer_config = config.timer_config()?;
    info!(
        "Configuration: host={}, port={}, duration={}s, reps={}, backend={}",
        config.host,
        config.port,
        timer_config.duration_seconds(),
        timer_config.repetitions(),
        config.backend_url.as_deref().unwrap_or("in-memory"),
    );

    let state = Arc::new(
        AppState::new(
            config.session(),
            timer_config,
            config.store(),
            Arc::new(LogNotifier),
        )
        .with_address(config.host.clone(), config.port),
    );

    // Fetch exercise details in the background; the view shows loading until then
    tokio::spawn(load_exercise_task(Arc::clone(&state)));

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /exercise        - Exercise details");
    info!("  GET  /timer           - Timer status and options");
    info!("  POST /timer/configure - Select duration and reps");
    info!("  POST /timer/start     - Start or resume");
    info!("  POST /timer/stop      - Pause");
    info!("  POST /timer/reset     - Reset to full duration");
    info!("  GET  /health          - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.reset();
    info!("Server shutdown complete");
    Ok(())
}
