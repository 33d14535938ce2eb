//! Focus Timer - A single-session Pomodoro countdown
//!
//! This is the main entry point for the focus-timer application.

use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, time::timeout};
use tracing::{info, warn};

use focus_timer::{
    api::create_router,
    config::Config,
    services::CuePlayer,
    state::AppState,
    tasks::spawn_timer,
    timer::TimeParts,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}",
          config.host, config.port, TimeParts::from_seconds(config.duration));

    // Start the timer loop; it owns the controller and its tick schedule
    let cue = CuePlayer::from_command(config.cue_command.clone());
    let (link, timer_task) = spawn_timer(config.duration, cue);

    let state = Arc::new(AppState::new(link, config.port, config.host.clone()));
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control surface running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle   - Start, pause or resume the countdown");
    info!("  POST /cancel   - Cancel the countdown");
    info!("  PUT  /duration - Set the countdown length ({{\"seconds\": n}})");
    info!("  GET  /status   - Check timer and screen state");
    info!("  GET  /health   - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        signal = shutdown_signal() => {
            info!("Shutdown signal {} received", signal);
        }
    }

    // Dropping the last command sender stops the timer loop and releases its schedule.
    // Lingering keep-alive connections can still hold the state, so bound the wait.
    drop(state);
    let abort = timer_task.abort_handle();
    if timeout(Duration::from_secs(2), timer_task).await.is_err() {
        warn!("Timer loop still referenced after shutdown, aborting it");
        abort.abort();
    }

    info!("Shutdown complete");
    Ok(())
}
