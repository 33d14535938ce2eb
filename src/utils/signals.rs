//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{debug, info};

/// Wait for SIGTERM or SIGINT and return which one arrived
pub async fn shutdown_signal() -> &'static str {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]).expect("Failed to create signal handler");

    let received = signals.next().await;
    signals.handle().close();
    debug!("Signal stream closed");

    match received {
        Some(signal_hook::consts::SIGTERM) => "SIGTERM",
        Some(signal_hook::consts::SIGINT) => "SIGINT",
        Some(other) => {
            info!("Unexpected signal {}", other);
            "unknown"
        }
        None => "none",
    }
}
