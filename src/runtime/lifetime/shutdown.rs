use tokio::signal;
use tracing::{info, warn};

use crate::storage::UserStore;

/// Wait for Ctrl+C, then report what is being discarded.
pub async fn listen_for_shutdown(store: &UserStore, started_at: chrono::DateTime<chrono::Utc>) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    let uptime = (chrono::Utc::now() - started_at).num_seconds().max(0);
    // 内存数据不持久化，退出即丢弃
    info!(
        "Discarding {} in-memory users after {}s uptime",
        store.len(),
        uptime
    );
}
