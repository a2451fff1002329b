//! Periodic purge of expired wizard sessions.
//!
//! Expired sessions are already unreachable through [`SessionStore`];
//! this task reclaims their memory. Runs on a fixed interval using
//! `tokio::time::interval` until the spawned task is aborted at
//! shutdown.

use std::sync::Arc;
use std::time::Duration;

use crate::session::SessionStore;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the session sweep loop.
pub async fn run(sessions: Arc<SessionStore>) {
    tracing::info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Session sweep started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        interval.tick().await;
        let purged = sessions.purge_expired().await;
        if purged > 0 {
            tracing::info!(purged, "Session sweep: purged expired sessions");
        } else {
            tracing::debug!("Session sweep: nothing to purge");
        }
    }
}
