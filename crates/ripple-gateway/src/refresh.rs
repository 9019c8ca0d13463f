use std::sync::Arc;
use std::time::Duration;

use ripple_redirector::Redirector;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Periodically reloads the redirector's mappings so codes added by the
/// shortener go live without a restart.
///
/// A failed reload is logged and the previous mappings stay in service.
pub fn spawn_refresh(redirector: Arc<dyn Redirector>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately; the startup load already ran
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match redirector.refresh().await {
                Ok(count) => debug!(count, "mappings refreshed"),
                Err(e) => warn!(error = %e, "mapping refresh failed, keeping previous mappings"),
            }
        }
    })
}
