//! Periodic running-window snapshots for the renderer.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::backend::DesktopBackend;
use crate::protocol::DockEvent;

/// Send an `update` event every `interval` until `cancel` fires.
///
/// Classes listed in `ignored_classes` (lower-cased) are dropped from each
/// snapshot. A failed listing skips that tick.
pub async fn run_refresh_loop<B: DesktopBackend>(
    backend: Arc<B>,
    interval: Duration,
    ignored_classes: Vec<String>,
    events: UnboundedSender<DockEvent>,
    cancel: CancellationToken,
) {
    if cancel.is_cancelled() {
        return;
    }

    info!(
        event = "core.refresh.loop_started",
        interval_ms = interval.as_millis() as u64
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        match backend.list_windows().await {
            Ok(inventory) => {
                let apps = inventory.without_classes(&ignored_classes).into_groups();
                let event = DockEvent::Update {
                    apps,
                    captured_at: Utc::now(),
                };
                if events.send(event).is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!(event = "core.refresh.tick_failed", error = %e);
            }
        }
    }

    info!(event = "core.refresh.loop_completed");
}
