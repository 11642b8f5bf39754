//! Edge-triggered reveal and hide of the dock panel.
//!
//! The pointer is sampled on a fixed period. The panel appears when the
//! pointer touches the left edge inside the trigger band and hides when the
//! pointer leaves the panel. The decision itself is the pure function
//! [`decide`]; the loop only adds a transition filter so the renderer sees
//! one `show` or `hide` per change.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::backend::DesktopBackend;
use crate::config::VisibilityConfig;
use crate::protocol::DockEvent;
use crate::windows::{PointerPosition, ScreenSize, WindowToolError};

/// Where the renderer should place the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PanelGeometry {
    /// Left-edge panel sized for `app_count` slots, centred vertically.
    ///
    /// A panel taller than the screen is pinned to the top.
    pub fn compute(app_count: usize, screen: ScreenSize, config: &VisibilityConfig) -> Self {
        let height = u32::try_from(app_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(config.slot_height());
        let free = i64::from(screen.height) - i64::from(height);
        let y = (free / 2).clamp(0, i64::from(i32::MAX)) as i32;

        Self {
            x: 0,
            y,
            width: config.panel_width(),
            height,
        }
    }

    /// Whether `pointer` lies on the panel.
    pub fn contains(&self, pointer: PointerPosition) -> bool {
        let (px, py) = (i64::from(pointer.x), i64::from(pointer.y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        px >= left
            && px < left + i64::from(self.width)
            && py >= top
            && py < top + i64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Show(PanelGeometry),
    Hide,
}

impl PanelCommand {
    fn into_event(self) -> DockEvent {
        match self {
            PanelCommand::Show(geometry) => DockEvent::Show(geometry),
            PanelCommand::Hide => DockEvent::Hide,
        }
    }
}

/// Whether the pointer sits on the trigger edge (ignoring the vertical band).
pub fn at_edge(pointer: PointerPosition, config: &VisibilityConfig) -> bool {
    pointer.x <= config.edge_threshold_px()
}

/// Decide what the panel should do for one pointer sample.
///
/// The panel is revealed from the edge inside the vertical band and hidden
/// only once the pointer is off the panel. Returns `None` when neither
/// applies: the panel keeps whatever state it had.
pub fn decide(
    pointer: PointerPosition,
    screen: ScreenSize,
    app_count: usize,
    config: &VisibilityConfig,
) -> Option<PanelCommand> {
    let geometry = PanelGeometry::compute(app_count, screen, config);

    if at_edge(pointer, config) {
        let height = f64::from(screen.height);
        let y = f64::from(pointer.y);
        return (y >= config.band_start() * height && y <= config.band_end() * height)
            .then_some(PanelCommand::Show(geometry));
    }

    if geometry.contains(pointer) {
        None
    } else {
        Some(PanelCommand::Hide)
    }
}

async fn sample<B: DesktopBackend>(
    backend: &B,
) -> Result<(PointerPosition, ScreenSize), WindowToolError> {
    let pointer = backend.pointer_location().await?;
    let screen = backend.screen_size().await?;
    Ok((pointer, screen))
}

/// Poll the pointer until `cancel` fires, sending `show`/`hide` on change.
pub async fn run_visibility_loop<B: DesktopBackend>(
    backend: Arc<B>,
    config: VisibilityConfig,
    app_count: usize,
    events: UnboundedSender<DockEvent>,
    cancel: CancellationToken,
) {
    info!(
        event = "core.visibility.loop_started",
        interval_ms = config.poll_interval().as_millis() as u64,
        app_count = app_count
    );

    let mut last: Option<PanelCommand> = None;

    while !cancel.is_cancelled() {
        match sample(backend.as_ref()).await {
            Ok((pointer, screen)) => {
                let command = decide(pointer, screen, app_count, &config);
                if let Some(command) = command.filter(|c| last != Some(*c)) {
                    debug!(
                        event = "core.visibility.transition",
                        x = pointer.x,
                        y = pointer.y,
                        show = matches!(command, PanelCommand::Show(_))
                    );
                    if events.send(command.into_event()).is_err() {
                        break;
                    }
                    last = Some(command);
                }
            }
            Err(e) => {
                warn!(event = "core.visibility.tick_failed", error = %e);
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(config.poll_interval()) => {}
        }
    }

    info!(event = "core.visibility.loop_completed");
}
