//! The dock service: descriptors, focus state and the JSONL session.
//!
//! [`Dock`] answers one action at a time. [`Dock::serve`] wires it to a
//! reader/writer pair and runs the visibility and refresh loops beside it.

mod serve;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::backend::DesktopBackend;
use crate::config::DockConfig;
use crate::descriptors::{self, ApplicationDescriptor};
use crate::errors::DockError;
use crate::focus::FocusController;
use crate::notify;
use crate::protocol::{DockAction, DockEvent};
use crate::reconcile::{ReconciledView, reconcile, unmatched_classes};
use crate::visibility::at_edge;
use crate::windows::RunningInventory;

/// What the session loop should do after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Continue(Option<DockEvent>),
    Quit,
}

pub struct Dock<B: DesktopBackend> {
    backend: Arc<B>,
    config: DockConfig,
    descriptors: Vec<ApplicationDescriptor>,
    focus: FocusController<B>,
}

impl<B: DesktopBackend> Dock<B> {
    /// Build a dock over an explicit descriptor list.
    ///
    /// Descriptors without a name are dropped.
    pub fn new(
        backend: Arc<B>,
        config: DockConfig,
        descriptors: Vec<ApplicationDescriptor>,
    ) -> Self {
        let total = descriptors.len();
        let descriptors: Vec<_> = descriptors.into_iter().filter(|d| d.is_valid()).collect();
        if descriptors.len() < total {
            debug!(
                event = "core.dock.descriptors_skipped",
                skipped = total - descriptors.len(),
                "Skipping descriptors without a name"
            );
        }

        Self {
            focus: FocusController::new(backend.clone()),
            backend,
            config,
            descriptors,
        }
    }

    /// Build a dock from the configured descriptor source.
    pub fn load(backend: Arc<B>, config: DockConfig) -> Self {
        let descriptors = descriptors::list_descriptors(&config.descriptors);
        info!(
            event = "core.dock.load_completed",
            backend = backend.name(),
            descriptors = descriptors.len()
        );
        Self::new(backend, config, descriptors)
    }

    pub fn descriptors(&self) -> &[ApplicationDescriptor] {
        &self.descriptors
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Running windows without ignored classes.
    ///
    /// A listing failure degrades to an empty inventory.
    pub async fn inventory(&self) -> RunningInventory {
        match self.backend.list_windows().await {
            Ok(inventory) => inventory.without_classes(&self.config.reconcile.ignored_classes()),
            Err(e) => {
                warn!(
                    event = "core.dock.list_failed",
                    error = %e,
                    "Window listing failed, treating every application as not running"
                );
                RunningInventory::new()
            }
        }
    }

    pub async fn view(&self) -> ReconciledView {
        reconcile(&self.descriptors, &self.inventory().await)
    }

    /// Full `apps` event for the current window state.
    pub async fn snapshot(&self) -> DockEvent {
        let inventory = self.inventory().await;
        let view = reconcile(&self.descriptors, &inventory);
        let unmatched = self
            .config
            .reconcile
            .surface_unmatched
            .then(|| unmatched_classes(&self.descriptors, &inventory));

        DockEvent::Apps {
            apps: view.entries,
            unmatched,
        }
    }

    /// Run one activation and report it as an event.
    pub async fn activate(&self, window_id: Option<&str>, exec_command: &str) -> DockEvent {
        match self.focus.activate(window_id, exec_command).await {
            Ok(outcome) => DockEvent::Activated { outcome },
            Err(e) => {
                if e.is_user_error() {
                    warn!(event = "core.dock.activate_failed", error = %e, code = e.error_code());
                } else {
                    error!(event = "core.dock.activate_failed", error = %e, code = e.error_code());
                }
                if notify::should_notify(self.config.notifications.enabled, &e) {
                    let program = self.config.tools.notify_send().to_string();
                    let message = notify::format_notification_message(&e);
                    let timeout = self.config.tools.timeout();
                    tokio::spawn(async move {
                        notify::send_notification(&program, &message, timeout).await;
                    });
                }
                DockEvent::Error {
                    code: e.error_code().to_string(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Honour a renderer hide request unless the pointer is on the trigger edge.
    pub async fn request_hide(&self) -> Option<DockEvent> {
        match self.backend.pointer_location().await {
            Ok(pointer) if at_edge(pointer, &self.config.visibility) => {
                info!(event = "core.dock.hide_ignored", x = pointer.x, y = pointer.y);
                None
            }
            Ok(_) => Some(DockEvent::Hide),
            Err(e) => {
                warn!(event = "core.dock.hide_failed", error = %e);
                None
            }
        }
    }

    pub async fn handle(&self, action: DockAction) -> Reply {
        match action {
            DockAction::Activate {
                window_id,
                exec_command,
            } => Reply::Continue(Some(
                self.activate(window_id.as_deref(), &exec_command).await,
            )),
            DockAction::Hide => Reply::Continue(self.request_hide().await),
            DockAction::Refresh => Reply::Continue(Some(self.snapshot().await)),
            DockAction::Quit => Reply::Quit,
        }
    }
}
