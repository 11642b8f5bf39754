use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::backend::DesktopBackend;
use crate::focus::errors::ActivationError;
use crate::focus::launch::strip_field_codes;
use crate::focus::state::{ActivationOutcome, FocusState, Transition};

/// Serializes activation requests and owns the toggle state.
///
/// The lock is held across the window command so two overlapping clicks
/// cannot both read `Idle` and both decide to focus.
pub struct FocusController<B: DesktopBackend> {
    backend: Arc<B>,
    state: Mutex<FocusState>,
}

impl<B: DesktopBackend> FocusController<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: Mutex::new(FocusState::Idle),
        }
    }

    pub async fn state(&self) -> FocusState {
        self.state.lock().await.clone()
    }

    /// Launch, focus or minimize, depending on `window_id` and the last
    /// window this controller raised.
    pub async fn activate(
        &self,
        window_id: Option<&str>,
        exec_command: &str,
    ) -> Result<ActivationOutcome, ActivationError> {
        let mut state = self.state.lock().await;

        match state.plan(window_id) {
            Transition::Launch => {
                let command = strip_field_codes(exec_command);
                if command.is_empty() {
                    warn!(
                        event = "core.focus.launch_rejected",
                        exec_command = exec_command,
                        "Refusing to launch an empty command"
                    );
                    return Err(ActivationError::EmptyCommand);
                }

                self.backend
                    .launch(&command)
                    .map_err(|source| ActivationError::LaunchFailed {
                        command: command.clone(),
                        source,
                    })?;

                info!(event = "core.focus.launch_completed", command = %command);
                Ok(ActivationOutcome::Launched { command })
            }
            Transition::Focus(id) => {
                info!(event = "core.focus.focus_started", window_id = %id);
                self.backend
                    .activate_window(&id)
                    .await
                    .map_err(|source| ActivationError::FocusFailed {
                        window_id: id.clone(),
                        source,
                    })?;

                *state = FocusState::Focused(id.clone());
                info!(event = "core.focus.focus_completed", window_id = %id);
                Ok(ActivationOutcome::Focused { window_id: id })
            }
            Transition::Minimize(id) => {
                info!(event = "core.focus.minimize_started", window_id = %id);
                // The window may already be gone; forget it either way so the
                // next click focuses instead of retrying the minimize.
                *state = FocusState::Idle;
                self.backend
                    .minimize_window(&id)
                    .await
                    .map_err(|source| ActivationError::MinimizeFailed {
                        window_id: id.clone(),
                        source,
                    })?;

                info!(event = "core.focus.minimize_completed", window_id = %id);
                Ok(ActivationOutcome::Minimized { window_id: id })
            }
        }
    }
}
