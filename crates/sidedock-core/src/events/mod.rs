//! Lifecycle events shared by every `sidedock` command.

use tracing::{error, info};

use crate::errors::DockError;

pub fn log_command_started(command: &str) {
    info!(
        event = "core.cli.command_started",
        command = command,
        version = env!("CARGO_PKG_VERSION")
    );
}

/// The JSONL session is over, whether the renderer quit or stdin closed.
pub fn log_session_ended() {
    info!(event = "core.cli.session_ended");
}

pub fn log_command_failed(command: &str, error: &dyn DockError) {
    error!(
        event = "core.cli.command_failed",
        command = command,
        error = %error,
        code = error.error_code(),
        user_error = error.is_user_error()
    );
}
