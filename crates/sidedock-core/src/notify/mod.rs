//! Desktop notification dispatch for failed dock actions.
//!
//! Best-effort: failures are logged but never propagate. Only sent when
//! `[notifications] enabled = true`.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::backend::command::run_tool;
use crate::errors::DockError;
use crate::windows::WindowToolError;

const NOTIFY_TITLE: &str = "sidedock";

/// Returns `true` if a failure should produce a desktop notification.
///
/// User errors (e.g. an empty launch command) stay in the event stream.
pub fn should_notify(enabled: bool, error: &dyn DockError) -> bool {
    enabled && !error.is_user_error()
}

pub fn format_notification_message(error: &dyn DockError) -> String {
    format!("{} ({})", error, error.error_code())
}

/// Send a desktop notification through `program` (normally `notify-send`).
///
/// The call is bounded by `timeout` and a hung notifier is killed. A missing
/// binary is skipped quietly.
pub async fn send_notification(program: &str, message: &str, timeout: Duration) {
    info!(event = "core.notify.send_started", message = message);

    match run_tool(program, &[NOTIFY_TITLE, message], timeout).await {
        Ok(_) => info!(event = "core.notify.send_completed"),
        Err(WindowToolError::ToolNotFound { .. }) => {
            debug!(
                event = "core.notify.send_skipped",
                reason = "notifier not found",
                program = program
            );
        }
        Err(e) => warn!(event = "core.notify.send_failed", error = %e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::ActivationError;
    use std::time::Instant;

    fn focus_failure() -> ActivationError {
        ActivationError::FocusFailed {
            window_id: "0x01".to_string(),
            source: WindowToolError::TimedOut {
                tool: "wmctrl".to_string(),
                timeout_ms: 2000,
            },
        }
    }

    #[test]
    fn test_should_notify_for_tool_failures() {
        assert!(should_notify(true, &focus_failure()));
    }

    #[test]
    fn test_should_notify_suppressed_when_disabled() {
        assert!(!should_notify(false, &focus_failure()));
    }

    #[test]
    fn test_should_notify_skips_user_errors() {
        assert!(!should_notify(true, &ActivationError::EmptyCommand));
    }

    #[test]
    fn test_format_notification_message() {
        assert_eq!(
            format_notification_message(&focus_failure()),
            "Failed to focus window '0x01': 'wmctrl' did not finish within 2000ms (FOCUS_FAILED)"
        );
    }

    #[tokio::test]
    async fn test_send_notification_missing_binary_is_skipped() {
        send_notification(
            "/nonexistent/sidedock-notify-send",
            "Message with \"quotes\" and \n newline",
            Duration::from_secs(1),
        )
        .await;
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_send_notification_is_bounded_by_timeout() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("notify-send");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let started = Instant::now();
        send_notification(
            script.to_str().unwrap(),
            "Failed to focus window",
            Duration::from_millis(100),
        )
        .await;
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
