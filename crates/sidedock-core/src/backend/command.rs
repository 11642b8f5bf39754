//! Bounded execution of external window tools.
//!
//! Each invocation resolves the binary with `which`, runs it with a timeout,
//! logs structured events, and maps failures onto [`WindowToolError`].

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::windows::WindowToolError;

/// Reject window ids that could be read as options or carry control characters.
pub fn validate_window_id(window_id: &str) -> Result<(), WindowToolError> {
    if window_id.is_empty()
        || window_id.starts_with('-')
        || window_id.chars().any(|c| c.is_control() || c.is_whitespace())
    {
        return Err(WindowToolError::InvalidWindowId {
            window_id: window_id.to_string(),
        });
    }
    Ok(())
}

/// Run `tool` with `args`, returning stdout on a zero exit status.
///
/// The child is killed if it outlives `timeout`.
pub async fn run_tool(
    tool: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, WindowToolError> {
    let program = which::which(tool).map_err(|_| WindowToolError::ToolNotFound {
        tool: tool.to_string(),
    })?;

    debug!(event = "core.tool.run_started", tool = tool, args = ?args);

    let output = Command::new(&program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(timeout, output).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Err(WindowToolError::SpawnFailed {
                tool: tool.to_string(),
                message: e.to_string(),
            });
        }
        Err(_) => {
            warn!(
                event = "core.tool.run_timed_out",
                tool = tool,
                timeout_ms = timeout.as_millis() as u64
            );
            return Err(WindowToolError::TimedOut {
                tool: tool.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            });
        }
    };

    if output.status.success() {
        debug!(event = "core.tool.run_completed", tool = tool);
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(
            event = "core.tool.run_failed",
            tool = tool,
            code = ?output.status.code(),
            stderr = %stderr
        );
        Err(WindowToolError::NonZeroExit {
            tool: tool.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr,
        })
    }
}
