use crate::errors::DockError;

/// Failure of an external window-manager facing tool.
#[derive(Debug, thiserror::Error)]
pub enum WindowToolError {
    #[error("Tool '{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    #[error("Failed to execute '{tool}': {message}")]
    SpawnFailed { tool: String, message: String },

    #[error("'{tool}' exited with code {code}: {stderr}")]
    NonZeroExit {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("'{tool}' did not finish within {timeout_ms}ms")]
    TimedOut { tool: String, timeout_ms: u64 },

    #[error("Unexpected output from '{tool}': {message}")]
    InvalidOutput { tool: String, message: String },

    #[error("Invalid window id '{window_id}'")]
    InvalidWindowId { window_id: String },
}

impl DockError for WindowToolError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowToolError::ToolNotFound { .. } => "TOOL_NOT_FOUND",
            WindowToolError::SpawnFailed { .. } => "TOOL_SPAWN_FAILED",
            WindowToolError::NonZeroExit { .. } => "TOOL_NON_ZERO_EXIT",
            WindowToolError::TimedOut { .. } => "TOOL_TIMED_OUT",
            WindowToolError::InvalidOutput { .. } => "TOOL_INVALID_OUTPUT",
            WindowToolError::InvalidWindowId { .. } => "INVALID_WINDOW_ID",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowToolError::ToolNotFound { .. } | WindowToolError::InvalidWindowId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_out_display() {
        let error = WindowToolError::TimedOut {
            tool: "wmctrl".to_string(),
            timeout_ms: 2000,
        };
        assert_eq!(error.to_string(), "'wmctrl' did not finish within 2000ms");
        assert_eq!(error.error_code(), "TOOL_TIMED_OUT");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_tool_not_found_is_user_error() {
        let error = WindowToolError::ToolNotFound {
            tool: "xdotool".to_string(),
        };
        assert_eq!(error.to_string(), "Tool 'xdotool' not found on PATH");
        assert!(error.is_user_error());
    }
}
