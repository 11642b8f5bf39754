use crate::errors::DockError;
use crate::windows::WindowToolError;

#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("Command is empty after removing field codes")]
    EmptyCommand,

    #[error("Failed to launch '{command}': {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: WindowToolError,
    },

    #[error("Failed to focus window '{window_id}': {source}")]
    FocusFailed {
        window_id: String,
        #[source]
        source: WindowToolError,
    },

    #[error("Failed to minimize window '{window_id}': {source}")]
    MinimizeFailed {
        window_id: String,
        #[source]
        source: WindowToolError,
    },
}

impl DockError for ActivationError {
    fn error_code(&self) -> &'static str {
        match self {
            ActivationError::EmptyCommand => "EMPTY_COMMAND",
            ActivationError::LaunchFailed { .. } => "LAUNCH_FAILED",
            ActivationError::FocusFailed { .. } => "FOCUS_FAILED",
            ActivationError::MinimizeFailed { .. } => "MINIMIZE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ActivationError::EmptyCommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_failed_display() {
        let error = ActivationError::FocusFailed {
            window_id: "0x01".to_string(),
            source: WindowToolError::ToolNotFound {
                tool: "wmctrl".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "Failed to focus window '0x01': Tool 'wmctrl' not found on PATH"
        );
        assert_eq!(error.error_code(), "FOCUS_FAILED");
    }
}
