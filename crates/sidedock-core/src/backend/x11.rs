use std::process::Stdio;
use std::time::Duration;

use tracing::{error, info};

use crate::backend::DesktopBackend;
use crate::backend::command::{run_tool, validate_window_id};
use crate::config::ToolsConfig;
use crate::windows::{
    PointerPosition, RunningInventory, ScreenSize, WindowToolError, parse_display_geometry,
    parse_pointer_location, parse_window_list,
};

/// Backend driving an X11 window manager through `wmctrl` and `xdotool`.
#[derive(Debug, Clone)]
pub struct X11Backend {
    wmctrl: String,
    xdotool: String,
    timeout: Duration,
}

impl X11Backend {
    pub fn new(tools: &ToolsConfig) -> Self {
        Self {
            wmctrl: tools.wmctrl().to_string(),
            xdotool: tools.xdotool().to_string(),
            timeout: tools.timeout(),
        }
    }
}

impl DesktopBackend for X11Backend {
    fn name(&self) -> &'static str {
        "x11"
    }

    async fn list_windows(&self) -> Result<RunningInventory, WindowToolError> {
        let output = run_tool(&self.wmctrl, &["-l", "-x"], self.timeout).await?;
        Ok(parse_window_list(&output))
    }

    async fn activate_window(&self, window_id: &str) -> Result<(), WindowToolError> {
        validate_window_id(window_id)?;
        run_tool(&self.wmctrl, &["-i", "-a", window_id], self.timeout).await?;
        Ok(())
    }

    async fn minimize_window(&self, window_id: &str) -> Result<(), WindowToolError> {
        validate_window_id(window_id)?;
        run_tool(&self.xdotool, &["windowminimize", window_id], self.timeout).await?;
        Ok(())
    }

    async fn pointer_location(&self) -> Result<PointerPosition, WindowToolError> {
        let output = run_tool(&self.xdotool, &["getmouselocation", "--shell"], self.timeout).await?;
        parse_pointer_location(&output).ok_or_else(|| WindowToolError::InvalidOutput {
            tool: self.xdotool.clone(),
            message: output.trim().to_string(),
        })
    }

    async fn screen_size(&self) -> Result<ScreenSize, WindowToolError> {
        let output = run_tool(&self.xdotool, &["getdisplaygeometry"], self.timeout).await?;
        parse_display_geometry(&output).ok_or_else(|| WindowToolError::InvalidOutput {
            tool: self.xdotool.clone(),
            message: output.trim().to_string(),
        })
    }

    fn launch(&self, command: &str) -> Result<(), WindowToolError> {
        info!(event = "core.launch.spawn_started", command = command);

        // Null stdio keeps launched apps out of the JSONL stream; tokio reaps the
        // dropped child in the background.
        match tokio::process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                info!(
                    event = "core.launch.spawn_completed",
                    command = command,
                    pid = ?child.id()
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    event = "core.launch.spawn_failed",
                    command = command,
                    error = %e
                );
                Err(WindowToolError::SpawnFailed {
                    tool: "sh".to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_tools() -> ToolsConfig {
        ToolsConfig {
            wmctrl: Some("/nonexistent/wmctrl".to_string()),
            xdotool: Some("/nonexistent/xdotool".to_string()),
            notify_send: None,
            timeout_ms: Some(500),
        }
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(X11Backend::new(&ToolsConfig::default()).name(), "x11");
    }

    #[tokio::test]
    async fn test_list_windows_without_wmctrl() {
        let backend = X11Backend::new(&missing_tools());
        let result = backend.list_windows().await;
        assert!(matches!(result, Err(WindowToolError::ToolNotFound { .. })));
    }

    #[tokio::test]
    async fn test_activate_rejects_option_like_ids() {
        let backend = X11Backend::new(&missing_tools());
        let result = backend.activate_window("-r").await;
        assert!(matches!(
            result,
            Err(WindowToolError::InvalidWindowId { .. })
        ));
    }

    #[tokio::test]
    async fn test_pointer_without_xdotool() {
        let backend = X11Backend::new(&missing_tools());
        assert!(backend.pointer_location().await.is_err());
        assert!(backend.screen_size().await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_accepted_by_shell() {
        let backend = X11Backend::new(&missing_tools());
        assert!(backend.launch("true").is_ok());
    }
}
