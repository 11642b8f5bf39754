//! Default values for configuration types.
//!
//! Config structs keep `Option` fields so files can be merged; these
//! accessors resolve the effective value.

use crate::config::types::{
    DescriptorBackend, DescriptorConfig, ReconcileConfig, RefreshConfig, ToolsConfig,
    VisibilityConfig,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base directory for sidedock's own files (default: ~/.sidedock).
pub fn sidedock_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".sidedock"),
        None => {
            eprintln!(
                "Warning: Could not find home directory. Set HOME environment variable. \
                Using fallback directory."
            );
            std::env::temp_dir().join(".sidedock")
        }
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

impl DescriptorConfig {
    pub fn backend(&self) -> DescriptorBackend {
        self.backend.unwrap_or_default()
    }

    /// Returns the JSON descriptor file, defaulting to `~/.sidedock/apps.json`.
    pub fn file(&self) -> PathBuf {
        match &self.file {
            Some(path) => expand_home(path),
            None => sidedock_dir().join("apps.json"),
        }
    }

    /// Returns the desktop-entry directory, defaulting to `/usr/share/applications`.
    pub fn directory(&self) -> PathBuf {
        match &self.directory {
            Some(path) => expand_home(path),
            None => PathBuf::from("/usr/share/applications"),
        }
    }
}

impl ToolsConfig {
    pub fn wmctrl(&self) -> &str {
        self.wmctrl.as_deref().unwrap_or("wmctrl")
    }

    pub fn xdotool(&self) -> &str {
        self.xdotool.as_deref().unwrap_or("xdotool")
    }

    pub fn notify_send(&self) -> &str {
        self.notify_send.as_deref().unwrap_or("notify-send")
    }

    /// Returns the per-invocation timeout, defaulting to 2 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(2000))
    }
}

impl VisibilityConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(100))
    }

    pub fn edge_threshold_px(&self) -> i32 {
        self.edge_threshold_px.unwrap_or(5)
    }

    pub fn band_start(&self) -> f64 {
        self.band_start.unwrap_or(0.25)
    }

    pub fn band_end(&self) -> f64 {
        self.band_end.unwrap_or(0.75)
    }

    pub fn panel_width(&self) -> u32 {
        self.panel_width.unwrap_or(85)
    }

    pub fn slot_height(&self) -> u32 {
        self.slot_height.unwrap_or(74)
    }
}

impl RefreshConfig {
    /// Returns the refresh period, defaulting to 1 second.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(1000))
    }
}

impl ReconcileConfig {
    /// Returns the ignored classes, lower-cased. Defaults to the dock's own class.
    pub fn ignored_classes(&self) -> Vec<String> {
        match &self.ignored_classes {
            Some(classes) => classes.iter().map(|c| c.to_lowercase()).collect(),
            None => vec!["sidedock".to_string()],
        }
    }
}
