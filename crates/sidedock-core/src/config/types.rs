//! Configuration type definitions for sidedock.
//!
//! Every tunable is an `Option` so that user and explicit config files can be
//! merged field by field. Accessors in [`super::defaults`] supply the
//! built-in values.
//!
//! # Example Configuration
//!
//! ```toml
//! [descriptors]
//! backend = "desktop-entries"
//! directory = "/usr/share/applications"
//!
//! [visibility]
//! band_start = 0.33
//! band_end = 0.66
//!
//! [reconcile]
//! surface_unmatched = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.sidedock/config.toml`
/// 2. An explicit `--config` file
///
/// Later sources override earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DockConfig {
    /// Where installed applications come from
    #[serde(default)]
    pub descriptors: DescriptorConfig,

    /// External window-manager tools
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Pointer polling and panel geometry
    #[serde(default)]
    pub visibility: VisibilityConfig,

    /// Periodic inventory refresh
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Descriptor/inventory matching
    #[serde(default)]
    pub reconcile: ReconcileConfig,

    /// Desktop notifications for failed actions
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Descriptor backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptorBackend {
    /// A single JSON file listing descriptor records.
    #[default]
    File,
    /// A directory of freedesktop `.desktop` entry files.
    DesktopEntries,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DescriptorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<DescriptorBackend>,

    /// JSON descriptor file for the `file` backend.
    /// Default: `~/.sidedock/apps.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Directory globbed for `*.desktop` files by the `desktop-entries` backend.
    /// Default: `/usr/share/applications`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolsConfig {
    /// Binary used to list and activate windows. Default: `wmctrl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wmctrl: Option<String>,

    /// Binary used to minimize windows and read pointer/screen geometry.
    /// Default: `xdotool`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xdotool: Option<String>,

    /// Binary used for failure notifications. Default: `notify-send`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_send: Option<String>,

    /// Upper bound on any single tool invocation. Default: 2000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisibilityConfig {
    /// Pointer sampling period. Default: 100ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Pointer x at or below this reveals the dock inside the trigger band.
    /// The dock hides once the pointer leaves the shown panel. Default: 5px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_threshold_px: Option<i32>,

    /// Top of the trigger band as a fraction of screen height. Default: 0.25.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band_start: Option<f64>,

    /// Bottom of the trigger band as a fraction of screen height. Default: 0.75.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band_end: Option<f64>,

    /// Panel width in pixels. Default: 85.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_width: Option<u32>,

    /// Vertical space per application slot. Default: 74.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RefreshConfig {
    /// Inventory refresh period. Default: 1000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReconcileConfig {
    /// Report running classes that match no descriptor in `apps` events.
    #[serde(default)]
    pub surface_unmatched: bool,

    /// Window classes never shown, matched case-insensitively.
    /// Default: `["sidedock"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignored_classes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotificationConfig {
    /// Send a desktop notification when an activation fails.
    #[serde(default)]
    pub enabled: bool,
}
