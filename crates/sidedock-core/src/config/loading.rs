//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - accessor fallbacks in [`super::defaults`]
//! 2. **User config** - `~/.sidedock/config.toml`
//! 3. **Explicit config** - the file passed with `--config` (highest priority)

use crate::config::defaults::sidedock_dir;
use crate::config::types::{
    DescriptorConfig, DockConfig, NotificationConfig, ReconcileConfig, RefreshConfig,
    ToolsConfig, VisibilityConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be parsed, if the explicit file
/// is missing, or if validation fails. A missing user config is not an error.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<DockConfig, ConfigError> {
    let mut config = DockConfig::default();

    let user_path = sidedock_dir().join("config.toml");
    if let Some(user_config) = load_config_file(&user_path)? {
        config = merge_configs(config, user_config);
    }

    if let Some(path) = explicit {
        match load_config_file(path)? {
            Some(explicit_config) => config = merge_configs(config, explicit_config),
            None => {
                return Err(ConfigError::InvalidConfiguration {
                    message: format!("Config file '{}' does not exist", path.display()),
                });
            }
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` when it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<DockConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only when the override sets them. Boolean
/// switches are enabled if either side enables them.
pub fn merge_configs(base: DockConfig, override_config: DockConfig) -> DockConfig {
    DockConfig {
        descriptors: DescriptorConfig {
            backend: override_config
                .descriptors
                .backend
                .or(base.descriptors.backend),
            file: override_config.descriptors.file.or(base.descriptors.file),
            directory: override_config
                .descriptors
                .directory
                .or(base.descriptors.directory),
        },
        tools: ToolsConfig {
            wmctrl: override_config.tools.wmctrl.or(base.tools.wmctrl),
            xdotool: override_config.tools.xdotool.or(base.tools.xdotool),
            notify_send: override_config.tools.notify_send.or(base.tools.notify_send),
            timeout_ms: override_config.tools.timeout_ms.or(base.tools.timeout_ms),
        },
        visibility: VisibilityConfig {
            poll_interval_ms: override_config
                .visibility
                .poll_interval_ms
                .or(base.visibility.poll_interval_ms),
            edge_threshold_px: override_config
                .visibility
                .edge_threshold_px
                .or(base.visibility.edge_threshold_px),
            band_start: override_config
                .visibility
                .band_start
                .or(base.visibility.band_start),
            band_end: override_config
                .visibility
                .band_end
                .or(base.visibility.band_end),
            panel_width: override_config
                .visibility
                .panel_width
                .or(base.visibility.panel_width),
            slot_height: override_config
                .visibility
                .slot_height
                .or(base.visibility.slot_height),
        },
        refresh: RefreshConfig {
            interval_ms: override_config
                .refresh
                .interval_ms
                .or(base.refresh.interval_ms),
        },
        reconcile: ReconcileConfig {
            surface_unmatched: override_config.reconcile.surface_unmatched
                || base.reconcile.surface_unmatched,
            ignored_classes: override_config
                .reconcile
                .ignored_classes
                .or(base.reconcile.ignored_classes),
        },
        notifications: NotificationConfig {
            enabled: override_config.notifications.enabled || base.notifications.enabled,
        },
    }
}
