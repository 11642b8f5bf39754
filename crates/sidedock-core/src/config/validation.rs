//! Configuration validation logic.

use crate::config::types::{DescriptorBackend, DockConfig};
use crate::errors::ConfigError;

/// Validate a DockConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `0 <= band_start < band_end <= 1`
/// - poll interval, refresh interval and tool timeout must be non-zero
/// - panel width and slot height must be non-zero
/// - the desktop-entries backend needs a non-empty directory
pub fn validate_config(config: &DockConfig) -> Result<(), ConfigError> {
    let visibility = &config.visibility;
    let (start, end) = (visibility.band_start(), visibility.band_end());
    if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start >= end {
        return Err(invalid(format!(
            "Invalid visibility band {start}..{end}: expected 0 <= band_start < band_end <= 1"
        )));
    }

    if visibility.poll_interval().is_zero() {
        return Err(invalid("visibility.poll_interval_ms must be greater than 0"));
    }
    if config.refresh.interval().is_zero() {
        return Err(invalid("refresh.interval_ms must be greater than 0"));
    }
    if config.tools.timeout().is_zero() {
        return Err(invalid("tools.timeout_ms must be greater than 0"));
    }
    if visibility.panel_width() == 0 || visibility.slot_height() == 0 {
        return Err(invalid(
            "visibility.panel_width and visibility.slot_height must be greater than 0",
        ));
    }

    if config.descriptors.backend() == DescriptorBackend::DesktopEntries
        && config.descriptors.directory().as_os_str().is_empty()
    {
        return Err(invalid(
            "descriptors.directory must be set for the desktop-entries backend",
        ));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.into(),
    }
}
