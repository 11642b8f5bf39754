use std::path::PathBuf;
use std::sync::Arc;

use clap::ArgMatches;
use tracing::warn;

use sidedock_core::{DockConfig, X11Backend};

/// Load the config hierarchy, falling back to defaults on any error.
///
/// Invalid values are treated like unreadable files: the user gets a
/// warning and the built-in defaults.
pub fn load_config_with_warning(matches: &ArgMatches) -> DockConfig {
    let explicit = matches.get_one::<PathBuf>("config");

    match DockConfig::load_hierarchy(explicit.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.sidedock/config.toml and any --config file for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            DockConfig::default()
        }
    }
}

pub fn backend_for(config: &DockConfig) -> Arc<X11Backend> {
    Arc::new(X11Backend::new(&config.tools))
}
