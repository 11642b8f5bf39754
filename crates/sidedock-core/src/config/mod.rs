//! # Configuration System
//!
//! Hierarchical TOML configuration for sidedock.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.sidedock/config.toml`
//! 3. **Explicit config** - `sidedock --config <path>` (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.sidedock/config.toml
//! [descriptors]
//! backend = "file"
//! file = "~/.sidedock/apps.json"
//!
//! [visibility]
//! edge_threshold_px = 3
//!
//! [refresh]
//! interval_ms = 1000
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use sidedock_core::config::DockConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DockConfig::load_hierarchy(None)?;
//!     let timeout = config.tools.timeout();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{
    DescriptorBackend, DescriptorConfig, DockConfig, NotificationConfig, ReconcileConfig,
    RefreshConfig, ToolsConfig, VisibilityConfig,
};
pub use validation::validate_config;

impl DockConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(
        explicit: Option<&std::path::Path>,
    ) -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
