//! sidedock-core: Core library for a left-edge application dock
//!
//! Lists running windows through the window manager, merges them with the
//! installed applications, and decides when the panel shows and what a
//! click does. Rendering is left to a separate process that talks to
//! [`dock::Dock::serve`] over JSONL.
//!
//! # Main Entry Points
//!
//! - [`dock`] - The dock service and its session loop
//! - [`reconcile`] - Merge descriptors with running windows
//! - [`focus`] - Launch / focus / toggle-minimize
//! - [`visibility`] - Edge-triggered show and hide
//! - [`config`] - Configuration management

pub mod backend;
pub mod config;
pub mod descriptors;
pub mod dock;
pub mod errors;
pub mod events;
pub mod focus;
pub mod logging;
pub mod notify;
pub mod protocol;
pub mod reconcile;
pub mod refresh;
pub mod visibility;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use backend::{DesktopBackend, X11Backend};
pub use config::DockConfig;
pub use descriptors::{ApplicationDescriptor, DescriptorLoadError, DescriptorSource};
pub use dock::Dock;
pub use errors::{ConfigError, DockError};
pub use focus::{ActivationError, ActivationOutcome, FocusController, FocusState};
pub use protocol::{DockAction, DockEvent, ProtocolError};
pub use reconcile::{ReconciledEntry, ReconciledView, reconcile};
pub use visibility::{PanelCommand, PanelGeometry};
pub use windows::{RunningInventory, WindowClassGroup, WindowInstance, WindowToolError};

// Re-export logging initialization
pub use logging::init_logging;
