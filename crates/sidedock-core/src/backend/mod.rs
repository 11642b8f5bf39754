//! Desktop backend trait definition.

use std::future::Future;

use crate::windows::{PointerPosition, RunningInventory, ScreenSize, WindowToolError};

pub mod command;
pub mod x11;

#[cfg(test)]
pub(crate) mod mock;

pub use x11::X11Backend;

/// Interface to the window manager and the process launcher.
///
/// Each method maps to one external facility. Every call is independent:
/// nothing is cached between invocations.
pub trait DesktopBackend: Send + Sync + 'static {
    /// The canonical name of this backend (e.g., "x11").
    fn name(&self) -> &'static str;

    /// List all windows on all desktops, grouped by lower-cased class.
    fn list_windows(
        &self,
    ) -> impl Future<Output = Result<RunningInventory, WindowToolError>> + Send;

    /// Raise and focus a window.
    fn activate_window(
        &self,
        window_id: &str,
    ) -> impl Future<Output = Result<(), WindowToolError>> + Send;

    /// Minimize a window.
    fn minimize_window(
        &self,
        window_id: &str,
    ) -> impl Future<Output = Result<(), WindowToolError>> + Send;

    /// Current global pointer position.
    fn pointer_location(
        &self,
    ) -> impl Future<Output = Result<PointerPosition, WindowToolError>> + Send;

    /// Size of the screen the dock lives on.
    fn screen_size(&self) -> impl Future<Output = Result<ScreenSize, WindowToolError>> + Send;

    /// Spawn `command` through the shell as a detached process.
    ///
    /// `command` is trusted input: it is interpreted by `sh -c` verbatim.
    fn launch(&self, command: &str) -> Result<(), WindowToolError>;
}
