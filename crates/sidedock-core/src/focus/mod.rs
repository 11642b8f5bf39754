//! Click handling: launch, focus, or toggle-minimize.

pub mod controller;
pub mod errors;
pub mod launch;
pub mod state;

pub use controller::FocusController;
pub use errors::ActivationError;
pub use launch::strip_field_codes;
pub use state::{ActivationOutcome, FocusState, Transition};
