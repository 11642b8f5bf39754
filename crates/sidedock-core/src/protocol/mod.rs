//! JSONL wire protocol between the dock and its renderer.

pub mod codec;
pub mod errors;
pub mod messages;

pub use codec::{read_message, write_message};
pub use errors::ProtocolError;
pub use messages::{DockAction, DockEvent};
