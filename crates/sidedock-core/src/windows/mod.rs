pub mod errors;
pub mod parser;
pub mod types;

pub use errors::WindowToolError;
pub use parser::{parse_display_geometry, parse_pointer_location, parse_window_list};
pub use types::{PointerPosition, RunningInventory, ScreenSize, WindowClassGroup, WindowInstance};
