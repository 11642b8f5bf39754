//! Parsers for the line-oriented output of the window tools.

use crate::windows::types::{PointerPosition, RunningInventory, ScreenSize, WindowInstance};

/// Desktop index reported for windows that live on no visible desktop.
pub const NO_DESKTOP: &str = "-1";

/// Minimum number of whitespace-separated fields in a listing line.
const MIN_FIELDS: usize = 4;

/// Parse `wmctrl -l -x` output into a fresh inventory.
///
/// Line format: `<id> <desktop> <class[.instance]> <host> <title...>`.
/// Malformed lines and windows on desktop `-1` are skipped.
pub fn parse_window_list(output: &str) -> RunningInventory {
    let mut inventory = RunningInventory::new();
    for (class, instance) in output.lines().filter_map(parse_window_line) {
        inventory.push(&class, instance);
    }
    inventory
}

/// Parse a single listing line into `(class, instance)`.
pub fn parse_window_line(line: &str) -> Option<(String, WindowInstance)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    if fields[1] == NO_DESKTOP {
        return None;
    }

    let class = fields[2].split('.').next().unwrap_or(fields[2]);
    let title = fields[MIN_FIELDS..].join(" ");

    Some((
        class.to_lowercase(),
        WindowInstance::new(fields[0], title),
    ))
}

/// Parse `xdotool getmouselocation --shell` output (`X=..` / `Y=..` lines).
pub fn parse_pointer_location(output: &str) -> Option<PointerPosition> {
    let mut x = None;
    let mut y = None;
    for line in output.lines() {
        match line.trim().split_once('=') {
            Some(("X", value)) => x = value.trim().parse().ok(),
            Some(("Y", value)) => y = value.trim().parse().ok(),
            _ => {}
        }
    }
    Some(PointerPosition { x: x?, y: y? })
}

/// Parse `xdotool getdisplaygeometry` output (`<width> <height>`).
pub fn parse_display_geometry(output: &str) -> Option<ScreenSize> {
    let mut fields = output.split_whitespace();
    let width = fields.next()?.parse().ok()?;
    let height = fields.next()?.parse().ok()?;
    Some(ScreenSize { width, height })
}
