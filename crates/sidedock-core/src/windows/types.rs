use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single top-level window reported by the window manager.
///
/// `window_id` is an opaque handle and is not stable across window-manager
/// restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInstance {
    #[serde(rename = "windowId")]
    pub window_id: String,
    #[serde(rename = "name")]
    pub title: String,
}

impl WindowInstance {
    pub fn new(window_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            window_id: window_id.into(),
            title: title.into(),
        }
    }
}

/// Running windows grouped by lower-cased window class.
///
/// Rebuilt from scratch on every poll. Classes iterate in sorted order;
/// instances keep the order the listing tool reported them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunningInventory {
    classes: BTreeMap<String, Vec<WindowInstance>>,
}

impl RunningInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance to its class group. The class is lower-cased.
    pub fn push(&mut self, class: &str, instance: WindowInstance) {
        self.classes
            .entry(class.to_lowercase())
            .or_default()
            .push(instance);
    }

    /// Instances for a class, matched case-insensitively.
    pub fn get(&self, class: &str) -> Option<&[WindowInstance]> {
        self.classes.get(&class.to_lowercase()).map(Vec::as_slice)
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(&class.to_lowercase())
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn window_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WindowInstance])> {
        self.classes
            .iter()
            .map(|(class, instances)| (class.as_str(), instances.as_slice()))
    }

    /// Drop the given classes (expected lower-cased) from the inventory.
    pub fn without_classes(mut self, ignored: &[String]) -> Self {
        self.classes.retain(|class, _| !ignored.contains(class));
        self
    }

    /// Flatten into `{class, instances}` groups in class order.
    pub fn into_groups(self) -> Vec<WindowClassGroup> {
        self.classes
            .into_iter()
            .map(|(class, instances)| WindowClassGroup { class, instances })
            .collect()
    }
}

/// One class and its running instances, as pushed in `update` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowClassGroup {
    #[serde(rename = "wmClass")]
    pub class: String,
    pub instances: Vec<WindowInstance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_groups_by_lowercased_class() {
        let mut inventory = RunningInventory::new();
        inventory.push("Firefox", WindowInstance::new("0x01", "a"));
        inventory.push("firefox", WindowInstance::new("0x02", "b"));

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.window_count(), 2);
        let ids: Vec<_> = inventory
            .get("FIREFOX")
            .unwrap()
            .iter()
            .map(|w| w.window_id.as_str())
            .collect();
        assert_eq!(ids, vec!["0x01", "0x02"]);
    }

    #[test]
    fn test_without_classes() {
        let mut inventory = RunningInventory::new();
        inventory.push("sidedock", WindowInstance::new("0x01", "dock"));
        inventory.push("kitty", WindowInstance::new("0x02", "shell"));

        let filtered = inventory.without_classes(&["sidedock".to_string()]);
        assert!(!filtered.contains_class("sidedock"));
        assert!(filtered.contains_class("kitty"));
    }

    #[test]
    fn test_into_groups_sorted_by_class() {
        let mut inventory = RunningInventory::new();
        inventory.push("zed", WindowInstance::new("0x03", "editor"));
        inventory.push("alacritty", WindowInstance::new("0x04", "term"));

        let classes: Vec<_> = inventory
            .into_groups()
            .into_iter()
            .map(|g| g.class)
            .collect();
        assert_eq!(classes, vec!["alacritty", "zed"]);
    }

    #[test]
    fn test_window_instance_wire_names() {
        let json = serde_json::to_value(WindowInstance::new("0x01", "My Page")).unwrap();
        assert_eq!(json["windowId"], "0x01");
        assert_eq!(json["name"], "My Page");
    }

    #[test]
    fn test_group_wire_names() {
        let group = WindowClassGroup {
            class: "firefox".to_string(),
            instances: vec![],
        };
        let json = serde_json::to_value(group).unwrap();
        assert_eq!(json["wmClass"], "firefox");
        assert!(json["instances"].as_array().unwrap().is_empty());
    }
}
