//! Joins installed descriptors with running windows.
//!
//! Matching is exact after lower-casing: the descriptor name first, then its
//! declared window class. Output order is descriptor order, and every
//! descriptor appears exactly once.

use serde::{Deserialize, Serialize};

use crate::descriptors::ApplicationDescriptor;
use crate::windows::{RunningInventory, WindowClassGroup, WindowInstance};

/// One dock entry: a descriptor and its live windows (possibly none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledEntry {
    #[serde(flatten)]
    pub descriptor: ApplicationDescriptor,
    pub instances: Vec<WindowInstance>,
}

impl ReconciledEntry {
    pub fn is_running(&self) -> bool {
        !self.instances.is_empty()
    }
}

/// The merged view used to render the dock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReconciledView {
    pub entries: Vec<ReconciledEntry>,
}

impl ReconciledView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReconciledEntry> {
        self.entries.iter()
    }
}

/// Identity keys of a descriptor, in lookup order.
///
/// The class key is cut at its first `.`, the same way inventory classes are.
fn identity_keys(descriptor: &ApplicationDescriptor) -> impl Iterator<Item = String> + '_ {
    let class = descriptor
        .window_class
        .split('.')
        .next()
        .unwrap_or_default();
    [descriptor.name.as_str(), class]
        .into_iter()
        .filter(|key| !key.is_empty())
        .map(str::to_lowercase)
}

/// Attach running instances to each descriptor.
///
/// Inventory classes that match no descriptor are dropped; see
/// [`unmatched_classes`] to recover them.
pub fn reconcile(
    descriptors: &[ApplicationDescriptor],
    inventory: &RunningInventory,
) -> ReconciledView {
    let entries = descriptors
        .iter()
        .map(|descriptor| {
            let instances = identity_keys(descriptor)
                .find_map(|key| inventory.get(&key))
                .map(<[WindowInstance]>::to_vec)
                .unwrap_or_default();
            ReconciledEntry {
                descriptor: descriptor.clone(),
                instances,
            }
        })
        .collect();

    ReconciledView { entries }
}

/// Running classes that no descriptor claims, in class order.
pub fn unmatched_classes(
    descriptors: &[ApplicationDescriptor],
    inventory: &RunningInventory,
) -> Vec<WindowClassGroup> {
    let claimed: Vec<String> = descriptors
        .iter()
        .filter_map(|descriptor| {
            identity_keys(descriptor).find(|key| inventory.contains_class(key))
        })
        .collect();

    inventory
        .iter()
        .filter(|(class, _)| !claimed.iter().any(|c| c.as_str() == *class))
        .map(|(class, instances)| WindowClassGroup {
            class: class.to_string(),
            instances: instances.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::parse_window_list;

    fn descriptor(name: &str, class: &str) -> ApplicationDescriptor {
        ApplicationDescriptor {
            name: name.to_string(),
            icon_path: String::new(),
            exec_command: name.to_lowercase(),
            window_class: class.to_string(),
        }
    }

    #[test]
    fn test_firefox_scenario() {
        let inventory =
            parse_window_list("0x01 0  firefox.Firefox host  My Page - Mozilla Firefox");
        let view = reconcile(&[descriptor("Firefox", "firefox")], &inventory);

        assert_eq!(view.len(), 1);
        assert_eq!(
            view.entries[0].instances,
            vec![WindowInstance::new("0x01", "My Page - Mozilla Firefox")]
        );
    }

    #[test]
    fn test_output_follows_descriptor_order_and_length() {
        let inventory = parse_window_list(
            "0x01 0 kitty.kitty host a\n0x02 0 firefox.Firefox host b\n0x03 0 gimp.Gimp host c\n",
        );
        let descriptors = vec![
            descriptor("Zed", "dev.zed.Zed"),
            descriptor("Firefox", ""),
            descriptor("Kitty", ""),
        ];

        let view = reconcile(&descriptors, &inventory);
        let names: Vec<_> = view.iter().map(|e| e.descriptor.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Firefox", "Kitty"]);
        assert!(!view.entries[0].is_running());
        assert!(view.entries[1].is_running());
        assert!(view.entries[2].is_running());
    }

    #[test]
    fn test_length_preserved_with_empty_inventory() {
        let descriptors = vec![descriptor("A", ""), descriptor("B", ""), descriptor("A", "")];
        let view = reconcile(&descriptors, &RunningInventory::new());
        assert_eq!(view.len(), descriptors.len());
        assert!(view.iter().all(|e| e.instances.is_empty()));
    }

    #[test]
    fn test_window_class_is_second_identity_key() {
        let inventory = parse_window_list("0x01 0 code.Code host main.rs\n");
        let view = reconcile(&[descriptor("Visual Studio Code", "Code")], &inventory);
        assert_eq!(view.entries[0].instances.len(), 1);
    }

    #[test]
    fn test_dotted_window_class_matches_inventory_key() {
        let inventory = parse_window_list("0x01 0 org.gnome.Nautilus host Home\n");
        let descriptors = vec![descriptor("Files", "org.gnome.Nautilus")];

        let view = reconcile(&descriptors, &inventory);
        assert_eq!(view.entries[0].instances[0].window_id, "0x01");
        assert!(unmatched_classes(&descriptors, &inventory).is_empty());
    }

    #[test]
    fn test_name_match_takes_precedence_over_class() {
        let inventory = parse_window_list(
            "0x01 0 terminal.Terminal host name-match\n0x02 0 xterm.XTerm host class-match\n",
        );
        let view = reconcile(&[descriptor("Terminal", "xterm")], &inventory);
        assert_eq!(view.entries[0].instances[0].window_id, "0x01");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let inventory = parse_window_list("0x01 0 KITTY.kitty host shell\n");
        let view = reconcile(&[descriptor("kItTy", "")], &inventory);
        assert!(view.entries[0].is_running());
    }

    #[test]
    fn test_unmatched_classes() {
        let inventory = parse_window_list(
            "0x01 0 kitty.kitty host a\n0x02 0 gimp.Gimp host b\n0x03 0 code.Code host c\n",
        );
        let descriptors = vec![descriptor("Kitty", ""), descriptor("VS Code", "code")];

        let unmatched = unmatched_classes(&descriptors, &inventory);
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].class, "gimp");
        assert_eq!(unmatched[0].instances[0].window_id, "0x02");
    }

    #[test]
    fn test_entry_wire_format_is_flat() {
        let inventory = parse_window_list("0x01 0 firefox.Firefox host Page\n");
        let view = reconcile(&[descriptor("Firefox", "firefox")], &inventory);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json[0]["name"], "Firefox");
        assert_eq!(json[0]["wmClass"], "firefox");
        assert_eq!(json[0]["execPath"], "firefox");
        assert_eq!(json[0]["instances"][0]["windowId"], "0x01");
    }
}
