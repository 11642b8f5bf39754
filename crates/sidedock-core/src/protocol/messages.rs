use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::focus::ActivationOutcome;
use crate::reconcile::ReconciledEntry;
use crate::visibility::PanelGeometry;
use crate::windows::WindowClassGroup;

/// Dock -> renderer messages, one JSON object per line on stdout.
///
/// Each variant maps to a JSONL message with `"type"` as the tag field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DockEvent {
    /// Full reconciled view. Sent at startup and on a `refresh` action.
    #[serde(rename = "apps")]
    Apps {
        apps: Vec<ReconciledEntry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unmatched: Option<Vec<WindowClassGroup>>,
    },

    /// Periodic running-window snapshot, not reconciled.
    #[serde(rename = "update")]
    Update {
        apps: Vec<WindowClassGroup>,
        captured_at: DateTime<Utc>,
    },

    #[serde(rename = "show")]
    Show(PanelGeometry),

    #[serde(rename = "hide")]
    Hide,

    #[serde(rename = "activated")]
    Activated { outcome: ActivationOutcome },

    #[serde(rename = "error")]
    Error { code: String, message: String },
}

/// Renderer -> dock messages, one JSON object per line on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DockAction {
    /// A click on an application slot. Without a window id the command is
    /// launched.
    #[serde(rename = "activate")]
    Activate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window_id: Option<String>,
        exec_command: String,
    },

    /// The pointer left the panel. Ignored while the pointer is on the edge.
    #[serde(rename = "hide")]
    Hide,

    #[serde(rename = "refresh")]
    Refresh,

    #[serde(rename = "quit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_action_parses_without_window_id() {
        let action: DockAction =
            serde_json::from_str(r#"{"type":"activate","exec_command":"firefox %U"}"#).unwrap();
        assert_eq!(
            action,
            DockAction::Activate {
                window_id: None,
                exec_command: "firefox %U".to_string()
            }
        );
    }

    #[test]
    fn test_unit_actions_parse() {
        let quit: DockAction = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        let hide: DockAction = serde_json::from_str(r#"{"type":"hide"}"#).unwrap();
        assert_eq!(quit, DockAction::Quit);
        assert_eq!(hide, DockAction::Hide);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(serde_json::from_str::<DockAction>(r#"{"type":"explode"}"#).is_err());
    }

    #[test]
    fn test_show_event_is_flat() {
        let event = DockEvent::Show(PanelGeometry {
            x: 0,
            y: 392,
            width: 85,
            height: 296,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "show");
        assert_eq!(json["y"], 392);
        assert_eq!(json["height"], 296);
    }

    #[test]
    fn test_apps_event_omits_absent_unmatched() {
        let event = DockEvent::Apps {
            apps: Vec::new(),
            unmatched: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"apps","apps":[]}"#);
    }

    #[test]
    fn test_error_event() {
        let event = DockEvent::Error {
            code: "FOCUS_FAILED".to_string(),
            message: "boom".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], "FOCUS_FAILED");
    }
}
