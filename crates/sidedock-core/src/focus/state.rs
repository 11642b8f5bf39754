use serde::{Deserialize, Serialize};

/// Single-slot record of the window the dock last raised.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Focused(String),
}

/// What an activation request resolves to, before any command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Launch,
    Focus(String),
    Minimize(String),
}

impl FocusState {
    /// Decide the transition for a click on `window_id`.
    ///
    /// No window id (or an empty one) always launches. Only the most
    /// recently raised window is eligible for toggle-minimize.
    pub fn plan(&self, window_id: Option<&str>) -> Transition {
        match (window_id.filter(|id| !id.is_empty()), self) {
            (None, _) => Transition::Launch,
            (Some(id), FocusState::Focused(current)) if current == id => {
                Transition::Minimize(id.to_string())
            }
            (Some(id), _) => Transition::Focus(id.to_string()),
        }
    }

    pub fn focused_window(&self) -> Option<&str> {
        match self {
            FocusState::Idle => None,
            FocusState::Focused(id) => Some(id),
        }
    }
}

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActivationOutcome {
    Launched { command: String },
    Focused { window_id: String },
    Minimized { window_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_window_launches_from_any_state() {
        assert_eq!(FocusState::Idle.plan(None), Transition::Launch);
        assert_eq!(
            FocusState::Focused("0x01".to_string()).plan(Some("")),
            Transition::Launch
        );
    }

    #[test]
    fn test_idle_focuses() {
        assert_eq!(
            FocusState::Idle.plan(Some("0x01")),
            Transition::Focus("0x01".to_string())
        );
    }

    #[test]
    fn test_same_window_minimizes() {
        let state = FocusState::Focused("0x01".to_string());
        assert_eq!(
            state.plan(Some("0x01")),
            Transition::Minimize("0x01".to_string())
        );
    }

    #[test]
    fn test_other_window_switches() {
        let state = FocusState::Focused("0x01".to_string());
        assert_eq!(
            state.plan(Some("0x02")),
            Transition::Focus("0x02".to_string())
        );
    }

    #[test]
    fn test_outcome_wire_format() {
        let json = serde_json::to_value(ActivationOutcome::Minimized {
            window_id: "0x01".to_string(),
        })
        .unwrap();
        assert_eq!(json["action"], "minimized");
        assert_eq!(json["window_id"], "0x01");
    }
}
