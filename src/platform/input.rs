//! Input mapping
//!
//! Keyboard codes follow `KeyboardEvent.code`, so the mapping is layout
//! independent. Pointer clicks always map to `InputAction::Activate`.

/// Discrete input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start, jump or restart depending on the game phase
    Activate,
    /// Demo mode on/off
    ToggleAutopilot,
    /// Switch the leg animation between wall clock and ticks
    ToggleLegClock,
}

/// Map a `KeyboardEvent.code` to an action
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        "Space" => Some(InputAction::Activate),
        "KeyI" => Some(InputAction::ToggleAutopilot),
        "KeyL" => Some(InputAction::ToggleLegClock),
        _ => None,
    }
}
