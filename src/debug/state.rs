//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the encounter overlay is visible
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Actions bound to debug hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleInfo,
    SpawnBoss,
    ChipBossHealth,
    ToggleMorePhases,
    DumpRuntime,
}

impl DebugAction {
    pub const ALL: [DebugAction; 5] = [
        DebugAction::ToggleInfo,
        DebugAction::SpawnBoss,
        DebugAction::ChipBossHealth,
        DebugAction::ToggleMorePhases,
        DebugAction::DumpRuntime,
    ];

    pub fn key(self) -> KeyCode {
        match self {
            DebugAction::ToggleInfo => KeyCode::F1,
            DebugAction::SpawnBoss => KeyCode::F2,
            DebugAction::ChipBossHealth => KeyCode::F3,
            DebugAction::ToggleMorePhases => KeyCode::F4,
            DebugAction::DumpRuntime => KeyCode::F5,
        }
    }
}
