//! Debug domain: dev-tools hotkeys for boss encounters.
//!
//! - F1: toggle the encounter overlay
//! - F2: spawn a boss near the player
//! - F3: chip 10% off every boss
//! - F4: toggle the more_phases modifier
//! - F5: dump runtime state as JSON to the log

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
