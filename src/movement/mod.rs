//! Movement domain: the keyboard-driven arena player.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{GameLayer, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_player_movement, clamp_to_arena, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, (apply_player_movement, clamp_to_arena).chain());
    }
}
