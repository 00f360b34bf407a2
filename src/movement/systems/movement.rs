//! Movement domain: top-down locomotion for the arena player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning, Player};

/// Move `current` toward `target` by at most `max_delta`.
pub fn approach(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + delta / distance * max_delta
    }
}

pub(crate) fn apply_player_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();
    let target = input.axis * tuning.max_speed;
    let rate = if input.axis == Vec2::ZERO {
        tuning.decel
    } else {
        tuning.accel
    };

    for mut velocity in &mut query {
        velocity.0 = approach(velocity.0, target, rate * dt);
    }
}

pub(crate) fn clamp_to_arena(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let bound = tuning.arena_half_extent;
    for mut transform in &mut query {
        transform.translation.x = transform.translation.x.clamp(-bound, bound);
        transform.translation.y = transform.translation.y.clamp(-bound, bound);
    }
}
