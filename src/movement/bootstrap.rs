//! Movement domain: player bootstrap for the arena.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::boss::Health;
use crate::movement::{GameLayer, Player};

const PLAYER_RADIUS: f32 = 12.0;
const PLAYER_HEALTH: f32 = 100.0;

pub(crate) fn spawn_player(mut commands: Commands, existing: Query<Entity, With<Player>>) {
    if !existing.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    commands.spawn((
        Player,
        Health::new(PLAYER_HEALTH),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(PLAYER_RADIUS),
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Enemy, GameLayer::EnemyHitbox, GameLayer::Wall],
        ),
        LinearVelocity::default(),
    ));
}
