//! Boss domain: spawning helpers for bosses, adds and boss projectiles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::boss::components::{
    AddEnemy, Boss, BossLevel, BossProjectile, BossStats, Health, ProjectileLifetime,
};
use crate::boss::resources::EncounterTuning;
use crate::content::{AddArchetypeDef, BossDesign};
use crate::movement::GameLayer;

fn rgb(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

/// Spawn a boss driven by `design`.
pub fn spawn_boss(
    commands: &mut Commands,
    design: &BossDesign,
    position: Vec2,
    level: u32,
) -> Entity {
    let radius = design.visual.radius;
    let health = design.base_health * design.hp_multiplier;

    info!(
        "Spawning boss '{}' ({}) at ({:.0}, {:.0}) with {:.0} HP",
        design.name, design.id, position.x, position.y, health
    );

    commands
        .spawn((
            // Identity
            (
                Boss {
                    design_id: design.id.clone(),
                },
                BossLevel(level.max(1)),
                BossStats::from_design(design),
                Health::new(health),
            ),
            // Rendering
            (
                Sprite {
                    color: rgb(design.visual.color),
                    custom_size: Some(Vec2::splat(radius * 2.0)),
                    ..default()
                },
                Transform::from_xyz(position.x, position.y, 1.0),
            ),
            // Physics
            (
                RigidBody::Kinematic,
                Collider::circle(radius),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player, GameLayer::Wall]),
                LinearVelocity::default(),
            ),
        ))
        .id()
}

/// Spawn one add from its archetype, scaled by the summoner's level.
pub fn spawn_add(
    commands: &mut Commands,
    archetype: &AddArchetypeDef,
    summoner: Entity,
    position: Vec2,
    level: u32,
) -> Entity {
    let health = archetype.health + archetype.health_per_level * level.saturating_sub(1) as f32;

    commands
        .spawn((
            AddEnemy {
                enemy_type: archetype.id.clone(),
                summoner,
                damage: archetype.damage,
                move_speed: archetype.move_speed,
            },
            Health::new(health),
            Sprite {
                color: rgb(archetype.color),
                custom_size: Some(Vec2::splat(archetype.radius * 2.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.8),
            RigidBody::Kinematic,
            Collider::circle(archetype.radius),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player, GameLayer::Wall]),
            LinearVelocity::default(),
        ))
        .id()
}

/// Spawn a boss projectile as a sensor on the enemy hitbox layer.
pub fn spawn_projectile(
    commands: &mut Commands,
    owner: Entity,
    position: Vec2,
    velocity: Vec2,
    damage: f32,
    tuning: &EncounterTuning,
) -> Entity {
    let size = tuning.projectile_radius * 2.0;

    commands
        .spawn((
            BossProjectile { damage, owner },
            ProjectileLifetime(tuning.projectile_lifetime),
            Sprite {
                color: Color::srgb(1.0, 0.5, 0.2),
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.9),
            RigidBody::Kinematic,
            Collider::circle(tuning.projectile_radius),
            Sensor,
            CollisionLayers::new(GameLayer::EnemyHitbox, [GameLayer::Player]),
            LinearVelocity(velocity),
        ))
        .id()
}
