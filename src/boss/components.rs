//! Boss domain: components for bosses, their adds and projectiles.

use bevy::prelude::*;

use crate::content::BossDesign;

/// Marks a boss and names the design that drives it
#[derive(Component, Debug, Clone)]
pub struct Boss {
    pub design_id: String,
}

/// Level passed on to spawned adds
#[derive(Component, Debug, Clone, Copy)]
pub struct BossLevel(pub u32);

impl Default for BossLevel {
    fn default() -> Self {
        Self(1)
    }
}

/// Mutable combat stats the engine escalates over the fight
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BossStats {
    pub chase_speed: f32,
    pub base_damage: f32,
}

impl BossStats {
    pub fn from_design(design: &BossDesign) -> Self {
        Self {
            chase_speed: design.base_speed,
            base_damage: (design.base_damage * design.damage_multiplier).round(),
        }
    }
}

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Reinforcement spawned by a boss add wave
#[derive(Component, Debug, Clone)]
pub struct AddEnemy {
    pub enemy_type: String,
    pub summoner: Entity,
    pub damage: f32,
    pub move_speed: f32,
}

/// Hazard fired by a boss ability
#[derive(Component, Debug)]
pub struct BossProjectile {
    pub damage: f32,
    pub owner: Entity,
}

/// Seconds until a hazard is despawned
#[derive(Component, Debug)]
pub struct ProjectileLifetime(pub f32);
