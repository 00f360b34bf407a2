//! Boss domain: side effects produced by a boss tick.
//!
//! The per-boss logic never touches the world directly. It pushes effects
//! that `apply_encounter_effects` turns into spawns and messages.

use bevy::prelude::*;

use crate::content::TelegraphShape;

#[derive(Debug, Clone, PartialEq)]
pub enum EncounterEffect {
    SpawnAdd {
        summoner: Entity,
        enemy_type: String,
        position: Vec2,
        level: u32,
    },
    SpawnProjectile {
        owner: Entity,
        position: Vec2,
        velocity: Vec2,
        damage: f32,
    },
    ShowTelegraph {
        position: Vec2,
        radius: f32,
        duration: f32,
        shape: TelegraphShape,
        angle: f32,
    },
    CameraShake {
        intensity: f32,
        duration: f32,
    },
    MusicCue {
        cue: String,
        transition_ms: u32,
    },
    PhaseChanged {
        boss: Entity,
        phase: u32,
    },
    Enraged {
        boss: Entity,
    },
    AbilityUsed {
        boss: Entity,
        ability_id: String,
    },
}

/// Effects gathered during the fixed step, drained by `apply_encounter_effects`
#[derive(Resource, Debug, Default)]
pub struct PendingEffects {
    pub effects: Vec<EncounterEffect>,
}
