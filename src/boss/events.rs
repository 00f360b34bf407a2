//! Boss domain: encounter messages for other domains.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A boss crossed an HP threshold and entered a new phase
#[derive(Debug)]
pub struct BossPhaseChangeEvent {
    pub boss: Entity,
    pub new_phase: u32,
}

impl Message for BossPhaseChangeEvent {}

/// A boss hit its enrage timer
#[derive(Debug)]
pub struct BossEnragedEvent {
    pub boss: Entity,
}

impl Message for BossEnragedEvent {}

#[derive(Debug)]
pub struct BossAbilityUsedEvent {
    pub boss: Entity,
    pub ability_id: String,
}

impl Message for BossAbilityUsedEvent {}
