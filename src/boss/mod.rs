//! Boss domain: phase resolution, ability scheduling, telegraphs, add waves
//! and enrage, driven once per fixed step for every boss.

mod abilities;
mod adds;
mod brain;
mod components;
mod effects;
mod enrage;
mod events;
mod phase;
mod resources;
mod runtime;
mod spawn;
mod systems;
mod telegraph;
#[cfg(test)]
mod tests;

pub use components::{Boss, Health};
pub use effects::PendingEffects;
pub use events::{BossAbilityUsedEvent, BossEnragedEvent, BossPhaseChangeEvent};
pub use resources::{EncounterClock, EncounterRng, EncounterTuning};
pub use runtime::{BossRuntime, BossRuntimeTable, WaveKey};
pub use spawn::spawn_boss;
pub use telegraph::TelegraphQueue;

use bevy::prelude::*;

use crate::boss::systems::{
    apply_encounter_effects, despawn_defeated_bosses, release_despawned_bosses,
    seed_encounter_rng, tick_projectile_lifetimes, update_bosses,
};
use crate::boss::telegraph::animate_telegraph_markers;

pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        let fixed_hz = app
            .world()
            .get_resource::<EncounterTuning>()
            .map(|tuning| tuning.fixed_hz)
            .unwrap_or_else(|| EncounterTuning::default().fixed_hz);

        app.insert_resource(Time::<Fixed>::from_hz(fixed_hz))
            .init_resource::<EncounterTuning>()
            .init_resource::<EncounterClock>()
            .init_resource::<EncounterRng>()
            .init_resource::<BossRuntimeTable>()
            .init_resource::<TelegraphQueue>()
            .init_resource::<PendingEffects>()
            .add_message::<BossPhaseChangeEvent>()
            .add_message::<BossEnragedEvent>()
            .add_message::<BossAbilityUsedEvent>()
            .add_systems(Startup, seed_encounter_rng)
            .add_systems(
                FixedUpdate,
                (
                    update_bosses,
                    apply_encounter_effects,
                    tick_projectile_lifetimes,
                    despawn_defeated_bosses,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (release_despawned_bosses, animate_telegraph_markers),
            );
    }
}
