//! Boss domain: reinforcement waves around the boss.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::boss::effects::EncounterEffect;
use crate::boss::resources::EncounterTuning;
use crate::boss::runtime::{BossRuntime, WaveKey};
use crate::content::{AddWaveDef, BossDesign};

/// Where a wave is spawned and by whom
#[derive(Debug, Clone, Copy)]
pub struct WaveOrigin {
    pub summoner: Entity,
    pub center: Vec2,
    pub level: u32,
}

/// Even ring around `center` with angular jitter and a random radius.
pub fn surround_positions(
    center: Vec2,
    total: u32,
    tuning: &EncounterTuning,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    (0..total)
        .map(|index| {
            let jitter = if tuning.add_angle_jitter > 0.0 {
                rng.random_range(0.0..tuning.add_angle_jitter)
            } else {
                0.0
            };
            let angle = TAU * index as f32 / total as f32 + jitter;
            let distance = if tuning.add_ring_max > tuning.add_ring_min {
                rng.random_range(tuning.add_ring_min..=tuning.add_ring_max)
            } else {
                tuning.add_ring_min
            };
            center + Vec2::from_angle(angle) * distance
        })
        .collect()
}

/// Push one `SpawnAdd` per enemy in the wave, in group order.
pub fn spawn_wave(
    wave: &AddWaveDef,
    origin: WaveOrigin,
    tuning: &EncounterTuning,
    rng: &mut impl Rng,
    effects: &mut Vec<EncounterEffect>,
) {
    let positions = surround_positions(origin.center, wave.total_count(), tuning, rng);
    let enemy_types = wave
        .groups
        .iter()
        .flat_map(|group| std::iter::repeat_n(group.enemy_type.as_str(), group.count as usize));

    for (enemy_type, position) in enemy_types.zip(positions) {
        effects.push(EncounterEffect::SpawnAdd {
            summoner: origin.summoner,
            enemy_type: enemy_type.to_string(),
            position,
            level: origin.level,
        });
    }
}

/// Spawn the one-shot waves of the phase config at or below `phase`, once per phase.
/// Returns true if this call spawned them.
pub fn spawn_phase_entry_waves(
    design: &BossDesign,
    runtime: &mut BossRuntime,
    phase: u32,
    origin: WaveOrigin,
    tuning: &EncounterTuning,
    rng: &mut impl Rng,
    effects: &mut Vec<EncounterEffect>,
) -> bool {
    if !runtime.phase_adds_spawned.insert(phase) {
        return false;
    }
    let Some(phase_def) = design.phase_at_or_below(phase) else {
        return false;
    };

    for wave in phase_def.add_waves.iter().filter(|w| w.is_one_shot()) {
        spawn_wave(wave, origin, tuning, rng, effects);
    }
    true
}

/// Advance recurring wave timers for the active phase only.
/// Timers of other phases keep their stored value.
pub fn tick_recurring_waves(
    design: &BossDesign,
    runtime: &mut BossRuntime,
    origin: WaveOrigin,
    dt: f32,
    tuning: &EncounterTuning,
    rng: &mut impl Rng,
    effects: &mut Vec<EncounterEffect>,
) {
    let Some(phase_def) = design.phase_at_or_below(runtime.current_phase) else {
        return;
    };

    for (index, wave) in phase_def.add_waves.iter().enumerate() {
        if wave.is_one_shot() {
            continue;
        }

        let key = WaveKey {
            phase: phase_def.phase,
            index,
        };
        let timer = runtime.add_wave_timers.entry(key).or_insert(wave.interval);
        *timer -= dt;
        if *timer <= 0.0 {
            *timer = wave.interval;
            debug!(
                "Recurring wave {} of phase {} spawning {} adds",
                index,
                phase_def.phase,
                wave.total_count()
            );
            spawn_wave(wave, origin, tuning, rng, effects);
        }
    }
}
