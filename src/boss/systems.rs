//! Boss domain: ECS systems driving encounters.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::boss::brain::{BossTickContext, EncounterServices, resolve_telegraph, tick_boss};
use crate::boss::components::{Boss, BossLevel, BossStats, Health, ProjectileLifetime};
use crate::boss::effects::{EncounterEffect, PendingEffects};
use crate::boss::events::{BossAbilityUsedEvent, BossEnragedEvent, BossPhaseChangeEvent};
use crate::boss::resources::{EncounterClock, EncounterRng, EncounterTuning};
use crate::boss::runtime::BossRuntimeTable;
use crate::boss::spawn::{spawn_add, spawn_projectile};
use crate::boss::telegraph::{TelegraphQueue, spawn_telegraph_marker};
use crate::content::{AddArchetypeRegistry, BossDesignRegistry};
use crate::core::{MORE_PHASES_MODIFIER, RunConfig, RunModifiers};
use crate::feedback::{CameraShakeEvent, MusicCueEvent};
use crate::movement::Player;

/// Reseed the encounter RNG from the run seed.
pub(crate) fn seed_encounter_rng(config: Res<RunConfig>, mut rng: ResMut<EncounterRng>) {
    *rng = EncounterRng::from_seed(config.seed);
    info!("Encounter RNG seeded with {}", config.seed);
}

/// Resolve every telegraph due at `now`.
///
/// `boss_position` returns `None` for bosses that no longer exist; their
/// entries are dropped without firing, as are entries whose runtime is gone.
/// Returns the number of telegraphs resolved.
pub fn resolve_due_telegraphs(
    queue: &mut TelegraphQueue,
    table: &mut BossRuntimeTable,
    now: f64,
    boss_position: impl Fn(Entity) -> Option<Vec2>,
    player_pos: Vec2,
    tuning: &EncounterTuning,
    effects: &mut Vec<EncounterEffect>,
) -> usize {
    let mut resolved = 0;
    for pending in queue.drain_due(now) {
        let (Some(boss_pos), Some(runtime)) =
            (boss_position(pending.boss), table.get_mut(pending.boss))
        else {
            debug!("Dropping telegraph for missing boss {:?}", pending.boss);
            continue;
        };
        resolve_telegraph(&pending, runtime, boss_pos, player_pos, tuning, effects);
        resolved += 1;
    }
    resolved
}

/// Per-tick orchestrator: resolve due telegraphs, then tick every boss.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub(crate) fn update_bosses(
    time: Res<Time>,
    mut clock: ResMut<EncounterClock>,
    registry: Res<BossDesignRegistry>,
    tuning: Res<EncounterTuning>,
    modifiers: Res<RunModifiers>,
    mut table: ResMut<BossRuntimeTable>,
    mut queue: ResMut<TelegraphQueue>,
    mut rng: ResMut<EncounterRng>,
    mut pending: ResMut<PendingEffects>,
    player_query: Query<&Transform, (With<Player>, Without<Boss>)>,
    mut bosses: Query<
        (
            Entity,
            &Boss,
            &BossLevel,
            &Health,
            &mut BossStats,
            &Transform,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        Without<Player>,
    >,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    let dt = time.delta_secs();
    clock.advance(dt);
    let now = clock.elapsed;

    let tuning = &*tuning;
    let more_phases = modifiers.has_modifier(MORE_PHASES_MODIFIER);
    let mut effects = std::mem::take(&mut pending.effects);

    resolve_due_telegraphs(
        &mut queue,
        &mut table,
        now,
        |boss| {
            bosses
                .get(boss)
                .ok()
                .map(|(_, _, _, _, _, transform, _, _)| transform.translation.truncate())
        },
        player_pos,
        tuning,
        &mut effects,
    );

    for (entity, boss, level, health, mut stats, transform, mut velocity, mut sprite) in
        &mut bosses
    {
        if !table.contains(entity) && !registry.contains(&boss.design_id) {
            debug!(
                "Unknown boss design '{}' for {:?}, using generic",
                boss.design_id, entity
            );
        }
        let design = registry.resolve(&boss.design_id);
        let runtime = table.get_or_create(entity);

        let ctx = BossTickContext {
            boss: entity,
            design,
            boss_pos: transform.translation.truncate(),
            player_pos,
            hp_ratio: health.percent(),
            level: level.0,
            more_phases,
            now,
            dt,
        };
        let mut services = EncounterServices {
            tuning,
            queue: &mut queue,
            rng: &mut rng.0,
            effects: &mut effects,
        };

        let output = tick_boss(&ctx, runtime, &mut stats, &mut services);

        velocity.0 = output.velocity;
        sprite.color = match output.tint_alpha {
            Some(alpha) => Color::srgba(1.0, 0.15, 0.15, alpha),
            None => {
                let [r, g, b] = design.visual.color;
                Color::srgb(r, g, b)
            }
        };
    }

    pending.effects = effects;
}

/// Turn queued effects into spawns and messages.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_encounter_effects(
    mut commands: Commands,
    mut pending: ResMut<PendingEffects>,
    archetypes: Res<AddArchetypeRegistry>,
    tuning: Res<EncounterTuning>,
    mut phase_events: MessageWriter<BossPhaseChangeEvent>,
    mut enraged_events: MessageWriter<BossEnragedEvent>,
    mut ability_events: MessageWriter<BossAbilityUsedEvent>,
    mut shake_events: MessageWriter<CameraShakeEvent>,
    mut music_events: MessageWriter<MusicCueEvent>,
) {
    for effect in pending.effects.drain(..) {
        match effect {
            EncounterEffect::SpawnAdd {
                summoner,
                enemy_type,
                position,
                level,
            } => match archetypes.get(&enemy_type) {
                Some(archetype) => {
                    spawn_add(&mut commands, archetype, summoner, position, level);
                }
                None => warn!("Unknown add type '{}', skipping spawn", enemy_type),
            },
            EncounterEffect::SpawnProjectile {
                owner,
                position,
                velocity,
                damage,
            } => {
                spawn_projectile(&mut commands, owner, position, velocity, damage, &tuning);
            }
            EncounterEffect::ShowTelegraph {
                position,
                radius,
                duration,
                shape,
                angle,
            } => {
                spawn_telegraph_marker(
                    &mut commands,
                    position,
                    radius,
                    duration,
                    shape,
                    angle,
                    tuning.telegraph_fade_seconds,
                );
            }
            EncounterEffect::CameraShake {
                intensity,
                duration,
            } => {
                shake_events.write(CameraShakeEvent {
                    intensity,
                    duration,
                });
            }
            EncounterEffect::MusicCue { cue, transition_ms } => {
                music_events.write(MusicCueEvent { cue, transition_ms });
            }
            EncounterEffect::PhaseChanged { boss, phase } => {
                phase_events.write(BossPhaseChangeEvent {
                    boss,
                    new_phase: phase,
                });
            }
            EncounterEffect::Enraged { boss } => {
                enraged_events.write(BossEnragedEvent { boss });
            }
            EncounterEffect::AbilityUsed { boss, ability_id } => {
                ability_events.write(BossAbilityUsedEvent { boss, ability_id });
            }
        }
    }
}

pub(crate) fn tick_projectile_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ProjectileLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Despawn bosses whose health has run out.
pub(crate) fn despawn_defeated_bosses(
    mut commands: Commands,
    query: Query<(Entity, &Boss, &Health)>,
) {
    for (entity, boss, health) in &query {
        if health.is_dead() {
            info!("Boss {:?} ({}) defeated", entity, boss.design_id);
            commands.entity(entity).despawn();
        }
    }
}

/// Release runtime state and pending telegraphs of despawned bosses.
pub(crate) fn release_despawned_bosses(
    mut removed: RemovedComponents<Boss>,
    mut table: ResMut<BossRuntimeTable>,
    mut queue: ResMut<TelegraphQueue>,
) {
    for entity in removed.read() {
        let had_runtime = table.release(entity).is_some();
        let dropped = queue.forget(entity);
        if had_runtime || dropped > 0 {
            debug!(
                "Released boss {:?} (dropped {} pending telegraph(s))",
                entity, dropped
            );
        }
    }
}
