//! Debug domain: hotkeys and runtime inspection for boss encounters.

use bevy::prelude::*;
use serde_json::{Value, json};

use crate::boss::{
    Boss, BossRuntime, BossRuntimeTable, EncounterClock, Health, TelegraphQueue, WaveKey,
    spawn_boss,
};
use crate::content::BossDesignRegistry;
use crate::core::{MORE_PHASES_MODIFIER, RunConfig, RunModifiers};
use crate::debug::state::{DebugAction, DebugState};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::Player;

/// Fraction of max health removed by the chip hotkey
const CHIP_FRACTION: f32 = 0.1;

/// JSON view of one boss's runtime state
pub fn runtime_snapshot(entity: Entity, runtime: &BossRuntime) -> Value {
    let mut cooldowns: Vec<(&String, &f32)> = runtime.ability_cooldowns.iter().collect();
    cooldowns.sort_by(|a, b| a.0.cmp(b.0));
    let mut wave_timers: Vec<(&WaveKey, &f32)> = runtime.add_wave_timers.iter().collect();
    wave_timers.sort_by_key(|(key, _)| (key.phase, key.index));
    let mut spawned: Vec<u32> = runtime.phase_adds_spawned.iter().copied().collect();
    spawned.sort_unstable();

    json!({
        "entity": format!("{:?}", entity),
        "phase": runtime.current_phase,
        "phase_adds_spawned": spawned,
        "ability_cooldowns": cooldowns
            .into_iter()
            .map(|(id, remaining)| (id.clone(), json!(remaining)))
            .collect::<serde_json::Map<String, Value>>(),
        "add_wave_timers": wave_timers
            .into_iter()
            .map(|(key, remaining)| (format!("{}:{}", key.phase, key.index), json!(remaining)))
            .collect::<serde_json::Map<String, Value>>(),
        "charging": runtime.charging,
        "charge_remaining": runtime.charge_remaining,
        "telegraphing": runtime.telegraphing,
        "fight_timer": runtime.fight_timer,
        "enraged": runtime.enraged,
        "enrage_music_triggered": runtime.enrage_music_triggered,
    })
}

/// JSON view of every tracked boss, ordered by entity
pub fn encounter_snapshot(
    table: &BossRuntimeTable,
    clock: &EncounterClock,
    pending: usize,
) -> Value {
    let mut bosses: Vec<_> = table.iter().collect();
    bosses.sort_by_key(|(entity, _)| **entity);

    json!({
        "elapsed": clock.elapsed,
        "pending_telegraphs": pending,
        "bosses": bosses
            .into_iter()
            .map(|(entity, runtime)| runtime_snapshot(*entity, runtime))
            .collect::<Vec<_>>(),
    })
}

/// Handle debug hotkeys (F1-F5)
#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut modifiers: ResMut<RunModifiers>,
    registry: Res<BossDesignRegistry>,
    table: Res<BossRuntimeTable>,
    clock: Res<EncounterClock>,
    queue: Res<TelegraphQueue>,
    player_query: Query<&Transform, With<Player>>,
    mut boss_query: Query<(Entity, &Boss, &mut Health)>,
) {
    for action in DebugAction::ALL {
        if !keyboard.just_pressed(action.key()) {
            continue;
        }

        match action {
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
            }
            DebugAction::SpawnBoss => {
                let Ok(player_transform) = player_query.single() else {
                    warn!("[DEBUG] No player to spawn a boss near");
                    continue;
                };
                let pos = player_transform.translation.truncate() + Vec2::new(0.0, 250.0);
                let ids = registry.ids();
                let boss_count = boss_query.iter().count();
                let design = match ids.get(boss_count % ids.len().max(1)) {
                    Some(id) => registry.resolve(id),
                    None => registry.fallback(),
                };
                spawn_boss(&mut commands, design, pos, 1);
                debug_state.set_message(format!("Spawned {}", design.name), 2.0);
                info!("[DEBUG] Spawned boss '{}' at {:?}", design.id, pos);
            }
            DebugAction::ChipBossHealth => {
                for (entity, _, mut health) in &mut boss_query {
                    let amount = health.max * CHIP_FRACTION;
                    health.take_damage(amount);
                    info!(
                        "[DEBUG] Boss {:?} chipped to {:.0}/{:.0}",
                        entity, health.current, health.max
                    );
                }
                debug_state.set_message("Chipped boss health", 2.0);
            }
            DebugAction::ToggleMorePhases => {
                let enabled = modifiers.toggle(MORE_PHASES_MODIFIER);
                let msg = format!(
                    "{} {}",
                    MORE_PHASES_MODIFIER,
                    if enabled { "ON" } else { "OFF" }
                );
                info!("[DEBUG] {}", msg);
                debug_state.set_message(msg, 2.0);
            }
            DebugAction::DumpRuntime => {
                let snapshot = encounter_snapshot(&table, &clock, queue.len());
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(text) => info!("[DEBUG] Encounter runtime:\n{}", text),
                    Err(e) => error!("[DEBUG] Failed to serialize runtime: {}", e),
                }
                debug_state.set_message("Runtime dumped to log", 2.0);
            }
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the encounter overlay with boss state
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    modifiers: Res<RunModifiers>,
    table: Res<BossRuntimeTable>,
    queue: Res<TelegraphQueue>,
    boss_query: Query<(Entity, &Boss, &Health)>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    let Ok((_, mut text)) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    let mut lines = vec![
        format!("Seed: {}", run_config.seed),
        format!(
            "More phases: {}",
            modifiers.has_modifier(MORE_PHASES_MODIFIER)
        ),
        format!(
            "Tracked bosses: {} (pending telegraphs: {})",
            table.len(),
            queue.len()
        ),
    ];
    for (entity, boss, health) in &boss_query {
        let (phase, timer, enraged, busy) = table
            .get(entity)
            .map(|r| (r.current_phase, r.fight_timer, r.enraged, r.is_busy()))
            .unwrap_or((1, 0.0, false, false));
        lines.push(format!(
            "{}: HP {:.0}/{:.0} phase {} t={:.1}s{}{}",
            boss.design_id,
            health.current,
            health.max,
            phase,
            timer,
            if busy { " busy" } else { "" },
            if enraged { " ENRAGED" } else { "" }
        ));
    }
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }

    **text = lines.join("\n");
}
