//! Boss domain: unit tests for the encounter engine.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::FRAC_PI_2;

use super::abilities::*;
use super::adds::*;
use super::brain::*;
use super::components::*;
use super::effects::*;
use super::enrage::*;
use super::phase::*;
use super::resources::*;
use super::runtime::*;
use super::systems::*;
use super::telegraph::*;
use crate::content::builtin::generic_design;
use crate::content::validation::validate_design;
use crate::content::{
    AbilityDef, AbilityKind, AddArchetypeRegistry, BossDesign, BossDesignRegistry,
    TelegraphShape,
};
use crate::core::RunModifiers;
use crate::movement::Player;

const DT: f32 = 1.0 / 60.0;

/// Drives one boss through the same steps the orchestrator runs each tick.
struct Harness {
    boss: Entity,
    design: BossDesign,
    runtime: BossRuntime,
    stats: BossStats,
    tuning: EncounterTuning,
    queue: TelegraphQueue,
    rng: ChaCha8Rng,
    effects: Vec<EncounterEffect>,
    clock: f64,
    ticks: u32,
    boss_pos: Vec2,
    player_pos: Vec2,
    hp_ratio: f32,
    more_phases: bool,
}

impl Harness {
    fn new(design: BossDesign) -> Self {
        Self {
            boss: World::new().spawn_empty().id(),
            stats: BossStats::from_design(&design),
            design,
            runtime: BossRuntime::default(),
            tuning: EncounterTuning::default(),
            queue: TelegraphQueue::default(),
            rng: ChaCha8Rng::seed_from_u64(7),
            effects: Vec::new(),
            clock: 0.0,
            ticks: 0,
            boss_pos: Vec2::ZERO,
            player_pos: Vec2::new(0.0, -200.0),
            hp_ratio: 1.0,
            more_phases: false,
        }
    }

    fn tick(&mut self) -> (BossTickOutput, Vec<EncounterEffect>) {
        self.ticks += 1;
        self.clock += DT as f64;

        for pending in self.queue.drain_due(self.clock) {
            resolve_telegraph(
                &pending,
                &mut self.runtime,
                self.boss_pos,
                self.player_pos,
                &self.tuning,
                &mut self.effects,
            );
        }

        let ctx = BossTickContext {
            boss: self.boss,
            design: &self.design,
            boss_pos: self.boss_pos,
            player_pos: self.player_pos,
            hp_ratio: self.hp_ratio,
            level: 1,
            more_phases: self.more_phases,
            now: self.clock,
            dt: DT,
        };
        let mut services = EncounterServices {
            tuning: &self.tuning,
            queue: &mut self.queue,
            rng: &mut self.rng,
            effects: &mut self.effects,
        };
        let output = tick_boss(&ctx, &mut self.runtime, &mut self.stats, &mut services);

        (output, std::mem::take(&mut self.effects))
    }

    /// Tick until `ability_id` is used; returns the tick it happened on.
    fn run_until_used(&mut self, ability_id: &str, max_ticks: u32) -> Option<u32> {
        for _ in 0..max_ticks {
            let (_, effects) = self.tick();
            if effects.iter().any(|e| used(e, ability_id)) {
                return Some(self.ticks);
            }
        }
        None
    }
}

fn used(effect: &EncounterEffect, ability_id: &str) -> bool {
    matches!(effect, EncounterEffect::AbilityUsed { ability_id: id, .. } if id == ability_id)
}

fn count_adds(effects: &[EncounterEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, EncounterEffect::SpawnAdd { .. }))
        .count()
}

fn count_music(effects: &[EncounterEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, EncounterEffect::MusicCue { .. }))
        .count()
}

fn projectiles(effects: &[EncounterEffect]) -> Vec<(Vec2, Vec2, f32)> {
    effects
        .iter()
        .filter_map(|e| match e {
            EncounterEffect::SpawnProjectile {
                position,
                velocity,
                damage,
                ..
            } => Some((*position, *velocity, *damage)),
            _ => None,
        })
        .collect()
}

/// Single-phase design with one telegraphed charge
fn charge_only_design() -> BossDesign {
    let mut design = generic_design();
    design.phases.truncate(1);
    design.phases[0].abilities = vec![AbilityDef {
        id: "lunge".to_string(),
        cooldown: 1.0,
        damage_multiplier: 1.5,
        kind: AbilityKind::Charge,
        telegraph: TelegraphShape::Line,
        telegraph_duration: 0.5,
    }];
    design
}

// ============================================================================
// Ability scheduling
// ============================================================================

#[test]
fn test_first_burst_and_charge_timing() {
    let mut harness = Harness::new(generic_design());

    let burst_tick = harness.run_until_used("burst", 400).expect("burst fires");
    assert!(
        (89..=91).contains(&burst_tick),
        "burst fired on tick {}",
        burst_tick
    );

    let charge_tick = harness.run_until_used("charge", 400).expect("charge fires");
    assert!(
        (179..=182).contains(&charge_tick),
        "charge fired on tick {}",
        charge_tick
    );
}

#[test]
fn test_at_most_one_ability_per_tick_and_cooldowns_never_negative() {
    let mut harness = Harness::new(generic_design());

    for tick in 0..1800 {
        // Drop through the phases over the run
        harness.hp_ratio = 1.0 - tick as f32 / 2000.0;
        let (_, effects) = harness.tick();
        let used_count = effects
            .iter()
            .filter(|e| matches!(e, EncounterEffect::AbilityUsed { .. }))
            .count();
        assert!(used_count <= 1, "{} abilities on tick {}", used_count, tick);
        assert!(harness.runtime.ability_cooldowns.values().all(|cd| *cd >= 0.0));
    }
}

#[test]
fn test_enraged_cooldown_reset_uses_multiplier() {
    let mut harness = Harness::new(generic_design());
    harness.runtime.fight_timer = 500.0;

    harness.run_until_used("burst", 200).expect("burst fires");

    assert!(harness.runtime.enraged);
    let remaining = harness.runtime.ability_cooldowns["burst"];
    assert!((remaining - 3.0 * 0.6).abs() < 1e-5, "remaining {}", remaining);
}

#[test]
fn test_zero_damage_ability_fires_nothing() {
    let tuning = EncounterTuning::default();
    let mut effects = Vec::new();
    let owner = World::new().spawn_empty().id();

    fire_burst(owner, Vec2::ZERO, Vec2::X, 4, 0.0, &tuning, &mut effects);

    assert!(effects.is_empty());
}

#[test]
fn test_burst_spread_is_even_and_centered() {
    let spread = 45f32.to_radians();
    let dirs = burst_directions(Vec2::Y, 4, spread);

    assert_eq!(dirs.len(), 4);
    assert!((dirs[0].angle_to(Vec2::Y) - spread * 0.5).abs() < 1e-4);
    assert!((Vec2::Y.angle_to(dirs[3]) - spread * 0.5).abs() < 1e-4);
    assert!((dirs[0].angle_to(dirs[1]) - dirs[2].angle_to(dirs[3])).abs() < 1e-4);
    assert_eq!(burst_directions(Vec2::Y, 1, spread), vec![Vec2::Y]);
}

#[test]
fn test_direction_defaults_when_on_top_of_player() {
    assert_eq!(direction_to(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)), Vec2::X);
    assert_eq!(direction_to(Vec2::ZERO, Vec2::new(0.0, 3.0)), Vec2::Y);
}

fn anchor_ability(telegraph: TelegraphShape, telegraph_duration: f32) -> AbilityDef {
    AbilityDef {
        id: "anchor".to_string(),
        cooldown: 5.0,
        damage_multiplier: 0.0,
        kind: AbilityKind::Utility,
        telegraph,
        telegraph_duration,
    }
}

fn anchor_context(boss: Entity) -> AbilityContext {
    AbilityContext {
        boss,
        boss_pos: Vec2::ZERO,
        player_pos: Vec2::X * 100.0,
        base_damage: 20.0,
        now: 2.0,
    }
}

#[test]
fn test_utility_marker_locks_and_shows_telegraph() {
    let tuning = EncounterTuning::default();
    let mut runtime = BossRuntime::default();
    let mut queue = TelegraphQueue::default();
    let mut effects = Vec::new();
    let ability = anchor_ability(TelegraphShape::GroundMarker, 0.5);
    let ctx = anchor_context(World::new().spawn_empty().id());

    execute_ability(&ability, &ctx, &mut runtime, &tuning, &mut queue, &mut effects);

    assert!(used(&effects[0], "anchor"));
    assert!(effects.iter().any(|e| matches!(
        e,
        EncounterEffect::ShowTelegraph {
            position,
            shape: TelegraphShape::GroundMarker,
            ..
        } if *position == ctx.player_pos
    )));
    assert!(projectiles(&effects).is_empty());
    assert!(runtime.telegraphing);
    assert_eq!(queue.len(), 1);

    let due = queue.drain_due(2.5);
    assert_eq!(due.len(), 1);
    assert_eq!(
        due[0].resolution,
        TelegraphResolution::Unlock {
            ability_id: "anchor".to_string()
        }
    );

    let mut resolved = Vec::new();
    resolve_telegraph(
        &due[0],
        &mut runtime,
        ctx.boss_pos,
        ctx.player_pos,
        &tuning,
        &mut resolved,
    );
    assert!(!runtime.is_busy());
    assert!(resolved.is_empty());
}

#[test]
fn test_utility_without_telegraph_only_reports_use() {
    let tuning = EncounterTuning::default();
    let mut runtime = BossRuntime::default();
    let mut queue = TelegraphQueue::default();
    let mut effects = Vec::new();
    let ability = anchor_ability(TelegraphShape::None, 0.5);
    let ctx = anchor_context(World::new().spawn_empty().id());

    execute_ability(&ability, &ctx, &mut runtime, &tuning, &mut queue, &mut effects);

    assert_eq!(effects.len(), 1);
    assert!(used(&effects[0], "anchor"));
    assert!(!runtime.is_busy());
    assert_eq!(queue.len(), 0);
}

// ============================================================================
// Telegraphs and charges
// ============================================================================

#[test]
fn test_charge_telegraph_locks_then_charges() {
    let mut harness = Harness::new(charge_only_design());

    // lunge starts at half its cooldown
    let mut telegraph = None;
    for _ in 0..40 {
        let (_, effects) = harness.tick();
        telegraph = effects.into_iter().find_map(|e| match e {
            EncounterEffect::ShowTelegraph {
                position,
                radius,
                duration,
                shape,
                angle,
            } => Some((position, radius, duration, shape, angle)),
            _ => None,
        });
        if telegraph.is_some() {
            break;
        }
    }
    let (position, radius, duration, shape, angle) = telegraph.expect("telegraph shown");
    assert_eq!(position, harness.player_pos);
    assert!((radius - (36.0 + 30.0 * 0.3)).abs() < 1e-4);
    assert_eq!(duration, 0.5);
    assert_eq!(shape, TelegraphShape::Line);
    assert!((angle + FRAC_PI_2).abs() < 1e-4);
    assert!(harness.runtime.telegraphing);
    assert_eq!(harness.queue.len(), 1);

    // Player moves away; the charge keeps its frozen direction
    harness.player_pos = Vec2::new(300.0, 0.0);
    let (output, _) = harness.tick();
    assert_eq!(output.velocity, Vec2::ZERO);

    let mut lock_ticks = 1;
    while harness.runtime.telegraphing {
        let (output, _) = harness.tick();
        if harness.runtime.telegraphing {
            assert_eq!(output.velocity, Vec2::ZERO);
        }
        lock_ticks += 1;
        assert!(lock_ticks < 60, "telegraph never resolved");
    }
    assert!((29..=32).contains(&lock_ticks), "locked for {} ticks", lock_ticks);
    assert!(harness.runtime.charging);

    let (output, _) = harness.tick();
    assert!((output.velocity - Vec2::new(0.0, -200.0)).length() < 1e-3);

    for _ in 0..40 {
        harness.tick();
    }
    assert!(!harness.runtime.charging);
}

/// Consecutive ticks spent dashing at charge speed the first time the boss charges.
fn first_charge_ticks(design: BossDesign) -> u32 {
    let mut harness = Harness::new(design);
    let speed = harness.tuning.charge_speed;
    let mut ticks = 0;
    for _ in 0..200 {
        let (output, _) = harness.tick();
        if (output.velocity.length() - speed).abs() < 1e-3 {
            ticks += 1;
        } else if ticks > 0 {
            break;
        }
    }
    ticks
}

#[test]
fn test_untelegraphed_charge_lasts_as_long_as_telegraphed() {
    let mut instant = charge_only_design();
    instant.phases[0].abilities[0].telegraph = TelegraphShape::None;

    let telegraphed = first_charge_ticks(charge_only_design());
    let untelegraphed = first_charge_ticks(instant);

    assert_eq!(untelegraphed, telegraphed);
    assert!(
        (untelegraphed as f32 * DT - 0.5).abs() < DT,
        "charged for {} ticks",
        untelegraphed
    );
}

#[test]
fn test_telegraphed_burst_fires_from_current_positions() {
    let tuning = EncounterTuning::default();
    let boss = World::new().spawn_empty().id();
    let mut runtime = BossRuntime {
        telegraphing: true,
        ..Default::default()
    };
    let mut effects = Vec::new();
    let pending = PendingTelegraph {
        resolve_at: 1.0,
        boss,
        resolution: TelegraphResolution::Burst {
            ability_id: "volley".to_string(),
            count: 3,
            damage: 24.0,
        },
    };

    let boss_pos = Vec2::new(50.0, 50.0);
    let player_pos = Vec2::new(150.0, 50.0);
    resolve_telegraph(&pending, &mut runtime, boss_pos, player_pos, &tuning, &mut effects);

    assert!(!runtime.telegraphing);
    let shots = projectiles(&effects);
    assert_eq!(shots.len(), 3);
    assert!(shots.iter().all(|(pos, _, dmg)| *pos == boss_pos && *dmg == 24.0));
    assert!((shots[1].1 - Vec2::new(250.0, 0.0)).length() < 1e-3);
}

#[test]
fn test_telegraph_for_missing_boss_is_dropped() {
    let tuning = EncounterTuning::default();
    let boss = World::new().spawn_empty().id();
    let mut table = BossRuntimeTable::default();
    table.get_or_create(boss).telegraphing = true;
    let mut queue = TelegraphQueue::default();
    queue.schedule(0.5, boss, TelegraphResolution::Charge { direction: Vec2::X });
    let mut effects = Vec::new();

    let resolved = resolve_due_telegraphs(
        &mut queue,
        &mut table,
        1.0,
        |_| None,
        Vec2::ZERO,
        &tuning,
        &mut effects,
    );

    assert_eq!(resolved, 0);
    assert_eq!(queue.len(), 0);
    assert!(table.get(boss).is_some_and(|r| !r.charging));
}

#[test]
fn test_telegraph_waits_for_its_time() {
    let tuning = EncounterTuning::default();
    let boss = World::new().spawn_empty().id();
    let mut table = BossRuntimeTable::default();
    table.get_or_create(boss).telegraphing = true;
    let mut queue = TelegraphQueue::default();
    queue.schedule(1.0, boss, TelegraphResolution::Charge { direction: Vec2::Y });
    let mut effects = Vec::new();

    let early = resolve_due_telegraphs(
        &mut queue,
        &mut table,
        0.9,
        |_| Some(Vec2::ZERO),
        Vec2::ZERO,
        &tuning,
        &mut effects,
    );
    assert_eq!(early, 0);
    assert_eq!(queue.len(), 1);

    let due = resolve_due_telegraphs(
        &mut queue,
        &mut table,
        1.0,
        |_| Some(Vec2::ZERO),
        Vec2::ZERO,
        &tuning,
        &mut effects,
    );
    assert_eq!(due, 1);
    let runtime = table.get(boss).expect("runtime kept");
    assert!(runtime.charging && !runtime.telegraphing);
    assert_eq!(runtime.charge_direction, Vec2::Y);
}

#[test]
fn test_releasing_boss_forgets_its_telegraphs() {
    let mut world = World::new();
    let gone = world.spawn_empty().id();
    let alive = world.spawn_empty().id();
    let mut table = BossRuntimeTable::default();
    table.get_or_create(gone);
    table.get_or_create(alive);
    let mut queue = TelegraphQueue::default();
    queue.schedule(2.0, gone, TelegraphResolution::Charge { direction: Vec2::X });
    queue.schedule(1.0, alive, TelegraphResolution::Charge { direction: Vec2::X });

    assert!(table.release(gone).is_some());
    assert_eq!(queue.forget(gone), 1);

    assert!(!table.contains(gone));
    assert_eq!(table.len(), 1);
    let remaining = queue.drain_due(10.0);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].boss, alive);
}

#[test]
fn test_telegraph_visual_ends_after_fade() {
    let fade = 0.2;
    for shape in [
        TelegraphShape::Circle,
        TelegraphShape::Cone,
        TelegraphShape::Line,
        TelegraphShape::Ring,
        TelegraphShape::Pulse,
        TelegraphShape::GroundMarker,
        TelegraphShape::ScreenFlash,
    ] {
        assert!(telegraph_visual(shape, 0.5, 1.0, fade).is_some(), "{:?}", shape);
        assert!(telegraph_visual(shape, 1.25, 1.0, fade).is_none(), "{:?}", shape);
    }
    assert!(telegraph_visual(TelegraphShape::None, 0.0, 1.0, fade).is_none());

    let fading = telegraph_visual(TelegraphShape::ScreenFlash, 1.1, 1.0, fade).expect("fading");
    assert!((fading.alpha - 0.25).abs() < 1e-4);
}

// ============================================================================
// Phases
// ============================================================================

#[test]
fn test_crossing_threshold_enters_phase_two() {
    let mut harness = Harness::new(generic_design());
    harness.hp_ratio = 0.59;

    let (_, effects) = harness.tick();

    assert_eq!(harness.runtime.current_phase, 2);
    assert_eq!(harness.stats.chase_speed, 60.0 + 15.0);
    assert_eq!(count_adds(&effects), 3);
    assert!(effects.iter().any(|e| matches!(
        e,
        EncounterEffect::CameraShake { intensity, .. } if (*intensity - 0.5).abs() < 1e-6
    )));
    assert!(effects.contains(&EncounterEffect::PhaseChanged {
        boss: harness.boss,
        phase: 2,
    }));

    let mut later_adds = 0;
    for _ in 0..600 {
        let (_, effects) = harness.tick();
        later_adds += count_adds(&effects);
    }
    assert_eq!(later_adds, 0, "one-shot wave repeated");
    assert_eq!(harness.runtime.current_phase, 2);
}

#[test]
fn test_one_phase_step_per_tick() {
    let mut harness = Harness::new(generic_design());
    harness.hp_ratio = 0.1;

    harness.tick();
    assert_eq!(harness.runtime.current_phase, 2);
    harness.tick();
    assert_eq!(harness.runtime.current_phase, 3);

    // Healing never moves the boss back
    harness.hp_ratio = 1.0;
    harness.tick();
    assert_eq!(harness.runtime.current_phase, 3);
}

#[test]
fn test_more_phases_inserts_half_steps() {
    let design = generic_design();

    let plain = phase_ladder(&design, false);
    assert_eq!(plain.len(), 2);

    let ladder = phase_ladder(&design, true);
    assert_eq!(ladder.len(), 3);
    assert_eq!(ladder[1].phase, 2.5);
    assert!((ladder[1].threshold - 0.45).abs() < 1e-6);
    assert_eq!(ladder[1].target_phase(), 3);

    assert_eq!(next_phase(&plain, 2, 0.44), None);
    assert_eq!(next_phase(&ladder, 2, 0.44), Some(3));
    assert_eq!(next_phase(&ladder, 1, 0.44), Some(2));
}

#[test]
fn test_more_phases_modifier_reaches_final_phase_early() {
    let mut harness = Harness::new(generic_design());
    harness.more_phases = true;
    harness.hp_ratio = 0.44;

    harness.tick();
    harness.tick();

    assert_eq!(harness.runtime.current_phase, 3);
}

#[test]
fn test_phase_change_keeps_enrage_speed() {
    let mut harness = Harness::new(generic_design());
    harness.runtime.fight_timer = 500.0;
    harness.tick();
    assert_eq!(harness.stats.chase_speed, 90.0);

    harness.hp_ratio = 0.5;
    harness.tick();

    assert_eq!(harness.runtime.current_phase, 2);
    assert!((harness.stats.chase_speed - 75.0 * 1.5).abs() < 1e-4);
}

// ============================================================================
// Enrage
// ============================================================================

#[test]
fn test_enrage_applies_once_at_default_timer() {
    let mut harness = Harness::new(generic_design());
    harness.runtime.fight_timer = 120.0 - DT * 0.5;

    let (_, effects) = harness.tick();

    assert!(harness.runtime.enraged);
    assert_eq!(harness.stats.chase_speed, 90.0);
    assert_eq!(harness.stats.base_damage, 26.0);
    assert_eq!(count_music(&effects), 1);
    assert!(effects.contains(&EncounterEffect::Enraged { boss: harness.boss }));

    let mut later_music = 0;
    for _ in 0..120 {
        let (_, effects) = harness.tick();
        later_music += count_music(&effects);
        assert!(!effects.contains(&EncounterEffect::Enraged { boss: harness.boss }));
    }
    assert_eq!(later_music, 0);
    assert_eq!(harness.stats.chase_speed, 90.0);
    assert_eq!(harness.stats.base_damage, 26.0);
}

#[test]
fn test_custom_enrage_timer_is_respected() {
    let mut design = generic_design();
    design.enrage.timer_seconds = Some(1.0);
    let tuning = EncounterTuning::default();
    assert_eq!(enrage_threshold(&design, &tuning), 1.0);

    let mut harness = Harness::new(design);
    for _ in 0..59 {
        harness.tick();
    }
    assert!(!harness.runtime.enraged);
    for _ in 0..2 {
        harness.tick();
    }
    assert!(harness.runtime.enraged);
}

#[test]
fn test_final_phase_and_enrage_share_music_guard() {
    let mut harness = Harness::new(generic_design());
    harness.hp_ratio = 0.1;

    let mut music = 0;
    for _ in 0..2 {
        let (_, effects) = harness.tick();
        music += count_music(&effects);
    }
    assert_eq!(harness.runtime.current_phase, 3);
    assert_eq!(music, 1);

    harness.runtime.fight_timer = 500.0;
    let (output, effects) = harness.tick();
    assert!(effects.contains(&EncounterEffect::Enraged { boss: harness.boss }));
    assert_eq!(count_music(&effects), 0);
    assert!(output.tint_alpha.is_some());
}

#[test]
fn test_tint_pulses_only_when_enraged_or_final() {
    let mut harness = Harness::new(generic_design());
    let (output, _) = harness.tick();
    assert_eq!(output.tint_alpha, None);

    harness.runtime.fight_timer = 500.0;
    for _ in 0..30 {
        let (output, _) = harness.tick();
        let alpha = output.tint_alpha.expect("enraged tint");
        assert!((0.4 - 1e-4..=1.0 + 1e-4).contains(&alpha));
    }
}

#[test]
fn test_single_phase_design_has_no_final_phase_music() {
    let mut harness = Harness::new(charge_only_design());
    let mut music = 0;
    for _ in 0..10 {
        let (output, effects) = harness.tick();
        music += count_music(&effects);
        assert_eq!(output.tint_alpha, None);
    }
    assert_eq!(music, 0);
}

// ============================================================================
// Adds
// ============================================================================

#[test]
fn test_recurring_wave_timer_and_phase_preservation() {
    let design = generic_design();
    let tuning = EncounterTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut effects = Vec::new();
    let mut runtime = BossRuntime {
        current_phase: 2,
        ..Default::default()
    };
    let origin = WaveOrigin {
        summoner: World::new().spawn_empty().id(),
        center: Vec2::ZERO,
        level: 2,
    };
    let phase_two_key = WaveKey { phase: 2, index: 1 };

    tick_recurring_waves(&design, &mut runtime, origin, 5.0, &tuning, &mut rng, &mut effects);
    tick_recurring_waves(&design, &mut runtime, origin, 5.0, &tuning, &mut rng, &mut effects);
    assert!(effects.is_empty());
    assert_eq!(runtime.add_wave_timers[&phase_two_key], 5.0);

    runtime.current_phase = 3;
    tick_recurring_waves(&design, &mut runtime, origin, 5.0, &tuning, &mut rng, &mut effects);
    assert_eq!(runtime.add_wave_timers[&phase_two_key], 5.0);
    assert_eq!(runtime.add_wave_timers[&WaveKey { phase: 3, index: 1 }], 7.0);

    runtime.current_phase = 2;
    tick_recurring_waves(&design, &mut runtime, origin, 5.0, &tuning, &mut rng, &mut effects);
    assert_eq!(count_adds(&effects), 2);
    assert_eq!(runtime.add_wave_timers[&phase_two_key], 15.0);
    assert!(effects.iter().all(|e| matches!(
        e,
        EncounterEffect::SpawnAdd { enemy_type, level: 2, .. } if enemy_type == "skeleton"
    )));
}

#[test]
fn test_entry_waves_spawn_once_per_phase() {
    let design = generic_design();
    let tuning = EncounterTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut effects = Vec::new();
    let mut runtime = BossRuntime::default();
    let origin = WaveOrigin {
        summoner: World::new().spawn_empty().id(),
        center: Vec2::ZERO,
        level: 1,
    };

    let first = spawn_phase_entry_waves(
        &design,
        &mut runtime,
        3,
        origin,
        &tuning,
        &mut rng,
        &mut effects,
    );
    let second = spawn_phase_entry_waves(
        &design,
        &mut runtime,
        3,
        origin,
        &tuning,
        &mut rng,
        &mut effects,
    );
    assert!(first);
    assert!(!second);

    let types: Vec<&str> = effects
        .iter()
        .filter_map(|e| match e {
            EncounterEffect::SpawnAdd { enemy_type, .. } => Some(enemy_type.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(types, vec!["wraith", "wraith", "skeleton", "skeleton"]);
}

#[test]
fn test_surround_positions_stay_in_ring() {
    let tuning = EncounterTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let center = Vec2::new(100.0, -40.0);

    let positions = surround_positions(center, 8, &tuning, &mut rng);

    assert_eq!(positions.len(), 8);
    for pos in &positions {
        let distance = pos.distance(center);
        assert!((60.0 - 1e-3..=100.0 + 1e-3).contains(&distance), "{}", distance);
    }
}

#[test]
fn test_surround_positions_are_seeded() {
    let tuning = EncounterTuning::default();
    let a = surround_positions(Vec2::ZERO, 5, &tuning, &mut ChaCha8Rng::seed_from_u64(9));
    let b = surround_positions(Vec2::ZERO, 5, &tuning, &mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a, b);
}

// ============================================================================
// Stats and content
// ============================================================================

#[test]
fn test_stats_apply_design_damage_multiplier() {
    let mut design = generic_design();
    design.damage_multiplier = 1.25;
    let stats = BossStats::from_design(&design);
    assert_eq!(stats.base_damage, 25.0);
    assert_eq!(stats.chase_speed, 60.0);
    assert_eq!(phase_speed(&design, 3, 15.0), 90.0);
}

#[test]
fn test_health_percent_is_clamped() {
    let mut health = Health::new(200.0);
    assert_eq!(health.percent(), 1.0);
    assert_eq!(health.take_damage(50.0), 50.0);
    assert_eq!(health.percent(), 0.75);
    assert_eq!(health.take_damage(500.0), 150.0);
    assert!(health.is_dead());
    assert_eq!(Health::new(0.0).percent(), 0.0);
}

#[test]
fn test_harness_designs_are_valid() {
    let archetypes = AddArchetypeRegistry::with_builtins();
    assert!(validate_design(&generic_design(), &archetypes).is_empty());
    assert!(validate_design(&charge_only_design(), &archetypes).is_empty());
}

// ============================================================================
// Orchestrator wiring
// ============================================================================

fn encounter_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<BossDesignRegistry>()
        .init_resource::<EncounterTuning>()
        .init_resource::<RunModifiers>()
        .init_resource::<EncounterClock>()
        .init_resource::<EncounterRng>()
        .init_resource::<BossRuntimeTable>()
        .init_resource::<TelegraphQueue>()
        .init_resource::<PendingEffects>()
        .add_systems(Update, (update_bosses, release_despawned_bosses).chain());
    app
}

fn spawn_test_boss(world: &mut World) -> Entity {
    let design = generic_design();
    world
        .spawn((
            Boss {
                design_id: design.id.clone(),
            },
            BossLevel(1),
            BossStats::from_design(&design),
            Health::new(design.base_health),
            Transform::default(),
            LinearVelocity::default(),
            Sprite::default(),
        ))
        .id()
}

#[test]
fn test_runtime_lifecycle_follows_player_and_boss() {
    let mut app = encounter_app();
    let boss = spawn_test_boss(app.world_mut());

    app.update();
    assert_eq!(app.world().resource::<BossRuntimeTable>().len(), 0);

    app.world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -200.0, 0.0)));
    app.update();
    let table = app.world().resource::<BossRuntimeTable>();
    assert_eq!(table.len(), 1);
    assert!(table.contains(boss));

    app.world_mut().entity_mut(boss).despawn();
    app.update();
    assert_eq!(app.world().resource::<BossRuntimeTable>().len(), 0);
}
