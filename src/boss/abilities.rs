//! Boss domain: ability scheduling under cooldown and ability execution.

use bevy::prelude::*;

use crate::boss::effects::EncounterEffect;
use crate::boss::resources::EncounterTuning;
use crate::boss::runtime::BossRuntime;
use crate::boss::telegraph::{TelegraphQueue, TelegraphResolution};
use crate::content::{AbilityDef, AbilityKind};

/// Cooldowns within this margin of zero count as ready (absorbs f32 drift)
const READY_EPSILON: f32 = 1e-4;

/// Unit vector from `from` to `to`; `Vec2::X` when the points coincide.
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(Vec2::X)
}

/// Walk the ability list in order, ticking cooldowns, and claim the first ready one.
///
/// Unseen abilities start at `opening_cooldown_factor` of their cooldown.
/// Cooldowns are clamped at zero. Iteration stops at the first ready ability,
/// whose cooldown is reset to `cooldown * cdr`; later abilities are not ticked
/// on that step.
pub fn select_ready_ability<'a>(
    abilities: &'a [AbilityDef],
    runtime: &mut BossRuntime,
    dt: f32,
    cdr: f32,
    tuning: &EncounterTuning,
) -> Option<&'a AbilityDef> {
    for ability in abilities {
        let remaining = runtime
            .ability_cooldowns
            .entry(ability.id.clone())
            .or_insert(ability.cooldown * tuning.opening_cooldown_factor);
        *remaining = (*remaining - dt).max(0.0);

        if *remaining <= READY_EPSILON {
            *remaining = ability.cooldown * cdr;
            return Some(ability);
        }
    }
    None
}

/// Cooldown multiplier for the boss's current state.
pub fn cooldown_rate(runtime: &BossRuntime, tuning: &EncounterTuning) -> f32 {
    if runtime.enraged {
        tuning.enraged_cooldown_multiplier
    } else {
        1.0
    }
}

/// Positions and stats an ability resolves against
#[derive(Debug, Clone, Copy)]
pub struct AbilityContext {
    pub boss: Entity,
    pub boss_pos: Vec2,
    pub player_pos: Vec2,
    pub base_damage: f32,
    pub now: f64,
}

/// Even fan of `count` directions across `spread` radians centred on `direction`.
pub fn burst_directions(direction: Vec2, count: u32, spread: f32) -> Vec<Vec2> {
    if count <= 1 {
        return vec![direction];
    }
    let half = spread * 0.5;
    let step = spread / (count - 1) as f32;
    (0..count)
        .map(|i| Vec2::from_angle(-half + step * i as f32).rotate(direction))
        .collect()
}

/// Spawn a projectile burst from `origin` aimed at `target`.
/// Zero-damage abilities are markers and fire nothing.
pub fn fire_burst(
    owner: Entity,
    origin: Vec2,
    target: Vec2,
    count: u32,
    damage: f32,
    tuning: &EncounterTuning,
    effects: &mut Vec<EncounterEffect>,
) {
    if damage <= 0.0 {
        return;
    }

    let direction = direction_to(origin, target);
    let spread = tuning.burst_spread_degrees.to_radians();
    for dir in burst_directions(direction, count, spread) {
        effects.push(EncounterEffect::SpawnProjectile {
            owner,
            position: origin,
            velocity: dir * tuning.projectile_speed,
            damage,
        });
    }
}

/// Resolve a chosen ability.
///
/// Any ability with a visible telegraph locks the boss and queues its
/// resolution; instant bursts fire straight away whatever they author.
pub fn execute_ability(
    ability: &AbilityDef,
    ctx: &AbilityContext,
    runtime: &mut BossRuntime,
    tuning: &EncounterTuning,
    queue: &mut TelegraphQueue,
    effects: &mut Vec<EncounterEffect>,
) {
    let damage = ctx.base_damage * ability.damage_multiplier;
    let radius = tuning.telegraph_base_radius + damage * tuning.telegraph_damage_radius_factor;
    let direction = direction_to(ctx.boss_pos, ctx.player_pos);

    debug!(
        "Boss {:?} uses '{}' ({:?}, {:.1} damage)",
        ctx.boss, ability.id, ability.kind, damage
    );
    effects.push(EncounterEffect::AbilityUsed {
        boss: ctx.boss,
        ability_id: ability.id.clone(),
    });

    let resolution = match ability.kind {
        AbilityKind::Charge => TelegraphResolution::Charge { direction },
        AbilityKind::TelegraphedRanged { count } if ability.has_visible_telegraph() => {
            TelegraphResolution::Burst {
                ability_id: ability.id.clone(),
                count,
                damage,
            }
        }
        AbilityKind::TelegraphedRanged { count } | AbilityKind::InstantRanged { count } => {
            fire_burst(
                ctx.boss,
                ctx.boss_pos,
                ctx.player_pos,
                count,
                damage,
                tuning,
                effects,
            );
            return;
        }
        AbilityKind::Utility => TelegraphResolution::Unlock {
            ability_id: ability.id.clone(),
        },
    };

    if !ability.has_visible_telegraph() {
        if let TelegraphResolution::Charge { direction } = resolution {
            runtime.start_charge(direction, tuning.charge_duration);
        }
        return;
    }

    runtime.telegraphing = true;
    effects.push(EncounterEffect::ShowTelegraph {
        position: ctx.player_pos,
        radius,
        duration: ability.telegraph_duration,
        shape: ability.telegraph,
        angle: direction.to_angle(),
    });
    queue.schedule(
        ctx.now + ability.telegraph_duration as f64,
        ctx.boss,
        resolution,
    );
}
