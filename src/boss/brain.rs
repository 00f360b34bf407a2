//! Boss domain: the per-boss tick that ties phases, enrage, abilities and adds together.

use bevy::prelude::*;
use rand::Rng;

use crate::boss::abilities::{
    AbilityContext, cooldown_rate, execute_ability, fire_burst, select_ready_ability,
};
use crate::boss::adds::{WaveOrigin, spawn_phase_entry_waves, tick_recurring_waves};
use crate::boss::components::BossStats;
use crate::boss::effects::EncounterEffect;
use crate::boss::enrage::{advance_enrage, update_enrage_tint};
use crate::boss::phase::advance_phase;
use crate::boss::resources::EncounterTuning;
use crate::boss::runtime::BossRuntime;
use crate::boss::telegraph::{PendingTelegraph, TelegraphQueue, TelegraphResolution};
use crate::content::BossDesign;

/// Read-only inputs for one boss on one tick
#[derive(Debug, Clone, Copy)]
pub struct BossTickContext<'a> {
    pub boss: Entity,
    pub design: &'a BossDesign,
    pub boss_pos: Vec2,
    pub player_pos: Vec2,
    pub hp_ratio: f32,
    pub level: u32,
    pub more_phases: bool,
    /// Encounter clock at the start of this tick
    pub now: f64,
    pub dt: f32,
}

/// Shared services a boss tick writes into
pub struct EncounterServices<'a, R: Rng> {
    pub tuning: &'a EncounterTuning,
    pub queue: &'a mut TelegraphQueue,
    pub rng: &'a mut R,
    pub effects: &'a mut Vec<EncounterEffect>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossTickOutput {
    pub velocity: Vec2,
    pub tint_alpha: Option<f32>,
}

/// Run one simulation step for a boss.
///
/// Order: phase, enrage, then either the active charge/telegraph sub-state
/// alone, or ability scheduling followed by recurring adds and chase movement.
pub fn tick_boss<R: Rng>(
    ctx: &BossTickContext,
    runtime: &mut BossRuntime,
    stats: &mut BossStats,
    services: &mut EncounterServices<R>,
) -> BossTickOutput {
    let design = ctx.design;
    let tuning = services.tuning;
    let origin = WaveOrigin {
        summoner: ctx.boss,
        center: ctx.boss_pos,
        level: ctx.level,
    };

    runtime.pulse_time += ctx.dt;

    if !runtime.started {
        runtime.started = true;
        let opening_phase = runtime.current_phase;
        spawn_phase_entry_waves(
            design,
            runtime,
            opening_phase,
            origin,
            tuning,
            services.rng,
            services.effects,
        );
    }

    advance_phase(
        design,
        runtime,
        stats,
        ctx.hp_ratio,
        ctx.more_phases,
        origin,
        tuning,
        services.rng,
        services.effects,
    );

    advance_enrage(
        ctx.boss,
        design,
        runtime,
        stats,
        ctx.dt,
        tuning,
        services.effects,
    );
    let tint_alpha = update_enrage_tint(design, runtime, tuning, services.effects);

    if runtime.charging {
        return BossTickOutput {
            velocity: step_charge(runtime, ctx.dt, tuning),
            tint_alpha,
        };
    }

    if runtime.telegraphing {
        return BossTickOutput {
            velocity: Vec2::ZERO,
            tint_alpha,
        };
    }

    if let Some(phase_def) = design.phase_at_or_below(runtime.current_phase) {
        let cdr = cooldown_rate(runtime, tuning);
        if let Some(ability) =
            select_ready_ability(&phase_def.abilities, runtime, ctx.dt, cdr, tuning)
        {
            let ability_ctx = AbilityContext {
                boss: ctx.boss,
                boss_pos: ctx.boss_pos,
                player_pos: ctx.player_pos,
                base_damage: stats.base_damage,
                now: ctx.now,
            };
            execute_ability(
                ability,
                &ability_ctx,
                runtime,
                tuning,
                services.queue,
                services.effects,
            );
        }
    }

    tick_recurring_waves(
        design,
        runtime,
        origin,
        ctx.dt,
        tuning,
        services.rng,
        services.effects,
    );

    // An untelegraphed charge that started this tick counts this tick too
    let velocity = if runtime.charging {
        step_charge(runtime, ctx.dt, tuning)
    } else if runtime.telegraphing {
        Vec2::ZERO
    } else {
        (ctx.player_pos - ctx.boss_pos).normalize_or_zero() * stats.chase_speed
    };

    BossTickOutput {
        velocity,
        tint_alpha,
    }
}

/// Dash velocity for this tick; ends the charge once its time runs out.
fn step_charge(runtime: &mut BossRuntime, dt: f32, tuning: &EncounterTuning) -> Vec2 {
    let velocity = runtime.charge_direction * tuning.charge_speed;
    runtime.charge_remaining -= dt;
    if runtime.charge_remaining <= 0.0 {
        runtime.charging = false;
        runtime.charge_remaining = 0.0;
    }
    velocity
}

/// Complete a due telegraph: unlock the boss, then start its charge or fire
/// its burst from where the boss and player are now.
pub fn resolve_telegraph(
    pending: &PendingTelegraph,
    runtime: &mut BossRuntime,
    boss_pos: Vec2,
    player_pos: Vec2,
    tuning: &EncounterTuning,
    effects: &mut Vec<EncounterEffect>,
) {
    runtime.telegraphing = false;

    match &pending.resolution {
        TelegraphResolution::Charge { direction } => {
            runtime.start_charge(*direction, tuning.charge_duration);
        }
        TelegraphResolution::Burst {
            ability_id,
            count,
            damage,
        } => {
            debug!("Telegraph for '{}' resolved", ability_id);
            fire_burst(
                pending.boss,
                boss_pos,
                player_pos,
                *count,
                *damage,
                tuning,
                effects,
            );
        }
        TelegraphResolution::Unlock { ability_id } => {
            debug!("Telegraph for '{}' resolved", ability_id);
        }
    }
}
