//! Boss domain: time-based enrage escalation and the tint pulse.

use bevy::prelude::*;

use crate::boss::components::BossStats;
use crate::boss::effects::EncounterEffect;
use crate::boss::resources::EncounterTuning;
use crate::boss::runtime::BossRuntime;
use crate::content::BossDesign;

pub fn enrage_threshold(design: &BossDesign, tuning: &EncounterTuning) -> f32 {
    design
        .enrage
        .timer_seconds
        .unwrap_or(tuning.default_enrage_seconds)
}

/// Request the enrage music once. Enrage and the final phase share this guard.
pub fn request_enrage_music(
    runtime: &mut BossRuntime,
    tuning: &EncounterTuning,
    effects: &mut Vec<EncounterEffect>,
) {
    if runtime.enrage_music_triggered {
        return;
    }
    runtime.enrage_music_triggered = true;
    effects.push(EncounterEffect::MusicCue {
        cue: tuning.enrage_music_cue.clone(),
        transition_ms: tuning.enrage_music_transition_ms,
    });
}

/// Advance the fight timer and apply the one-time escalation.
pub fn advance_enrage(
    boss: Entity,
    design: &BossDesign,
    runtime: &mut BossRuntime,
    stats: &mut BossStats,
    dt: f32,
    tuning: &EncounterTuning,
    effects: &mut Vec<EncounterEffect>,
) {
    runtime.fight_timer += dt;

    if !runtime.enraged && runtime.fight_timer >= enrage_threshold(design, tuning) {
        runtime.enraged = true;
    }

    if runtime.enraged && !runtime.enrage_applied {
        runtime.enrage_applied = true;
        stats.chase_speed *= tuning.enrage_speed_multiplier;
        stats.base_damage = (stats.base_damage * tuning.enrage_damage_multiplier).round();
        info!(
            "Boss {:?} ({}) enraged after {:.1}s: speed {:.0}, damage {:.0}",
            boss, design.id, runtime.fight_timer, stats.chase_speed, stats.base_damage
        );
        effects.push(EncounterEffect::Enraged { boss });
        request_enrage_music(runtime, tuning, effects);
    }
}

/// Red tint alpha while enraged or in the final phase, `None` otherwise.
/// The final phase also requests the enrage music through the shared guard.
pub fn update_enrage_tint(
    design: &BossDesign,
    runtime: &mut BossRuntime,
    tuning: &EncounterTuning,
    effects: &mut Vec<EncounterEffect>,
) -> Option<f32> {
    let final_phase = runtime.current_phase >= design.final_phase() && design.final_phase() > 1;
    if final_phase {
        request_enrage_music(runtime, tuning, effects);
    }

    if runtime.enraged || final_phase {
        Some(
            tuning.pulse_base_alpha
                + tuning.pulse_amplitude * (runtime.pulse_time * tuning.pulse_frequency).sin(),
        )
    } else {
        None
    }
}
