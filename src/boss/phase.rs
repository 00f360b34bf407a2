//! Boss domain: HP-threshold phase resolution.

use bevy::prelude::*;
use rand::Rng;

use crate::boss::adds::{WaveOrigin, spawn_phase_entry_waves};
use crate::boss::components::BossStats;
use crate::boss::effects::EncounterEffect;
use crate::boss::resources::EncounterTuning;
use crate::boss::runtime::BossRuntime;
use crate::content::BossDesign;

/// One rung of the phase ladder. Half-step rungs come from the extra-phases modifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStep {
    pub phase: f32,
    pub threshold: f32,
}

impl PhaseStep {
    pub fn target_phase(&self) -> u32 {
        self.phase.ceil() as u32
    }
}

/// Phases above 1 sorted by descending threshold. With `more_phases`, a
/// half-step rung is inserted between every adjacent pair at the mean threshold.
pub fn phase_ladder(design: &BossDesign, more_phases: bool) -> Vec<PhaseStep> {
    let mut ladder: Vec<PhaseStep> = design
        .phases
        .iter()
        .filter(|p| p.phase > 1)
        .map(|p| PhaseStep {
            phase: p.phase as f32,
            threshold: p.hp_threshold,
        })
        .collect();
    ladder.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));

    if more_phases && ladder.len() > 1 {
        let extra: Vec<PhaseStep> = ladder
            .windows(2)
            .map(|pair| PhaseStep {
                phase: pair[0].phase.min(pair[1].phase) + 0.5,
                threshold: (pair[0].threshold + pair[1].threshold) * 0.5,
            })
            .collect();
        ladder.extend(extra);
        ladder.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
    }

    ladder
}

/// The phase to advance to this tick, if any.
///
/// Takes the first rung (highest threshold) that the HP ratio has reached and
/// that is above the current phase, so at most one step happens per tick.
pub fn next_phase(ladder: &[PhaseStep], current_phase: u32, hp_ratio: f32) -> Option<u32> {
    ladder
        .iter()
        .find(|step| step.threshold >= hp_ratio && step.target_phase() > current_phase)
        .map(PhaseStep::target_phase)
}

/// Chase speed for a phase before enrage escalation.
pub fn phase_speed(design: &BossDesign, phase: u32, speed_per_phase: f32) -> f32 {
    design.base_speed + phase.saturating_sub(1) as f32 * speed_per_phase
}

/// Evaluate the ladder and apply at most one transition: chase speed,
/// one-shot adds for the new phase and camera feedback.
/// Returns the new phase if a transition happened.
#[allow(clippy::too_many_arguments)]
pub fn advance_phase(
    design: &BossDesign,
    runtime: &mut BossRuntime,
    stats: &mut BossStats,
    hp_ratio: f32,
    more_phases: bool,
    origin: WaveOrigin,
    tuning: &EncounterTuning,
    rng: &mut impl Rng,
    effects: &mut Vec<EncounterEffect>,
) -> Option<u32> {
    let ladder = phase_ladder(design, more_phases);
    let new_phase = next_phase(&ladder, runtime.current_phase, hp_ratio)?;

    runtime.current_phase = new_phase;

    stats.chase_speed = phase_speed(design, new_phase, tuning.speed_per_phase);
    if runtime.enrage_applied {
        stats.chase_speed *= tuning.enrage_speed_multiplier;
    }

    spawn_phase_entry_waves(design, runtime, new_phase, origin, tuning, rng, effects);

    let phase = new_phase as f32;
    effects.push(EncounterEffect::CameraShake {
        intensity: tuning.shake_intensity_per_phase * phase,
        duration: tuning.shake_seconds_per_phase * phase,
    });
    effects.push(EncounterEffect::PhaseChanged {
        boss: origin.summoner,
        phase: new_phase,
    });

    info!(
        "Boss {:?} ({}) entered phase {} at {:.0}% health",
        origin.summoner,
        design.id,
        new_phase,
        hp_ratio * 100.0
    );

    Some(new_phase)
}
