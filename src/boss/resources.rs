//! Boss domain: tuning, clock and RNG resources.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Engine-wide constants for boss encounters.
/// Loaded from assets/data/encounter_tuning.ron; missing fields keep their defaults.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EncounterTuning {
    /// Fixed simulation rate for boss logic
    pub fixed_hz: f64,
    /// Chase speed gained per phase above 1
    pub speed_per_phase: f32,
    /// Fraction of a cooldown used the first time an ability is seen
    pub opening_cooldown_factor: f32,
    pub enraged_cooldown_multiplier: f32,
    pub default_enrage_seconds: f32,
    pub enrage_speed_multiplier: f32,
    pub enrage_damage_multiplier: f32,
    pub enrage_music_cue: String,
    pub enrage_music_transition_ms: u32,
    pub charge_speed: f32,
    pub charge_duration: f32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_lifetime: f32,
    /// Total angular spread of a projectile burst
    pub burst_spread_degrees: f32,
    pub telegraph_base_radius: f32,
    pub telegraph_damage_radius_factor: f32,
    pub telegraph_fade_seconds: f32,
    pub add_ring_min: f32,
    pub add_ring_max: f32,
    pub add_angle_jitter: f32,
    pub shake_intensity_per_phase: f32,
    pub shake_seconds_per_phase: f32,
    pub pulse_frequency: f32,
    pub pulse_base_alpha: f32,
    pub pulse_amplitude: f32,
}

impl Default for EncounterTuning {
    fn default() -> Self {
        Self {
            fixed_hz: 60.0,
            speed_per_phase: 15.0,
            opening_cooldown_factor: 0.5,
            enraged_cooldown_multiplier: 0.6,
            default_enrage_seconds: 120.0,
            enrage_speed_multiplier: 1.5,
            enrage_damage_multiplier: 1.3,
            enrage_music_cue: "boss_enrage".to_string(),
            enrage_music_transition_ms: 1500,
            charge_speed: 200.0,
            charge_duration: 0.5,
            projectile_speed: 250.0,
            projectile_radius: 6.0,
            projectile_lifetime: 3.0,
            burst_spread_degrees: 45.0,
            telegraph_base_radius: 36.0,
            telegraph_damage_radius_factor: 0.3,
            telegraph_fade_seconds: 0.2,
            add_ring_min: 60.0,
            add_ring_max: 100.0,
            add_angle_jitter: 0.5,
            shake_intensity_per_phase: 0.25,
            shake_seconds_per_phase: 0.15,
            pulse_frequency: 8.0,
            pulse_base_alpha: 0.7,
            pulse_amplitude: 0.3,
        }
    }
}

/// Simulation time accumulated from fixed-step deltas.
/// Telegraph resolutions are scheduled against this clock, never frame time.
#[derive(Resource, Debug, Default)]
pub struct EncounterClock {
    pub elapsed: f64,
}

impl EncounterClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }
}

/// Seeded RNG for add placement jitter
#[derive(Resource, Debug)]
pub struct EncounterRng(pub ChaCha8Rng);

impl EncounterRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for EncounterRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
