//! Boss domain: per-boss runtime state and the table that owns it.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

/// Key of a recurring add wave: phase number and index within that phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaveKey {
    pub phase: u32,
    pub index: usize,
}

/// Mutable encounter state for one boss.
#[derive(Debug, Clone)]
pub struct BossRuntime {
    pub current_phase: u32,
    pub phase_adds_spawned: HashSet<u32>,
    pub ability_cooldowns: HashMap<String, f32>,
    pub add_wave_timers: HashMap<WaveKey, f32>,
    pub charging: bool,
    pub charge_remaining: f32,
    pub charge_direction: Vec2,
    pub telegraphing: bool,
    pub fight_timer: f32,
    pub enraged: bool,
    pub enrage_applied: bool,
    pub enrage_music_triggered: bool,
    pub pulse_time: f32,
    /// Set once the boss has run its first tick
    pub started: bool,
}

impl Default for BossRuntime {
    fn default() -> Self {
        Self {
            current_phase: 1,
            phase_adds_spawned: HashSet::new(),
            ability_cooldowns: HashMap::new(),
            add_wave_timers: HashMap::new(),
            charging: false,
            charge_remaining: 0.0,
            charge_direction: Vec2::X,
            telegraphing: false,
            fight_timer: 0.0,
            enraged: false,
            enrage_applied: false,
            enrage_music_triggered: false,
            pulse_time: 0.0,
            started: false,
        }
    }
}

impl BossRuntime {
    /// True while a charge or telegraph locks out all other logic.
    pub fn is_busy(&self) -> bool {
        self.charging || self.telegraphing
    }

    pub fn start_charge(&mut self, direction: Vec2, duration: f32) {
        self.charging = true;
        self.charge_remaining = duration;
        self.charge_direction = direction;
    }
}

/// Runtime state for every live boss, keyed by entity.
/// Entries are created lazily on a boss's first tick and released when
/// the boss entity is despawned.
#[derive(Resource, Debug, Default)]
pub struct BossRuntimeTable {
    runtimes: HashMap<Entity, BossRuntime>,
}

impl BossRuntimeTable {
    pub fn get_or_create(&mut self, boss: Entity) -> &mut BossRuntime {
        self.runtimes.entry(boss).or_default()
    }

    pub fn get(&self, boss: Entity) -> Option<&BossRuntime> {
        self.runtimes.get(&boss)
    }

    pub fn get_mut(&mut self, boss: Entity) -> Option<&mut BossRuntime> {
        self.runtimes.get_mut(&boss)
    }

    pub fn release(&mut self, boss: Entity) -> Option<BossRuntime> {
        self.runtimes.remove(&boss)
    }

    pub fn contains(&self, boss: Entity) -> bool {
        self.runtimes.contains_key(&boss)
    }

    pub fn len(&self) -> usize {
        self.runtimes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &BossRuntime)> {
        self.runtimes.iter()
    }
}
