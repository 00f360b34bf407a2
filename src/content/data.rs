//! Data definitions for boss content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The BossDesignRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Boss designs (bosses.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct BossDesign {
    pub id: String,
    pub name: String,
    pub visual: BossVisualDef,
    pub base_speed: f32,
    pub base_health: f32,
    pub base_damage: f32,
    #[serde(default = "one")]
    pub hp_multiplier: f32,
    #[serde(default = "one")]
    pub damage_multiplier: f32,
    pub phases: Vec<PhaseDef>,
    #[serde(default)]
    pub enrage: EnrageDef,
}

fn one() -> f32 {
    1.0
}

impl BossDesign {
    /// Highest phase number this design declares.
    pub fn final_phase(&self) -> u32 {
        self.phases.iter().map(|p| p.phase).max().unwrap_or(1)
    }

    /// Nearest concrete phase config at or below `phase`.
    /// Falls back to the first declared phase if nothing qualifies.
    pub fn phase_at_or_below(&self, phase: u32) -> Option<&PhaseDef> {
        self.phases
            .iter()
            .filter(|p| p.phase <= phase)
            .max_by_key(|p| p.phase)
            .or_else(|| self.phases.first())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct BossVisualDef {
    pub radius: f32,
    pub color: [f32; 3],
}

impl Default for BossVisualDef {
    fn default() -> Self {
        Self {
            radius: 32.0,
            color: [0.9, 0.1, 0.1],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PhaseDef {
    pub phase: u32,
    /// Phase becomes active once the HP ratio is at or below this value
    pub hp_threshold: f32,
    #[serde(default)]
    pub abilities: Vec<AbilityDef>,
    #[serde(default)]
    pub add_waves: Vec<AddWaveDef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect)]
pub struct EnrageDef {
    /// Seconds of fighting before enrage; the tuning default applies when absent
    #[serde(default)]
    pub timer_seconds: Option<f32>,
    #[serde(default)]
    pub description: String,
}

// ============================================================================
// Abilities
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AbilityDef {
    pub id: String,
    pub cooldown: f32,
    pub damage_multiplier: f32,
    pub kind: AbilityKind,
    #[serde(default)]
    pub telegraph: TelegraphShape,
    #[serde(default)]
    pub telegraph_duration: f32,
}

impl AbilityDef {
    /// True when this ability shows a warning before resolving.
    pub fn has_visible_telegraph(&self) -> bool {
        self.telegraph_duration > 0.0 && self.telegraph != TelegraphShape::None
    }
}

/// How the executor resolves an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum AbilityKind {
    /// Dash toward where the player stood at invocation
    Charge,
    /// Projectile burst fired the moment the ability is chosen
    InstantRanged { count: u32 },
    /// Projectile burst fired once the telegraph completes
    TelegraphedRanged { count: u32 },
    /// Anchor/marker abilities with no projectiles
    Utility,
}

impl AbilityKind {
    /// Authoring helper mapping a naming hint to a projectile count.
    pub fn burst_count_for(hint: &str) -> u32 {
        let hint = hint.to_ascii_lowercase();
        if ["burst", "volley", "shard"].iter().any(|k| hint.contains(k)) {
            4
        } else if ["barrage", "spray", "storm"].iter().any(|k| hint.contains(k)) {
            6
        } else if ["nova", "spiral"].iter().any(|k| hint.contains(k)) {
            8
        } else if ["breath", "beam"].iter().any(|k| hint.contains(k)) {
            5
        } else if hint.contains("bolt") {
            2
        } else {
            3
        }
    }

    pub fn projectile_count(&self) -> Option<u32> {
        match self {
            AbilityKind::InstantRanged { count } | AbilityKind::TelegraphedRanged { count } => {
                Some(*count)
            }
            AbilityKind::Charge | AbilityKind::Utility => None,
        }
    }
}

/// Warning shape drawn before an attack resolves.
/// Unknown names in content fall back to `Circle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
#[serde(from = "String", into = "String")]
pub enum TelegraphShape {
    #[default]
    Circle,
    Cone,
    Line,
    Ring,
    Pulse,
    GroundMarker,
    ScreenFlash,
    None,
}

impl TelegraphShape {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "circle" => TelegraphShape::Circle,
            "cone" => TelegraphShape::Cone,
            "line" => TelegraphShape::Line,
            "ring" => TelegraphShape::Ring,
            "pulse" => TelegraphShape::Pulse,
            "ground_marker" | "groundmarker" => TelegraphShape::GroundMarker,
            "screen_flash" | "screenflash" => TelegraphShape::ScreenFlash,
            "none" => TelegraphShape::None,
            other => {
                warn!("Unknown telegraph shape '{}', using circle", other);
                TelegraphShape::Circle
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TelegraphShape::Circle => "circle",
            TelegraphShape::Cone => "cone",
            TelegraphShape::Line => "line",
            TelegraphShape::Ring => "ring",
            TelegraphShape::Pulse => "pulse",
            TelegraphShape::GroundMarker => "ground_marker",
            TelegraphShape::ScreenFlash => "screen_flash",
            TelegraphShape::None => "none",
        }
    }
}

impl From<String> for TelegraphShape {
    fn from(name: String) -> Self {
        TelegraphShape::parse(&name)
    }
}

impl From<TelegraphShape> for String {
    fn from(shape: TelegraphShape) -> Self {
        shape.name().to_string()
    }
}

// ============================================================================
// Add waves
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AddWaveDef {
    pub groups: Vec<AddGroupDef>,
    /// 0 = one-shot on phase entry, > 0 = recurring every N seconds
    #[serde(default)]
    pub interval: f32,
    #[serde(default)]
    pub formation: Formation,
}

impl AddWaveDef {
    pub fn is_one_shot(&self) -> bool {
        self.interval <= 0.0
    }

    pub fn total_count(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AddGroupDef {
    pub enemy_type: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum Formation {
    #[default]
    Surround,
}

// ============================================================================
// Add archetypes (adds.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AddArchetypeDef {
    pub id: String,
    pub name: String,
    pub health: f32,
    pub damage: f32,
    pub move_speed: f32,
    pub radius: f32,
    pub color: [f32; 3],
    /// Extra health per boss level above 1
    #[serde(default)]
    pub health_per_level: f32,
}
