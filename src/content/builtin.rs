//! Built-in content used when data files are missing or a boss id is unknown.

use super::data::*;

pub const GENERIC_BOSS_ID: &str = "generic";

fn ranged(id: &str, cooldown: f32, damage_multiplier: f32) -> AbilityDef {
    AbilityDef {
        id: id.to_string(),
        cooldown,
        damage_multiplier,
        kind: AbilityKind::InstantRanged {
            count: AbilityKind::burst_count_for(id),
        },
        telegraph: TelegraphShape::None,
        telegraph_duration: 0.0,
    }
}

fn telegraphed(
    id: &str,
    cooldown: f32,
    damage_multiplier: f32,
    shape: TelegraphShape,
    duration: f32,
) -> AbilityDef {
    AbilityDef {
        id: id.to_string(),
        cooldown,
        damage_multiplier,
        kind: AbilityKind::TelegraphedRanged {
            count: AbilityKind::burst_count_for(id),
        },
        telegraph: shape,
        telegraph_duration: duration,
    }
}

fn charge(cooldown: f32) -> AbilityDef {
    AbilityDef {
        id: "charge".to_string(),
        cooldown,
        damage_multiplier: 1.5,
        kind: AbilityKind::Charge,
        telegraph: TelegraphShape::Line,
        telegraph_duration: 0.8,
    }
}

fn wave(groups: &[(&str, u32)], interval: f32) -> AddWaveDef {
    AddWaveDef {
        groups: groups
            .iter()
            .map(|(enemy_type, count)| AddGroupDef {
                enemy_type: enemy_type.to_string(),
                count: *count,
            })
            .collect(),
        interval,
        formation: Formation::Surround,
    }
}

/// The nameless three-phase boss every unknown id resolves to.
pub fn generic_design() -> BossDesign {
    BossDesign {
        id: GENERIC_BOSS_ID.to_string(),
        name: "Nameless Horror".to_string(),
        visual: BossVisualDef::default(),
        base_speed: 60.0,
        base_health: 600.0,
        base_damage: 20.0,
        hp_multiplier: 1.0,
        damage_multiplier: 1.0,
        phases: vec![
            PhaseDef {
                phase: 1,
                hp_threshold: 1.0,
                abilities: vec![ranged("burst", 3.0, 1.0), charge(6.0)],
                add_waves: Vec::new(),
            },
            PhaseDef {
                phase: 2,
                hp_threshold: 0.6,
                abilities: vec![
                    ranged("burst", 2.5, 1.0),
                    charge(5.0),
                    telegraphed("volley", 7.0, 1.2, TelegraphShape::Circle, 1.0),
                ],
                add_waves: vec![wave(&[("skeleton", 3)], 0.0), wave(&[("skeleton", 2)], 15.0)],
            },
            PhaseDef {
                phase: 3,
                hp_threshold: 0.3,
                abilities: vec![
                    telegraphed("nova", 8.0, 1.4, TelegraphShape::Ring, 1.2),
                    charge(4.0),
                    ranged("burst", 2.0, 1.0),
                ],
                add_waves: vec![
                    wave(&[("wraith", 2), ("skeleton", 2)], 0.0),
                    wave(&[("wraith", 1)], 12.0),
                ],
            },
        ],
        enrage: EnrageDef {
            timer_seconds: None,
            description: "Grows frantic when the fight drags on".to_string(),
        },
    }
}

/// Add archetypes referenced by the built-in design.
pub fn builtin_archetypes() -> Vec<AddArchetypeDef> {
    vec![
        AddArchetypeDef {
            id: "skeleton".to_string(),
            name: "Skeleton".to_string(),
            health: 30.0,
            damage: 8.0,
            move_speed: 70.0,
            radius: 10.0,
            color: [0.85, 0.85, 0.75],
            health_per_level: 6.0,
        },
        AddArchetypeDef {
            id: "wraith".to_string(),
            name: "Wraith".to_string(),
            health: 45.0,
            damage: 12.0,
            move_speed: 95.0,
            radius: 12.0,
            color: [0.5, 0.4, 0.8],
            health_per_level: 9.0,
        },
    ]
}
