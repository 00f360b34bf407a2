//! Validation for boss designs and their cross-references.

use super::data::*;
use super::registry::{AddArchetypeRegistry, BossDesignRegistry};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub design_id: String,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BossDesign '{}' field '{}': {}",
            self.design_id, self.field, self.message
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $design:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                design_id: $design.id.clone(),
                field: $field.to_string(),
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate a single design against the known add archetypes.
pub fn validate_design(
    design: &BossDesign,
    archetypes: &AddArchetypeRegistry,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        !design.phases.is_empty(),
        design,
        "phases",
        "at least one phase is required"
    );
    check!(
        errors,
        design.phases.iter().any(|p| p.phase == 1),
        design,
        "phases",
        "phase 1 is missing"
    );
    check!(
        errors,
        design.base_speed >= 0.0,
        design,
        "base_speed",
        "must not be negative"
    );
    check!(
        errors,
        design.base_health > 0.0,
        design,
        "base_health",
        "must be positive"
    );
    check!(
        errors,
        design.hp_multiplier > 0.0,
        design,
        "hp_multiplier",
        "must be positive"
    );
    if let Some(timer) = design.enrage.timer_seconds {
        check!(
            errors,
            timer > 0.0,
            design,
            "enrage.timer_seconds",
            "must be positive, got {}",
            timer
        );
    }

    for pair in design.phases.windows(2) {
        check!(
            errors,
            pair[1].phase > pair[0].phase,
            design,
            "phases",
            "phase {} is declared after phase {}",
            pair[1].phase,
            pair[0].phase
        );
        check!(
            errors,
            pair[1].hp_threshold <= pair[0].hp_threshold,
            design,
            "phases.hp_threshold",
            "phase {} threshold {} is above phase {} threshold {}",
            pair[1].phase,
            pair[1].hp_threshold,
            pair[0].phase,
            pair[0].hp_threshold
        );
    }

    for phase in &design.phases {
        check!(
            errors,
            (0.0..=1.0).contains(&phase.hp_threshold),
            design,
            "phases.hp_threshold",
            "phase {} threshold {} is outside 0..=1",
            phase.phase,
            phase.hp_threshold
        );

        for ability in &phase.abilities {
            check!(
                errors,
                ability.cooldown > 0.0,
                design,
                "abilities.cooldown",
                "ability '{}' in phase {} needs a positive cooldown",
                ability.id,
                phase.phase
            );
            check!(
                errors,
                ability.telegraph_duration >= 0.0,
                design,
                "abilities.telegraph_duration",
                "ability '{}' has a negative telegraph duration",
                ability.id
            );
            if let Some(count) = ability.kind.projectile_count() {
                check!(
                    errors,
                    count > 0,
                    design,
                    "abilities.kind",
                    "ability '{}' fires zero projectiles",
                    ability.id
                );
            }
            if let AbilityKind::InstantRanged { .. } = ability.kind {
                check!(
                    errors,
                    !ability.has_visible_telegraph(),
                    design,
                    "abilities.telegraph",
                    "instant ability '{}' authors a telegraph that is never shown",
                    ability.id
                );
            }
        }

        for (index, wave) in phase.add_waves.iter().enumerate() {
            check!(
                errors,
                wave.interval >= 0.0,
                design,
                "add_waves.interval",
                "phase {} wave {} has a negative interval",
                phase.phase,
                index
            );
            for group in &wave.groups {
                check!(
                    errors,
                    archetypes.get(&group.enemy_type).is_some(),
                    design,
                    "add_waves.groups.enemy_type",
                    "phase {} wave {} references missing add archetype '{}'",
                    phase.phase,
                    index,
                    group.enemy_type
                );
            }
        }
    }

    errors
}

/// Validate every registered design, including the fallback.
/// Returns a list of validation errors, empty if all designs are valid.
pub fn validate_content(
    designs: &BossDesignRegistry,
    archetypes: &AddArchetypeRegistry,
) -> Vec<ValidationError> {
    let mut errors = validate_design(designs.fallback(), archetypes);
    for id in designs.ids() {
        errors.extend(validate_design(designs.resolve(id), archetypes));
    }
    errors
}
