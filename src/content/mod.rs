//! Content domain: boss designs, add archetypes and encounter tuning loaded from RON.

pub(crate) mod builtin;
mod data;
mod loader;
mod registry;
pub(crate) mod validation;

pub use data::*;
pub use loader::load_all_content;
pub use registry::{AddArchetypeRegistry, BossDesignRegistry};
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

use crate::boss::EncounterTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let (designs, archetypes, tuning) = build_content(Path::new(CONTENT_DIR));

        app.register_type::<BossDesign>()
            .register_type::<AddArchetypeDef>()
            .insert_resource(designs)
            .insert_resource(archetypes)
            .insert_resource(tuning);
    }
}

/// Load content from disk and merge it over the built-ins.
/// Load and validation failures are logged; the encounter still runs on built-in data.
pub fn build_content(
    base_path: &Path,
) -> (BossDesignRegistry, AddArchetypeRegistry, EncounterTuning) {
    let (loaded, load_errors) = load_all_content(base_path);
    for error in &load_errors {
        warn!("{}", error);
    }

    let mut archetypes = AddArchetypeRegistry::with_builtins();
    for archetype in loaded.archetypes {
        archetypes.insert(archetype);
    }

    let mut designs = BossDesignRegistry::default();
    for design in loaded.designs {
        designs.insert(design);
    }

    let tuning = loaded.tuning.unwrap_or_else(|| {
        info!("Using default encounter tuning");
        EncounterTuning::default()
    });

    let validation_errors = validate_content(&designs, &archetypes);
    if validation_errors.is_empty() {
        info!("{}", registry::summary(&designs, &archetypes));
    } else {
        for error in &validation_errors {
            error!("{}", error);
        }
        warn!(
            "{} content validation error(s); affected encounters may misbehave",
            validation_errors.len()
        );
    }

    (designs, archetypes, tuning)
}
