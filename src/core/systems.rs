//! Core domain: camera setup and run modifier loading.

use bevy::prelude::*;
use std::path::Path;

use crate::core::resources::{ModifiersJson, RunConfig, RunModifiers, parse_modifiers};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Read the modifiers file. Missing or malformed files leave the run unmodified.
pub fn load_modifiers_file(path: &Path) -> Option<ModifiersJson> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("No run modifiers loaded from {}: {}", path.display(), e);
            return None;
        }
    };

    match parse_modifiers(&contents) {
        Ok(m) => Some(m),
        Err(e) => {
            error!("Failed to parse run modifiers {}: {}", path.display(), e);
            None
        }
    }
}

/// Apply a parsed modifiers file to the run resources.
pub fn apply_modifiers_file(
    file: ModifiersJson,
    config: &mut RunConfig,
    modifiers: &mut RunModifiers,
) {
    if let Some(seed) = file.seed {
        config.seed = seed;
    }
    for id in file.active {
        modifiers.enable(id);
    }
    info!(
        "Loaded run modifiers v{}: {:?} (seed {})",
        file.version, modifiers.active, config.seed
    );
}
