//! Core domain: run configuration, modifiers and camera.

mod resources;
mod systems;

pub use resources::{MORE_PHASES_MODIFIER, RunConfig, RunModifiers};
pub use systems::{apply_modifiers_file, load_modifiers_file};

use bevy::prelude::*;
use std::path::Path;

use crate::content::CONTENT_DIR;
use crate::core::systems::setup_camera;

pub const MODIFIERS_FILE: &str = "modifiers.json";

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let mut config = RunConfig::default();
        let mut modifiers = RunModifiers::default();
        if let Some(file) = load_modifiers_file(&Path::new(CONTENT_DIR).join(MODIFIERS_FILE)) {
            apply_modifiers_file(file, &mut config, &mut modifiers);
        }

        app.insert_resource(config)
            .insert_resource(modifiers)
            .add_systems(Startup, setup_camera);
    }
}
