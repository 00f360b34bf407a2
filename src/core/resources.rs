//! Core domain: run configuration and active run modifiers.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;

/// Adds a half-step phase between every pair of boss phases
pub const MORE_PHASES_MODIFIER: &str = "more_phases";

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Run modifiers currently in effect
#[derive(Resource, Debug, Default, Clone)]
pub struct RunModifiers {
    pub active: HashSet<String>,
}

impl RunModifiers {
    pub fn has_modifier(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    pub fn enable(&mut self, id: impl Into<String>) {
        self.active.insert(id.into());
    }

    /// Flip a modifier on or off. Returns whether it is now active.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.active.remove(id) {
            false
        } else {
            self.active.insert(id.to_string());
            true
        }
    }
}

/// Shape of assets/data/modifiers.json
#[derive(Debug, Deserialize)]
pub struct ModifiersJson {
    #[serde(default)]
    pub version: u32,
    /// Fixed run seed; a random one is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub active: Vec<String>,
}

pub fn parse_modifiers(contents: &str) -> Result<ModifiersJson, serde_json::Error> {
    serde_json::from_str(contents)
}
