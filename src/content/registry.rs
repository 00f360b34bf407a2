//! Registries providing HashMap lookups for loaded boss content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::builtin::{builtin_archetypes, generic_design};
use super::data::*;

/// Boss designs by id, with the generic design as fallback.
#[derive(Resource)]
pub struct BossDesignRegistry {
    pub designs: HashMap<String, BossDesign>,
    fallback: BossDesign,
}

impl Default for BossDesignRegistry {
    fn default() -> Self {
        Self {
            designs: HashMap::new(),
            fallback: generic_design(),
        }
    }
}

impl BossDesignRegistry {
    pub fn insert(&mut self, design: BossDesign) {
        self.designs.insert(design.id.clone(), design);
    }

    /// Look up a design, silently falling back to the generic one.
    pub fn resolve(&self, id: &str) -> &BossDesign {
        self.designs.get(id).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.designs.contains_key(id)
    }

    pub fn fallback(&self) -> &BossDesign {
        &self.fallback
    }

    /// Design ids in a stable order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.designs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Add archetypes by enemy-type id.
#[derive(Resource, Default)]
pub struct AddArchetypeRegistry {
    pub archetypes: HashMap<String, AddArchetypeDef>,
}

impl AddArchetypeRegistry {
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        for archetype in builtin_archetypes() {
            registry.insert(archetype);
        }
        registry
    }

    pub fn insert(&mut self, archetype: AddArchetypeDef) {
        self.archetypes.insert(archetype.id.clone(), archetype);
    }

    pub fn get(&self, id: &str) -> Option<&AddArchetypeDef> {
        self.archetypes.get(id)
    }
}

/// Returns a summary of loaded content counts for logging.
pub fn summary(designs: &BossDesignRegistry, archetypes: &AddArchetypeRegistry) -> String {
    format!(
        "Boss content loaded:\n\
         - Boss designs: {} ({:?})\n\
         - Add archetypes: {}",
        designs.designs.len(),
        designs.ids(),
        archetypes.archetypes.len(),
    )
}
