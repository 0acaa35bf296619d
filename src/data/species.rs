use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base stats for one species, as published in the game master.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesTemplate {
    pub id: String,
    #[serde(rename = "baseAttack")]
    pub base_attack: i32,
    #[serde(rename = "baseDefense")]
    pub base_defense: i32,
    #[serde(rename = "baseStamina")]
    pub base_stamina: i32,
}

#[derive(Clone, Debug, Default)]
pub struct SpeciesDatabase {
    species: HashMap<String, SpeciesTemplate>,
}

impl SpeciesDatabase {
    pub fn new() -> Self {
        Self {
            species: HashMap::new(),
        }
    }

    pub fn insert(&mut self, template: SpeciesTemplate) {
        self.species.insert(template.id.clone(), template);
    }

    pub fn get(&self, species_id: &str) -> Option<&SpeciesTemplate> {
        self.species.get(species_id)
    }

    pub fn as_map(&self) -> &HashMap<String, SpeciesTemplate> {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
