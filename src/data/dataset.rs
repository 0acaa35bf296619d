use crate::data::entry::Entry;
use crate::data::levels::LevelTable;
use crate::data::species::{SpeciesDatabase, SpeciesTemplate};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("game master contains more than one player level settings entry")]
    DuplicateLevelSettings,
    #[error("game master contains no player level settings entry")]
    MissingLevelSettings,
    #[error("game master root is not an array of records")]
    NotAnArray,
    #[error("unknown species id '{0}'")]
    UnknownSpecies(String),
    #[error("malformed game master entry: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Species templates and the level table, extracted from one game-master dump.
#[derive(Clone, Debug)]
pub struct Dataset {
    species: SpeciesDatabase,
    levels: LevelTable,
}

impl Dataset {
    /// Run the classification pass over raw decoded records.
    ///
    /// Records that are neither a species nor the level settings entry are
    /// skipped. Exactly one level settings entry must be present.
    pub fn from_records(records: &[Value]) -> Result<Self, DatasetError> {
        let mut species = SpeciesDatabase::new();
        let mut levels: Option<LevelTable> = None;

        for raw in records {
            match Entry::parse(raw)? {
                Some(Entry::Species(template)) => species.insert(template),
                Some(Entry::LevelSettings(table)) => {
                    if levels.is_some() {
                        return Err(DatasetError::DuplicateLevelSettings);
                    }
                    levels = Some(table);
                }
                None => {}
            }
        }

        let levels = levels.ok_or(DatasetError::MissingLevelSettings)?;
        debug!(
            "game master: {} species, level table up to {}",
            species.len(),
            levels.max_level()
        );

        Ok(Self { species, levels })
    }

    pub fn load_from_json_str(json: &str) -> Result<Self, DatasetError> {
        let root: Value = serde_json::from_str(json)?;
        let records = root.as_array().ok_or(DatasetError::NotAnArray)?;
        Self::from_records(records)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path)?;
        Self::load_from_json_str(&content)
    }

    pub fn species(&self, id: &str) -> Result<&SpeciesTemplate, DatasetError> {
        self.species
            .get(id)
            .ok_or_else(|| DatasetError::UnknownSpecies(id.to_string()))
    }

    pub fn species_db(&self) -> &SpeciesDatabase {
        &self.species
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }
}
