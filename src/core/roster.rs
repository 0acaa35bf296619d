use crate::core::creature::{Creature, IvSpread};
use crate::data::dataset::{Dataset, DatasetError};
use crate::data::levels::LevelError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Lowest level the search considers.
pub const LEVEL_MIN: f64 = 1.0;
/// Upper bound for the level search; clamped to the table's populated range.
pub const LEVEL_SEARCH_MAX: f64 = 55.0;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("{stat} IV {value} is outside 0..=15")]
    IvOutOfRange { stat: &'static str, value: i32 },
    #[error(
        "no level yields cp {target} for '{id}' (closest: level {closest_level} at cp {closest_cp})"
    )]
    LevelNotFound {
        id: String,
        target: i32,
        closest_level: f64,
        closest_cp: i32,
    },
    #[error("roster file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Persisted shape of one roster entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub attack_iv: i32,
    pub defense_iv: i32,
    #[serde(rename = "hp_iv")]
    pub stamina_iv: i32,
    pub level: f64,
}

/// An ordered collection of owned creatures, resolved against one dataset.
#[derive(Debug)]
pub struct Roster<'a> {
    dataset: &'a Dataset,
    creatures: Vec<Creature<'a>>,
}

impl<'a> Roster<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            creatures: Vec::new(),
        }
    }

    /// Rebuild creatures from persisted entries, in order. The level is
    /// already known here, so no search happens.
    pub fn from_entries(dataset: &'a Dataset, entries: &[RosterEntry]) -> Result<Self, RosterError> {
        let mut roster = Self::new(dataset);
        for entry in entries {
            let template = dataset.species(&entry.id)?;
            let ivs = validate_ivs(IvSpread::new(
                entry.attack_iv,
                entry.defense_iv,
                entry.stamina_iv,
            ))?;
            let creature = Creature::new(template, dataset.levels(), ivs, entry.level)?;
            roster.creatures.push(creature);
        }
        debug!("roster: loaded {} creatures", roster.creatures.len());
        Ok(roster)
    }

    pub fn load_from_json_str(dataset: &'a Dataset, json: &str) -> Result<Self, RosterError> {
        let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
        Self::from_entries(dataset, &entries)
    }

    pub fn load_from_file(dataset: &'a Dataset, path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path)?;
        Self::load_from_json_str(dataset, &content)
    }

    pub fn creatures(&self) -> &[Creature<'a>] {
        &self.creatures
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Project every creature back to its persisted shape, in roster order.
    pub fn to_entries(&self) -> Vec<RosterEntry> {
        self.creatures
            .iter()
            .map(|creature| RosterEntry {
                id: creature.template().id.clone(),
                attack_iv: creature.ivs().attack,
                defense_iv: creature.ivs().defense,
                stamina_iv: creature.ivs().stamina,
                level: creature.level(),
            })
            .collect()
    }

    pub fn save_to_json_string(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string_pretty(&self.to_entries())?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), RosterError> {
        fs::write(path, self.save_to_json_string()?)?;
        Ok(())
    }

    /// Find the level at which a creature of this species and IV spread has
    /// exactly `target_cp`, and append it to the roster.
    ///
    /// Binary search over the half-integer level lattice. CP is non-decreasing
    /// in level, so the bracket narrows until both bounds meet; the midpoint
    /// is snapped down to the lattice or the bounds would never close. A
    /// target no lattice level reproduces exactly fails with `LevelNotFound`
    /// and leaves the roster untouched.
    pub fn add(
        &mut self,
        id: &str,
        ivs: IvSpread,
        target_cp: i32,
    ) -> Result<&Creature<'a>, RosterError> {
        let dataset = self.dataset;
        let template = dataset.species(id)?;
        let ivs = validate_ivs(ivs)?;
        let levels = dataset.levels();

        let mut level_min = LEVEL_MIN;
        let mut level_max = LEVEL_SEARCH_MAX.min(levels.max_level() as f64);

        while level_min < level_max {
            let guess = snap_to_half_level((level_min + level_max) / 2.0);
            let trial = Creature::new(template, levels, ivs, guess)?;

            if trial.cp() < target_cp {
                level_min = guess + 0.5;
            } else if trial.cp() > target_cp {
                level_max = guess;
            } else {
                level_min = guess;
                level_max = guess;
            }
        }

        let found = Creature::new(template, levels, ivs, level_min)?;
        if found.cp() != target_cp {
            return Err(RosterError::LevelNotFound {
                id: id.to_string(),
                target: target_cp,
                closest_level: found.level(),
                closest_cp: found.cp(),
            });
        }

        info!(
            "roster: added '{}' at level {} with cp {}",
            id,
            found.level(),
            found.cp()
        );
        self.creatures.push(found);
        Ok(self.creatures.last().unwrap())
    }
}

fn snap_to_half_level(level: f64) -> f64 {
    (level * 2.0).floor() / 2.0
}

fn validate_ivs(ivs: IvSpread) -> Result<IvSpread, RosterError> {
    for (stat, value) in [
        ("attack", ivs.attack),
        ("defense", ivs.defense),
        ("stamina", ivs.stamina),
    ] {
        if !(0..=15).contains(&value) {
            return Err(RosterError::IvOutOfRange { stat, value });
        }
    }
    Ok(ivs)
}
