use crate::data::levels::LevelTable;
use crate::data::species::SpeciesTemplate;
use serde::Deserialize;
use serde_json::Value;

/// Template id marking the single player level settings entry.
pub const PLAYER_LEVEL_SETTINGS: &str = "PLAYER_LEVEL_SETTINGS";

/// What a raw game-master record turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Species,
    LevelSettings,
}

/// A raw record parsed into one of the typed forms the engine cares about.
#[derive(Clone, Debug)]
pub enum Entry {
    Species(SpeciesTemplate),
    LevelSettings(LevelTable),
}

/// Decide what a raw record is without committing to a full parse.
///
/// A record whose nested data object carries `pokemonSettings` is always a
/// species source, regardless of its template id; only then is the
/// `PLAYER_LEVEL_SETTINGS` sentinel consulted. Anything else is skipped.
pub fn classify(raw: &Value) -> Option<EntryKind> {
    if raw
        .get("data")
        .and_then(|data| data.get("pokemonSettings"))
        .is_some()
    {
        return Some(EntryKind::Species);
    }
    if raw.get("templateId").and_then(Value::as_str) == Some(PLAYER_LEVEL_SETTINGS) {
        return Some(EntryKind::LevelSettings);
    }
    None
}

#[derive(Deserialize)]
struct RawStats {
    #[serde(rename = "baseAttack")]
    base_attack: i32,
    #[serde(rename = "baseDefense")]
    base_defense: i32,
    #[serde(rename = "baseStamina")]
    base_stamina: i32,
}

#[derive(Deserialize)]
struct RawPokemonSettings {
    #[serde(rename = "pokemonId")]
    pokemon_id: String,
    stats: RawStats,
}

#[derive(Deserialize)]
struct RawPlayerLevel {
    #[serde(rename = "cpMultiplier")]
    cp_multiplier: Vec<f64>,
}

impl Entry {
    /// Parse a raw record into its typed form, or `None` if it is neither a
    /// species nor the level settings entry.
    pub fn parse(raw: &Value) -> Result<Option<Entry>, serde_json::Error> {
        match classify(raw) {
            Some(EntryKind::Species) => {
                let settings: RawPokemonSettings =
                    serde_json::from_value(raw["data"]["pokemonSettings"].clone())?;
                Ok(Some(Entry::Species(SpeciesTemplate {
                    id: settings.pokemon_id,
                    base_attack: settings.stats.base_attack,
                    base_defense: settings.stats.base_defense,
                    base_stamina: settings.stats.base_stamina,
                })))
            }
            Some(EntryKind::LevelSettings) => {
                let settings: RawPlayerLevel =
                    serde_json::from_value(raw["data"]["playerLevel"].clone())?;
                Ok(Some(Entry::LevelSettings(LevelTable::from_raw(
                    settings.cp_multiplier,
                ))))
            }
            None => Ok(None),
        }
    }
}
