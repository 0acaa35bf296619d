pub mod core;
pub mod data;

pub use crate::core::{
    creature::{Creature, IvSpread},
    roster::{Roster, RosterEntry, RosterError},
};
pub use crate::data::{
    dataset::{Dataset, DatasetError},
    entry::{classify, Entry, EntryKind},
    levels::{LevelError, LevelTable},
    species::{SpeciesDatabase, SpeciesTemplate},
};
