pub mod dataset;
pub mod entry;
pub mod levels;
pub mod species;
