use inquire::{CustomType, Text};
use pogo_roster::core::creature::IvSpread;
use pogo_roster::core::roster::Roster;
use pogo_roster::data::dataset::Dataset;
use std::path::Path;

const GAME_MASTER_PATH: &str = "latest.json";
const ROSTER_PATH: &str = "roster.json";

fn main() {
    env_logger::init();

    let dataset = Dataset::load_from_file(Path::new(GAME_MASTER_PATH))
        .expect("failed to load game master (run fetch-gamemaster first)");
    println!(
        "Loaded {} species, levels up to {}",
        dataset.species_db().len(),
        dataset.levels().max_level()
    );

    let mut roster = if Path::new(ROSTER_PATH).exists() {
        Roster::load_from_file(&dataset, Path::new(ROSTER_PATH)).expect("failed to load roster")
    } else {
        Roster::new(&dataset)
    };
    println!("Roster has {} creatures", roster.len());

    let id = Text::new("Species id (e.g. TORTERRA):")
        .prompt()
        .expect("species id required")
        .trim()
        .to_uppercase();
    let attack_iv: i32 = CustomType::new("Attack IV (0-15):")
        .prompt()
        .expect("attack IV required");
    let defense_iv: i32 = CustomType::new("Defense IV (0-15):")
        .prompt()
        .expect("defense IV required");
    let stamina_iv: i32 = CustomType::new("HP IV (0-15):")
        .prompt()
        .expect("HP IV required");
    let target_cp: i32 = CustomType::new("Target CP:")
        .prompt()
        .expect("target CP required");

    match roster.add(&id, IvSpread::new(attack_iv, defense_iv, stamina_iv), target_cp) {
        Ok(creature) => {
            println!(
                "Added {} at level {} (cp {})",
                creature.template().id,
                creature.level(),
                creature.cp()
            );
        }
        Err(err) => {
            eprintln!("Could not add creature: {err}");
            std::process::exit(1);
        }
    }

    roster
        .save_to_file(Path::new(ROSTER_PATH))
        .expect("failed to save roster");
    println!("Saved {ROSTER_PATH}");
}
