use pogo_roster::core::creature::IvSpread;
use pogo_roster::core::roster::{Roster, RosterEntry, RosterError};
use pogo_roster::data::dataset::{Dataset, DatasetError};

const GAMEMASTER_JSON: &str = include_str!("fixtures/gamemaster.json");

const ROSTER_JSON: &str = r#"[
  { "id": "TORTERRA", "attack_iv": 11, "defense_iv": 7, "hp_iv": 11, "level": 26.5 },
  { "id": "VENUSAUR", "attack_iv": 15, "defense_iv": 0, "hp_iv": 8, "level": 13 }
]"#;

fn load_dataset() -> Dataset {
    Dataset::load_from_json_str(GAMEMASTER_JSON).expect("load game master")
}

#[test]
fn load_resolves_species_in_order() {
    let dataset = load_dataset();
    let roster = Roster::load_from_json_str(&dataset, ROSTER_JSON).expect("load roster");

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.creatures()[0].template().id, "TORTERRA");
    assert_eq!(roster.creatures()[0].cp(), 2199);
    assert_eq!(roster.creatures()[1].template().id, "VENUSAUR");
    assert_eq!(roster.creatures()[1].level(), 13.0);
}

#[test]
fn save_then_load_reproduces_the_roster() {
    let dataset = load_dataset();
    let roster = Roster::load_from_json_str(&dataset, ROSTER_JSON).expect("load roster");

    let json = roster.save_to_json_string().expect("save roster");
    let reloaded = Roster::load_from_json_str(&dataset, &json).expect("reload roster");

    assert_eq!(reloaded.len(), roster.len());
    for (before, after) in roster.creatures().iter().zip(reloaded.creatures()) {
        assert_eq!(before.template().id, after.template().id);
        assert_eq!(before.ivs(), after.ivs());
        assert_eq!(before.level(), after.level());
        assert_eq!(before.cp(), after.cp());
    }
}

#[test]
fn empty_roster_round_trips() {
    let dataset = load_dataset();
    let roster = Roster::load_from_json_str(&dataset, "[]").expect("load roster");
    assert!(roster.is_empty());

    let json = roster.save_to_json_string().expect("save roster");
    let reloaded = Roster::load_from_json_str(&dataset, &json).expect("reload roster");
    assert!(reloaded.is_empty());
}

#[test]
fn saved_entries_keep_the_persisted_field_shape() {
    let dataset = load_dataset();
    let roster = Roster::load_from_json_str(&dataset, ROSTER_JSON).expect("load roster");

    let json = roster.save_to_json_string().expect("save roster");
    let entries: Vec<RosterEntry> = serde_json::from_str(&json).expect("valid entry list");
    assert_eq!(entries[0].id, "TORTERRA");
    assert_eq!(entries[0].stamina_iv, 11);
    assert!(json.contains("\"hp_iv\""));
}

#[test]
fn load_rejects_unknown_species() {
    let dataset = load_dataset();
    let json = r#"[{ "id": "MEWTWO", "attack_iv": 15, "defense_iv": 15, "hp_iv": 15, "level": 20 }]"#;

    let err = Roster::load_from_json_str(&dataset, json).expect_err("should fail");
    assert!(matches!(
        err,
        RosterError::Dataset(DatasetError::UnknownSpecies(id)) if id == "MEWTWO"
    ));
}

#[test]
fn load_rejects_out_of_range_ivs() {
    let dataset = load_dataset();
    let json = r#"[{ "id": "TORTERRA", "attack_iv": 16, "defense_iv": 7, "hp_iv": 11, "level": 20 }]"#;

    let err = Roster::load_from_json_str(&dataset, json).expect_err("should fail");
    assert!(matches!(
        err,
        RosterError::IvOutOfRange { stat: "attack", value: 16 }
    ));
}

#[test]
fn add_finds_the_unique_exact_level() {
    let dataset = load_dataset();
    let mut roster = Roster::new(&dataset);

    let creature = roster
        .add("TORTERRA", IvSpread::new(11, 7, 11), 2199)
        .expect("level exists");
    assert_eq!(creature.level(), 26.5);
    assert_eq!(creature.cp(), 2199);

    assert_eq!(roster.len(), 1);
    let entries = roster.to_entries();
    assert_eq!(entries[0].id, "TORTERRA");
    assert_eq!(entries[0].level, 26.5);
}

#[test]
fn add_neighbors_do_not_reach_the_target() {
    // 2199 is hit only at 26.5; the adjacent lattice points bracket it.
    let dataset = load_dataset();
    let template = dataset.species("TORTERRA").expect("species exists");
    let ivs = IvSpread::new(11, 7, 11);

    let below = pogo_roster::Creature::new(template, dataset.levels(), ivs, 26.0)
        .expect("level in range");
    let above = pogo_roster::Creature::new(template, dataset.levels(), ivs, 27.0)
        .expect("level in range");
    assert_eq!(below.cp(), 2154);
    assert_eq!(above.cp(), 2243);
}

#[test]
fn add_fails_below_the_minimum_level_cp() {
    let dataset = load_dataset();
    let mut roster = Roster::new(&dataset);

    // Level 1 already yields cp 41, so 40 is unreachable.
    let err = roster
        .add("TORTERRA", IvSpread::new(11, 7, 11), 40)
        .expect_err("should fail");
    assert!(matches!(
        err,
        RosterError::LevelNotFound { closest_level, closest_cp: 41, .. }
            if closest_level == 1.0
    ));
    assert!(roster.is_empty());
}

#[test]
fn add_fails_above_the_maximum_level_cp() {
    let dataset = load_dataset();
    let mut roster = Roster::new(&dataset);

    let err = roster
        .add("TORTERRA", IvSpread::new(11, 7, 11), 9999)
        .expect_err("should fail");
    assert!(matches!(
        err,
        RosterError::LevelNotFound { closest_level, closest_cp: 2900, .. }
            if closest_level == 40.0
    ));
    assert!(roster.is_empty());
}

#[test]
fn add_reaches_both_boundary_levels() {
    let dataset = load_dataset();
    let mut roster = Roster::new(&dataset);
    let ivs = IvSpread::new(11, 7, 11);

    let bottom = roster.add("TORTERRA", ivs, 41).expect("level 1 exact").level();
    assert_eq!(bottom, 1.0);
    let top = roster.add("TORTERRA", ivs, 2900).expect("level 40 exact").level();
    assert_eq!(top, 40.0);
    assert_eq!(roster.len(), 2);
}

#[test]
fn add_rejects_unknown_species() {
    let dataset = load_dataset();
    let mut roster = Roster::new(&dataset);

    let err = roster
        .add("MEWTWO", IvSpread::new(15, 15, 15), 4000)
        .expect_err("should fail");
    assert!(matches!(
        err,
        RosterError::Dataset(DatasetError::UnknownSpecies(id)) if id == "MEWTWO"
    ));
    assert!(roster.is_empty());
}

#[test]
fn add_rejects_out_of_range_ivs() {
    let dataset = load_dataset();
    let mut roster = Roster::new(&dataset);

    let err = roster
        .add("TORTERRA", IvSpread::new(11, -1, 11), 2199)
        .expect_err("should fail");
    assert!(matches!(
        err,
        RosterError::IvOutOfRange { stat: "defense", value: -1 }
    ));
    assert!(roster.is_empty());
}
