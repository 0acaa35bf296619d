use crate::data::levels::{LevelError, LevelTable};
use crate::data::species::SpeciesTemplate;
use serde::{Deserialize, Serialize};

/// Per-creature stat offsets, one for each base stat. Valid range 0..=15.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvSpread {
    pub attack: i32,
    pub defense: i32,
    pub stamina: i32,
}

impl IvSpread {
    pub fn new(attack: i32, defense: i32, stamina: i32) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }
}

/// One owned creature: a species template plus IVs and a level.
///
/// All derived values are computed once at construction; a creature never
/// changes after that. CP is a pure function of the template, the IVs, the
/// level and the multiplier table.
#[derive(Clone, Debug)]
pub struct Creature<'a> {
    template: &'a SpeciesTemplate,
    ivs: IvSpread,
    level: f64,
    attack: i32,
    defense: i32,
    stamina: i32,
    cpm: f64,
    cp: i32,
}

impl<'a> Creature<'a> {
    pub fn new(
        template: &'a SpeciesTemplate,
        levels: &LevelTable,
        ivs: IvSpread,
        level: f64,
    ) -> Result<Self, LevelError> {
        let attack = template.base_attack + ivs.attack;
        let defense = template.base_defense + ivs.defense;
        let stamina = template.base_stamina + ivs.stamina;
        let cpm = levels.multiplier_at(level)?;
        let cp = compute_cp(attack, defense, stamina, cpm);

        Ok(Self {
            template,
            ivs,
            level,
            attack,
            defense,
            stamina,
            cpm,
            cp,
        })
    }

    pub fn template(&self) -> &'a SpeciesTemplate {
        self.template
    }

    pub fn ivs(&self) -> IvSpread {
        self.ivs
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn stamina(&self) -> i32 {
        self.stamina
    }

    pub fn cpm(&self) -> f64 {
        self.cpm
    }

    pub fn cp(&self) -> i32 {
        self.cp
    }
}

/// `floor(attack * sqrt(defense * stamina) * cpm^2 / 10)`, truncated only at
/// the final step. Non-decreasing in cpm, which makes the roster level search
/// well-defined.
pub fn compute_cp(attack: i32, defense: i32, stamina: i32, cpm: f64) -> i32 {
    let raw = attack as f64 * ((defense * stamina) as f64).sqrt() * cpm * cpm / 10.0;
    raw.floor() as i32
}
