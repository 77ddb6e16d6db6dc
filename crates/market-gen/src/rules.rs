//! Ruleset tables behind one interface: mission table, offer count formula,
//! per-mission clause modifiers and the salvage base modifier.

use market_core::MissionType::{self, *};
use serde::{Deserialize, Serialize};

/// Where the salvage clause's base modifier comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalvageBase {
    /// Logistics administrator experience minus regular, like support.
    #[default]
    Logistics,
    /// Always 0.
    Flat,
}

pub trait MarketRules {
    /// Mission table column: major/super-power employers or everyone else.
    /// Indexed by `roll - 2` for a clamped 2d6 roll.
    fn mission_table(&self, major_power: bool) -> &[MissionType; 11];

    /// Offer count before location modifiers.
    fn base_offer_count(&self, d6: i32, unit_rating_mod: i32) -> i32 {
        d6 - 4 + unit_rating_mod
    }

    /// Clause modifiers for a mission, in command/salvage/support/transport order.
    fn mission_clause_mods(&self, mission: MissionType) -> [i32; 4];

    fn salvage_base(&self) -> SalvageBase {
        SalvageBase::Logistics
    }
}

const MAJOR_POWER_MISSIONS: [MissionType; 11] = [
    GuerrillaWarfare,
    ReconRaid,
    PirateHunting,
    PlanetaryAssault,
    ObjectiveRaid,
    ObjectiveRaid,
    ExtractionRaid,
    ReconRaid,
    GarrisonDuty,
    CadreDuty,
    ReliefDuty,
];

const OTHER_MISSIONS: [MissionType; 11] = [
    GuerrillaWarfare,
    ReconRaid,
    PlanetaryAssault,
    ObjectiveRaid,
    ExtractionRaid,
    PirateHunting,
    SecurityDuty,
    ObjectiveRaid,
    GarrisonDuty,
    CadreDuty,
    DiversionaryRaid,
];

// Rows follow `MissionType::ALL`.
const MISSION_CLAUSE_MODS: [[i32; 4]; 12] = [
    [1, 0, 1, 0],   // garrison duty
    [2, 0, -1, -1], // cadre duty
    [1, 1, -1, -1], // security duty
    [2, 0, -1, -1], // riot duty
    [0, 0, 1, 1],   // planetary assault
    [1, 0, 1, 1],   // relief duty
    [0, 2, -1, -1], // guerrilla warfare
    [-1, 1, 1, 0],  // pirate hunting
    [-1, 1, 1, 1],  // diversionary raid
    [-1, 1, 1, 1],  // objective raid
    [-1, 0, 1, 1],  // recon raid
    [-1, 1, 0, 1],  // extraction raid
];

/// The monthly Against-the-Bot market.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtbMonthly {
    #[serde(default)]
    pub salvage_base: SalvageBase,
}

impl MarketRules for AtbMonthly {
    fn mission_table(&self, major_power: bool) -> &[MissionType; 11] {
        if major_power {
            &MAJOR_POWER_MISSIONS
        } else {
            &OTHER_MISSIONS
        }
    }

    fn mission_clause_mods(&self, mission: MissionType) -> [i32; 4] {
        MISSION_CLAUSE_MODS[mission.index()]
    }

    fn salvage_base(&self) -> SalvageBase {
        self.salvage_base
    }
}
