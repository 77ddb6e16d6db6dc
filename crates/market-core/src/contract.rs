//! Contracts, mission types and the four negotiable clauses.

use crate::faction::{FactionCode, SystemId};
use crate::rating::ForceRating;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market-scoped contract identifier. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(pub u64);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tactical category of a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    GarrisonDuty,
    CadreDuty,
    SecurityDuty,
    RiotDuty,
    PlanetaryAssault,
    ReliefDuty,
    GuerrillaWarfare,
    PirateHunting,
    DiversionaryRaid,
    ObjectiveRaid,
    ReconRaid,
    ExtractionRaid,
}

impl MissionType {
    /// All mission types in clause-table row order.
    pub const ALL: [MissionType; 12] = [
        MissionType::GarrisonDuty,
        MissionType::CadreDuty,
        MissionType::SecurityDuty,
        MissionType::RiotDuty,
        MissionType::PlanetaryAssault,
        MissionType::ReliefDuty,
        MissionType::GuerrillaWarfare,
        MissionType::PirateHunting,
        MissionType::DiversionaryRaid,
        MissionType::ObjectiveRaid,
        MissionType::ReconRaid,
        MissionType::ExtractionRaid,
    ];

    /// Row of this mission in per-mission tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_garrison_type(self) -> bool {
        matches!(
            self,
            MissionType::GarrisonDuty
                | MissionType::CadreDuty
                | MissionType::SecurityDuty
                | MissionType::RiotDuty
        )
    }

    pub fn is_raid(self) -> bool {
        matches!(
            self,
            MissionType::DiversionaryRaid
                | MissionType::ObjectiveRaid
                | MissionType::ReconRaid
                | MissionType::ExtractionRaid
        )
    }

    /// Missions where the player defends by default.
    pub fn is_defensive(self) -> bool {
        self.is_garrison_type() || self == MissionType::ReliefDuty
    }

    /// Nominal contract length in months.
    pub fn base_length_months(self) -> u32 {
        match self {
            MissionType::GarrisonDuty => 18,
            MissionType::CadreDuty => 12,
            MissionType::SecurityDuty | MissionType::PirateHunting => 6,
            MissionType::RiotDuty => 4,
            MissionType::PlanetaryAssault | MissionType::ReliefDuty => 9,
            MissionType::GuerrillaWarfare => 24,
            MissionType::DiversionaryRaid
            | MissionType::ObjectiveRaid
            | MissionType::ReconRaid
            | MissionType::ExtractionRaid => 3,
        }
    }

    /// Garrison duty against rebels is riot duty. Idempotent.
    pub fn reclassify_for_enemy(self, enemy: &FactionCode) -> Self {
        if self == MissionType::GarrisonDuty && enemy.is_rebel() {
            MissionType::RiotDuty
        } else {
            self
        }
    }

    /// Combat missions a diplomatically neutral employer would rather not
    /// fight are downgraded to their defensive counterparts.
    pub fn dampen_for_neutral(self) -> Self {
        match self {
            MissionType::PlanetaryAssault => MissionType::GarrisonDuty,
            MissionType::ReliefDuty => MissionType::SecurityDuty,
            other => other,
        }
    }

    /// Mission offered as a follow-up once this one concludes.
    pub fn followup(self) -> Self {
        match self {
            MissionType::DiversionaryRaid => MissionType::ObjectiveRaid,
            MissionType::ReconRaid => MissionType::PlanetaryAssault,
            MissionType::RiotDuty => MissionType::GarrisonDuty,
            other => other,
        }
    }

    /// Whether concluding this mission leads the employer to offer more work.
    pub fn has_followup(self) -> bool {
        self.followup() != self
    }

    pub fn name(self) -> &'static str {
        match self {
            MissionType::GarrisonDuty => "Garrison Duty",
            MissionType::CadreDuty => "Cadre Duty",
            MissionType::SecurityDuty => "Security Duty",
            MissionType::RiotDuty => "Riot Duty",
            MissionType::PlanetaryAssault => "Planetary Assault",
            MissionType::ReliefDuty => "Relief Duty",
            MissionType::GuerrillaWarfare => "Guerrilla Warfare",
            MissionType::PirateHunting => "Pirate Hunting",
            MissionType::DiversionaryRaid => "Diversionary Raid",
            MissionType::ObjectiveRaid => "Objective Raid",
            MissionType::ReconRaid => "Recon Raid",
            MissionType::ExtractionRaid => "Extraction Raid",
        }
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four negotiable contract terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    Command,
    Salvage,
    Support,
    Transport,
}

impl Clause {
    pub const ALL: [Clause; 4] = [
        Clause::Command,
        Clause::Salvage,
        Clause::Support,
        Clause::Transport,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Clause at a `0..4` index, used when a random clause is picked.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Clause::Command => "command",
            Clause::Salvage => "salvage",
            Clause::Support => "support",
            Clause::Transport => "transport",
        };
        f.write_str(s)
    }
}

/// Command rights tier, strictest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandRights {
    Integrated,
    House,
    Liaison,
    Independent,
}

impl CommandRights {
    /// One tier stricter, floored at [`CommandRights::Integrated`].
    pub fn one_lower(self) -> Self {
        match self {
            CommandRights::Integrated | CommandRights::House => CommandRights::Integrated,
            CommandRights::Liaison => CommandRights::House,
            CommandRights::Independent => CommandRights::Liaison,
        }
    }
}

/// Negotiated clause values. Straight support and battle-loss compensation
/// are mutually exclusive: at most one of them is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseTerms {
    pub command: CommandRights,
    pub salvage_exchange: bool,
    /// Salvage percentage, step 10.
    pub salvage_pct: u32,
    pub straight_support: u32,
    pub battle_loss_comp: u32,
    pub transport_comp: u32,
}

impl Default for ClauseTerms {
    fn default() -> Self {
        Self {
            command: CommandRights::Integrated,
            salvage_exchange: false,
            salvage_pct: 0,
            straight_support: 0,
            battle_loss_comp: 0,
            transport_comp: 0,
        }
    }
}

/// Stored negotiation state of one contract: the modifier each clause was
/// rolled with and how many manual rerolls each clause has consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseModifiers {
    pub mods: [i32; 4],
    pub rerolls_used: [u32; 4],
}

impl ClauseModifiers {
    pub fn modifier(&self, clause: Clause) -> i32 {
        self.mods[clause.index()]
    }

    pub fn adjust(&mut self, clause: Clause, delta: i32) {
        self.mods[clause.index()] += delta;
    }

    pub fn rerolls(&self, clause: Clause) -> u32 {
        self.rerolls_used[clause.index()]
    }

    pub fn record_reroll(&mut self, clause: Clause) {
        self.rerolls_used[clause.index()] += 1;
    }
}

/// A mercenary contract, offered on the market or active in the campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    /// Descriptive name, e.g. "3025 - FS - Kathil Garrison Duty".
    pub name: String,
    pub employer: FactionCode,
    pub enemy: FactionCode,
    pub mission: MissionType,
    pub system: SystemId,
    pub start: NaiveDate,
    pub length_months: u32,
    pub terms: ClauseTerms,
    pub ally: ForceRating,
    pub opposition: ForceRating,
    /// Whether the player's side is on the offensive.
    pub attacker: bool,
    /// Parent contract of a subcontract.
    #[serde(default)]
    pub parent: Option<ContractId>,
    /// Brokered through a mercenary employer.
    #[serde(default)]
    pub merc_subcontract: bool,
    pub payment_multiplier: Decimal,
    pub parts_availability: i32,
    /// Negotiation state; persisted separately, keyed by id.
    #[serde(skip)]
    pub negotiation: ClauseModifiers,
}

impl Contract {
    /// Date the contract ends: start plus its length in calendar months.
    pub fn end_date(&self) -> NaiveDate {
        self.start
            .checked_add_months(Months::new(self.length_months))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn is_subcontract(&self) -> bool {
        self.parent.is_some()
    }
}
