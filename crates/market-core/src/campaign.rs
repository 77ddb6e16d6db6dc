//! The read-only campaign view the market is generated against.

use crate::contract::{Contract, ContractId};
use crate::faction::{FactionCode, SystemId};
use crate::rating::UnitRating;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Administrative role consulted during clause negotiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Command,
    Transport,
    Logistics,
}

/// Campaign options that shape the market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignOptions {
    /// Upper bound on negotiated salvage percentage.
    pub max_salvage_pct: u32,
    /// Penalise oversized mercenary commands during negotiation.
    pub merc_size_limited: bool,
    /// Randomise contract length around the mission's nominal length.
    pub variable_contract_length: bool,
    /// Emit a report line whenever the market refreshes.
    pub report_on_refresh: bool,
    /// Location retries per generated contract.
    pub generation_retries: u32,
    /// Draws allowed when replacing a mercenary employer.
    pub employer_search_attempts: u32,
    /// Manual rerolls allowed per clause; `None` is unlimited.
    pub max_clause_rerolls: Option<u32>,
}

impl Default for CampaignOptions {
    fn default() -> Self {
        Self {
            max_salvage_pct: 100,
            merc_size_limited: false,
            variable_contract_length: false,
            report_on_refresh: true,
            generation_retries: 3,
            employer_search_attempts: 20,
            max_clause_rerolls: None,
        }
    }
}

/// Snapshot of the player's campaign as seen by the market.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Campaign {
    /// Current campaign date.
    pub date: NaiveDate,
    /// Player faction code; "MERC" for a mercenary command.
    pub faction: FactionCode,
    /// Employer holding the command on retainer, if any.
    #[serde(default)]
    pub retainer: Option<FactionCode>,
    /// System the command is currently in.
    pub location: SystemId,
    pub unit_rating: UnitRating,
    /// Combat units counted for the mercenary size cap.
    #[serde(default)]
    pub effective_unit_count: u32,
    /// Contracts the command has accepted and is currently fighting.
    #[serde(default)]
    pub active_contracts: Vec<Contract>,
    #[serde(default)]
    pub options: CampaignOptions,
}

impl Campaign {
    pub fn unit_rating_mod(&self) -> i32 {
        self.unit_rating.modifier()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn is_mercenary(&self) -> bool {
        self.faction.is_mercenary()
    }

    pub fn is_mercenary_or_pirate(&self) -> bool {
        self.faction.is_mercenary() || self.faction.is_pirate()
    }

    /// Players who are not freelancers negotiate from a position of
    /// strength: governments, and mercenaries on retainer.
    pub fn has_standing_employer(&self) -> bool {
        !self.is_mercenary_or_pirate() || (self.is_mercenary() && self.retainer.is_some())
    }

    pub fn active_contract(&self, id: ContractId) -> Option<&Contract> {
        self.active_contracts.iter().find(|c| c.id == id)
    }
}
