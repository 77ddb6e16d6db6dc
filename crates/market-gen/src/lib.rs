#![deny(warnings)]

//! Contract market generation and clause negotiation.
//!
//! This crate provides:
//! - The per-period market pass (offer count, subcontracts, guaranteed
//!   capital offer) in [`MarketState::generate_offers`]
//! - The contract factory for regular offers, subcontracts and follow-ups
//! - Ally/enemy force ratings and the mission type table
//! - Clause negotiation with stored modifiers and manual rerolls
//!
//! All randomness is drawn from the [`Dice`] passed into each call.

pub mod clauses;
pub mod factory;
mod market;
pub mod mission;
pub mod ratings;
mod rules;
mod valuation;

#[cfg(test)]
mod fixtures;

pub use market::{offer_count, MarketState, BACKWATER_RADIUS_LY};
pub use rules::{AtbMonthly, MarketRules, SalvageBase};
pub use valuation::StandardValuation;

use market_core::collab::{
    ContractValuation, FactionDirectory, FactionRelations, JumpPaths, Personnel, SystemDirectory,
};
use market_core::{Campaign, Clause, ContractId, Dice, FactionCode};
use thiserror::Error;

/// Errors returned by caller-driven market operations.
#[derive(Debug, Error, PartialEq)]
pub enum MarketError {
    /// No offer with this id is on the market.
    #[error("contract {0} is not on the market")]
    UnknownContract(ContractId),
    /// The configured reroll cap for this clause is used up.
    #[error("{clause} clause of contract {id} has used all {limit} rerolls")]
    RerollLimit {
        id: ContractId,
        clause: Clause,
        limit: u32,
    },
}

/// Everything a generation pass reads: the campaign and its collaborators.
#[derive(Clone, Copy)]
pub struct MarketContext<'a> {
    pub campaign: &'a Campaign,
    pub factions: &'a dyn FactionDirectory,
    pub systems: &'a dyn SystemDirectory,
    pub relations: &'a dyn FactionRelations,
    pub jumps: &'a dyn JumpPaths,
    pub personnel: &'a dyn Personnel,
    pub valuation: &'a dyn ContractValuation,
    pub rules: &'a dyn MarketRules,
}

impl<'a> MarketContext<'a> {
    pub fn unit_rating_mod(&self) -> i32 {
        self.campaign.unit_rating_mod()
    }

    pub fn is_major_or_super(&self, code: &FactionCode) -> bool {
        self.factions
            .faction(code)
            .map_or(false, |f| f.is_major_or_super())
    }

    pub fn is_minor_power(&self, code: &FactionCode) -> bool {
        self.factions
            .faction(code)
            .map_or(false, |f| f.is_minor_power())
    }

    pub fn is_clan(&self, code: &FactionCode) -> bool {
        self.factions.faction(code).map_or(false, |f| f.clan)
    }

    pub fn is_periphery(&self, code: &FactionCode) -> bool {
        self.factions.faction(code).map_or(false, |f| f.periphery)
    }

    pub fn is_power_or_clan(&self, code: &FactionCode) -> bool {
        self.factions
            .faction(code)
            .map_or(false, |f| f.is_power_or_clan())
    }

    /// Factions present at the campaign's current location.
    pub fn local_factions(&self) -> Vec<FactionCode> {
        self.systems
            .factions_at(&self.campaign.location, self.campaign.date)
    }
}

/// Uniformly chosen clause for "bonus to a random clause" steps.
pub(crate) fn random_clause(dice: &mut dyn Dice) -> Clause {
    Clause::ALL[dice.pick(Clause::ALL.len()) % Clause::ALL.len()]
}
