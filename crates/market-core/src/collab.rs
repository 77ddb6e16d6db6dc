//! Collaborators the market reads from but does not own.
//!
//! Implementations live outside the generator: the scenario world in
//! `market-runtime`, fixtures in tests, or a full campaign database.

use crate::campaign::{AdminRole, Campaign};
use crate::contract::Contract;
use crate::dice::Dice;
use crate::faction::{Faction, FactionCode, SystemId};
use crate::rating::SkillLevel;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Faction database.
pub trait FactionDirectory {
    fn faction(&self, code: &FactionCode) -> Option<&Faction>;

    /// Diplomatically neutral factions (ComStar and the like).
    fn is_neutral(&self, code: &FactionCode) -> bool;

    fn at_war(&self, a: &FactionCode, b: &FactionCode, date: NaiveDate) -> bool;

    /// Capital system of a faction on a date.
    fn starting_planet(&self, code: &FactionCode, date: NaiveDate) -> Option<SystemId>;

    /// Technology-era modifier to parts availability.
    fn era_modifier(&self, _code: &FactionCode, _year: i32) -> i32 {
        0
    }
}

/// Planetary-system database.
pub trait SystemDirectory {
    fn factions_at(&self, system: &SystemId, date: NaiveDate) -> Vec<FactionCode>;

    /// Systems within `radius_ly` light years, excluding `system` itself.
    fn systems_within(&self, system: &SystemId, radius_ly: f64) -> Vec<SystemId>;

    fn system_name(&self, system: &SystemId) -> Option<String>;

    fn is_hiring_hall(&self, system: &SystemId, date: NaiveDate) -> bool;
}

/// Random faction-relations generator.
pub trait FactionRelations {
    fn random_employer(&self, dice: &mut dyn Dice) -> Option<FactionCode>;

    /// Enemy for `employer`; `garrison` biases toward internal threats.
    fn random_enemy(
        &self,
        employer: &FactionCode,
        garrison: bool,
        dice: &mut dyn Dice,
    ) -> Option<FactionCode>;

    /// A system held by `defender` that `attacker` can strike.
    fn mission_target(
        &self,
        attacker: &FactionCode,
        defender: &FactionCode,
        dice: &mut dyn Dice,
    ) -> Option<SystemId>;

    fn employer_codes(&self) -> BTreeSet<FactionCode>;
}

/// Jump-path calculator. `None` means no path exists.
pub trait JumpPaths {
    fn travel_days(&self, from: &SystemId, to: &SystemId) -> Option<u32>;
}

/// Personnel lookup for the best administrator in each role.
pub trait Personnel {
    fn best_admin(&self, role: AdminRole) -> Option<SkillLevel>;
}

/// Payment and logistics terms derived from a finished contract.
pub trait ContractValuation {
    fn payment_multiplier(
        &self,
        contract: &Contract,
        campaign: &Campaign,
        factions: &dyn FactionDirectory,
    ) -> Decimal;

    fn parts_availability(
        &self,
        contract: &Contract,
        campaign: &Campaign,
        factions: &dyn FactionDirectory,
    ) -> i32;
}

/// Receives market notifications. Both hooks default to no-ops.
pub trait MarketObserver {
    fn offers_changed(&mut self, _offers: &[Contract]) {}

    fn report(&mut self, _line: &str) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MarketObserver for NullObserver {}
