//! Payment multiplier and parts availability for generated contracts.

use market_core::collab::{ContractValuation, FactionDirectory};
use market_core::{Campaign, Contract, MissionType, UnitRating};
use rust_decimal::Decimal;

/// Default valuation: unit rating, mission and employer standing scale the
/// base payment; the enemy's era sets parts availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardValuation;

fn rating_factor(rating: UnitRating) -> Decimal {
    match rating {
        UnitRating::A | UnitRating::AStar => Decimal::new(20, 1),
        UnitRating::B => Decimal::new(15, 1),
        UnitRating::C => Decimal::ONE,
        UnitRating::D => Decimal::new(8, 1),
        UnitRating::F => Decimal::new(5, 1),
    }
}

fn mission_factor(mission: MissionType) -> Decimal {
    match mission {
        MissionType::GarrisonDuty | MissionType::RiotDuty | MissionType::PirateHunting => {
            Decimal::ONE
        }
        MissionType::CadreDuty => Decimal::new(8, 1),
        MissionType::SecurityDuty => Decimal::new(12, 1),
        MissionType::PlanetaryAssault => Decimal::new(15, 1),
        MissionType::ReliefDuty => Decimal::new(14, 1),
        MissionType::GuerrillaWarfare => Decimal::new(21, 1),
        MissionType::DiversionaryRaid => Decimal::new(18, 1),
        MissionType::ObjectiveRaid | MissionType::ReconRaid | MissionType::ExtractionRaid => {
            Decimal::new(16, 1)
        }
    }
}

impl ContractValuation for StandardValuation {
    fn payment_multiplier(
        &self,
        contract: &Contract,
        campaign: &Campaign,
        factions: &dyn FactionDirectory,
    ) -> Decimal {
        let mut m = rating_factor(campaign.unit_rating) * mission_factor(contract.mission);
        let employer = factions.faction(&contract.employer);
        if employer.map_or(false, |f| f.is_major_or_super() || f.clan) {
            m *= Decimal::new(12, 1);
        } else if !contract.enemy.is_independent() {
            m *= Decimal::new(11, 1);
        }
        if contract.enemy.is_irregular() {
            m *= Decimal::new(11, 1);
        }
        m.round_dp(4)
    }

    fn parts_availability(
        &self,
        contract: &Contract,
        campaign: &Campaign,
        factions: &dyn FactionDirectory,
    ) -> i32 {
        let mut level = if contract.enemy.is_irregular() {
            -1
        } else if contract.enemy.is_comstar() {
            2
        } else {
            factions.era_modifier(&contract.enemy, campaign.year())
        };
        // Unretained mercenaries buy on the open market.
        if campaign.is_mercenary() && campaign.retainer.is_none() {
            level += campaign.unit_rating_mod() - UnitRating::MID.modifier();
        }
        level
    }
}
