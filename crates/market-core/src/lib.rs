#![deny(warnings)]

//! Core domain models and invariants for the contract market.
//!
//! This crate defines the serializable contract, clause and rating types,
//! the campaign view the generator reads, the collaborator traits it
//! consumes, and validation helpers that check the clause tables' ranges.

mod campaign;
pub mod collab;
mod contract;
mod dice;
mod faction;
mod rating;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use campaign::{AdminRole, Campaign, CampaignOptions};
pub use contract::{
    Clause, ClauseModifiers, ClauseTerms, CommandRights, Contract, ContractId, MissionType,
};
pub use dice::Dice;
pub use faction::{Faction, FactionCode, PowerTier, SystemId};
pub use rating::{ForceRating, QualityRating, SkillLevel, UnitRating};

use thiserror::Error;

/// Transport compensation values the transport table can produce.
pub const TRANSPORT_VALUES: [u32; 10] = [0, 20, 25, 30, 35, 45, 50, 55, 60, 100];

/// Validation errors for contract invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Salvage must be a multiple of 10 within [0, 100].
    #[error("salvage percentage {0} is not a multiple of 10 in [0, 100]")]
    InvalidSalvage(u32),
    /// Transport compensation outside the transport table.
    #[error("transport compensation {0} is not a table value")]
    InvalidTransport(u32),
    /// Straight support outside {0, 20, ..., 100}.
    #[error("straight support {0} is not a table value")]
    InvalidSupport(u32),
    /// Battle-loss compensation outside {0, 10, 20, ..., 100}.
    #[error("battle loss compensation {0} is not a table value")]
    InvalidBattleLoss(u32),
    /// Support and battle-loss compensation both granted.
    #[error("straight support and battle loss compensation are exclusive")]
    SupportAndBattleLoss,
    /// Salvage exchange without a salvage share.
    #[error("salvage exchange requires a salvage percentage")]
    ExchangeWithoutSalvage,
    /// Contracts run for at least one month.
    #[error("contract length must be > 0")]
    ZeroLength,
    /// Subcontract outlives its parent.
    #[error("subcontract {child} must end before parent {parent}")]
    SubcontractOutlivesParent {
        child: ContractId,
        parent: ContractId,
    },
    /// Subcontract parent reference does not match.
    #[error("subcontract {0} does not reference the given parent")]
    ParentMismatch(ContractId),
}

/// Validate negotiated clause values against their tables.
pub fn validate_terms(t: &ClauseTerms) -> Result<(), ValidationError> {
    if t.salvage_pct > 100 || t.salvage_pct % 10 != 0 {
        return Err(ValidationError::InvalidSalvage(t.salvage_pct));
    }
    if t.salvage_exchange && t.salvage_pct == 0 {
        return Err(ValidationError::ExchangeWithoutSalvage);
    }
    if !TRANSPORT_VALUES.contains(&t.transport_comp) {
        return Err(ValidationError::InvalidTransport(t.transport_comp));
    }
    if t.straight_support > 100 || t.straight_support % 20 != 0 {
        return Err(ValidationError::InvalidSupport(t.straight_support));
    }
    if t.battle_loss_comp > 100 || t.battle_loss_comp % 10 != 0 {
        return Err(ValidationError::InvalidBattleLoss(t.battle_loss_comp));
    }
    if t.straight_support > 0 && t.battle_loss_comp > 0 {
        return Err(ValidationError::SupportAndBattleLoss);
    }
    Ok(())
}

/// Validate a rolled contract.
pub fn validate_contract(c: &Contract) -> Result<(), ValidationError> {
    if c.length_months == 0 {
        return Err(ValidationError::ZeroLength);
    }
    validate_terms(&c.terms)
}

/// Validate the parent/child relationship of a subcontract.
///
/// Derived clause values are stepped down from the parent and so are not
/// checked against the rolled tables.
pub fn validate_subcontract(parent: &Contract, child: &Contract) -> Result<(), ValidationError> {
    if child.parent != Some(parent.id) {
        return Err(ValidationError::ParentMismatch(child.id));
    }
    if child.end_date() >= parent.end_date() {
        return Err(ValidationError::SubcontractOutlivesParent {
            child: child.id,
            parent: parent.id,
        });
    }
    Ok(())
}
