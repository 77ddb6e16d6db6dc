//! Clause negotiation.
//!
//! Modifiers are accumulated once when a contract is generated and stored on
//! the contract. Every later manual reroll uses the stored value.

use crate::rules::SalvageBase;
use crate::{random_clause, MarketContext};
use market_core::{
    AdminRole, Clause, ClauseModifiers, CommandRights, Contract, Dice, SkillLevel, UnitRating,
};

fn admin_modifier(ctx: &MarketContext<'_>, role: AdminRole) -> i32 {
    let exp = ctx
        .personnel
        .best_admin(role)
        .unwrap_or(SkillLevel::Green)
        .experience();
    exp - SkillLevel::Regular.experience()
}

/// Accumulate the four clause modifiers for a freshly generated contract.
///
/// Random-clause bonuses may land on the same clause more than once.
pub fn build_modifiers(
    ctx: &MarketContext<'_>,
    contract: &Contract,
    dice: &mut dyn Dice,
) -> ClauseModifiers {
    let campaign = ctx.campaign;
    let mut mods = ClauseModifiers::default();

    let logistics = admin_modifier(ctx, AdminRole::Logistics);
    mods.adjust(Clause::Command, admin_modifier(ctx, AdminRole::Command));
    mods.adjust(Clause::Transport, admin_modifier(ctx, AdminRole::Transport));
    mods.adjust(Clause::Support, logistics);
    if ctx.rules.salvage_base() == SalvageBase::Logistics {
        mods.adjust(Clause::Salvage, logistics);
    }

    if campaign.has_standing_employer() {
        for clause in Clause::ALL {
            mods.adjust(clause, 1);
        }
    }

    if campaign.options.merc_size_limited && campaign.is_mercenary() {
        let max_units = (ctx.unit_rating_mod() + 1) * 12;
        let over = i64::from(campaign.effective_unit_count) - i64::from(max_units);
        for _ in 0..(over / 2).max(0) {
            mods.adjust(random_clause(dice), -1);
        }
    }

    match UnitRating::from_modifier(ctx.unit_rating_mod()) {
        UnitRating::A | UnitRating::AStar => {
            mods.adjust(random_clause(dice), 2);
            mods.adjust(random_clause(dice), 2);
        }
        UnitRating::B => {
            mods.adjust(random_clause(dice), 1);
            mods.adjust(random_clause(dice), 1);
        }
        UnitRating::C => mods.adjust(random_clause(dice), 1),
        UnitRating::F => mods.adjust(random_clause(dice), -1),
        UnitRating::D => {}
    }

    if ctx.is_clan(&contract.enemy) && !ctx.is_clan(&contract.employer) {
        for clause in Clause::ALL {
            mods.adjust(clause, if clause == Clause::Salvage { -2 } else { 1 });
        }
    } else {
        if contract.opposition.skill.is_veteran_or_better() {
            mods.adjust(random_clause(dice), 1);
        }
        if contract.opposition.skill.is_elite_or_better() {
            mods.adjust(random_clause(dice), 1);
        }
    }

    let mission_mods = ctx.rules.mission_clause_mods(contract.mission);
    for clause in Clause::ALL {
        mods.adjust(clause, mission_mods[clause.index()]);
    }

    if ctx.is_major_or_super(&contract.employer) {
        mods.adjust(Clause::Salvage, -1);
        mods.adjust(Clause::Transport, 1);
    }
    if ctx.is_minor_power(&contract.employer) {
        mods.adjust(Clause::Salvage, -2);
    }
    if contract.employer.is_mercenary() {
        mods.adjust(Clause::Command, -1);
        mods.adjust(Clause::Salvage, 2);
        mods.adjust(Clause::Support, 1);
        mods.adjust(Clause::Transport, 1);
    }
    if contract.employer.is_independent() {
        mods.adjust(Clause::Salvage, -1);
        mods.adjust(Clause::Support, -1);
    }

    mods
}

pub fn roll_command(modifier: i32, dice: &mut dyn Dice) -> CommandRights {
    match dice.two_d6() + modifier {
        i32::MIN..=2 => CommandRights::Integrated,
        3..=7 => CommandRights::House,
        8..=11 => CommandRights::Liaison,
        _ => CommandRights::Independent,
    }
}

fn salvage_share(roll: i32, max_pct: u32) -> u32 {
    let pct = ((roll - 3) * 10).clamp(0, 100) as u32;
    pct.min(max_pct / 10 * 10)
}

/// Roll salvage rights. Returns `(exchange, percentage)`.
///
/// A natural 2-3 grants salvage exchange, with the share taken from a
/// separate 2d6 that is rerolled until it shows at least 4. Exchange needs a
/// non-zero share after the campaign cap.
pub fn roll_salvage(modifier: i32, max_pct: u32, dice: &mut dyn Dice) -> (bool, u32) {
    let roll = (dice.two_d6() + modifier).min(13);
    if roll < 2 {
        (false, 0)
    } else if roll < 4 {
        let mut share = dice.two_d6();
        while share < 4 {
            share = dice.two_d6();
        }
        // a cap below 10% leaves nothing to exchange
        let pct = salvage_share(share, max_pct);
        (pct > 0, pct)
    } else {
        (false, salvage_share(roll, max_pct))
    }
}

/// Roll support. Returns `(straight_support, battle_loss_comp)`; at most one
/// of the two is non-zero.
pub fn roll_support(modifier: i32, dice: &mut dyn Dice) -> (u32, u32) {
    let roll = dice.two_d6() + modifier;
    match roll {
        i32::MIN..=2 => (0, 0),
        3..=7 => (((roll - 2) * 20) as u32, 0),
        8 => (0, 10),
        _ => (0, ((roll - 8) * 20).min(100) as u32),
    }
}

pub fn roll_transport(modifier: i32, dice: &mut dyn Dice) -> u32 {
    let roll = dice.two_d6() + modifier;
    match roll {
        i32::MIN..=1 => 0,
        2..=5 => (20 + (roll - 2) * 5) as u32,
        6..=9 => (45 + (roll - 6) * 5) as u32,
        _ => 100,
    }
}

/// Roll one clause with the contract's stored modifier. The command clause
/// is only negotiable for mercenary commands.
pub fn roll_clause(
    ctx: &MarketContext<'_>,
    contract: &mut Contract,
    clause: Clause,
    dice: &mut dyn Dice,
) {
    let modifier = contract.negotiation.modifier(clause);
    let terms = &mut contract.terms;
    match clause {
        Clause::Command => {
            terms.command = if ctx.campaign.is_mercenary() {
                roll_command(modifier, dice)
            } else {
                CommandRights::Integrated
            };
        }
        Clause::Salvage => {
            let (exchange, pct) =
                roll_salvage(modifier, ctx.campaign.options.max_salvage_pct, dice);
            terms.salvage_exchange = exchange;
            terms.salvage_pct = pct;
        }
        Clause::Support => {
            let (support, battle_loss) = roll_support(modifier, dice);
            terms.straight_support = support;
            terms.battle_loss_comp = battle_loss;
        }
        Clause::Transport => terms.transport_comp = roll_transport(modifier, dice),
    }
}

/// Build and store fresh modifiers, then roll all four clauses.
pub fn negotiate(ctx: &MarketContext<'_>, contract: &mut Contract, dice: &mut dyn Dice) {
    contract.negotiation = build_modifiers(ctx, contract, dice);
    for clause in Clause::ALL {
        roll_clause(ctx, contract, clause, dice);
    }
}
