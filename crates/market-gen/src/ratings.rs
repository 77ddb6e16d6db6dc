//! Ally and enemy force ratings.
//!
//! Each side sums a situational modifier, then rolls skill and quality on
//! separate 2d6 rolls with that modifier. Quality takes an extra -1 for
//! non-Clan forces during the late Succession Wars.

use crate::MarketContext;
use market_core::{Contract, Dice, ForceRating, MissionType, QualityRating, SkillLevel};

fn mission_modifier(mission: MissionType) -> i32 {
    match mission {
        MissionType::GuerrillaWarfare | MissionType::CadreDuty => -3,
        MissionType::GarrisonDuty | MissionType::SecurityDuty => -2,
        _ => 0,
    }
}

/// Modifier for the player's side of the contract.
pub fn ally_modifier(ctx: &MarketContext<'_>, c: &Contract) -> i32 {
    let mut m = mission_modifier(c.mission);
    if c.enemy.is_irregular() {
        m -= 1;
    }
    if ctx.is_minor_power(&c.employer) {
        m -= 1;
    }
    if c.enemy.is_independent() {
        m -= 2;
    }
    // Clans defend with front-line units.
    if ctx.is_clan(&c.employer) && !c.attacker {
        m += 1;
    }
    m
}

/// Modifier for the opposing force.
pub fn enemy_modifier(ctx: &MarketContext<'_>, c: &Contract) -> i32 {
    let mut m = mission_modifier(c.mission);
    if c.enemy.is_irregular() {
        m -= 2;
    }
    if c.mission == MissionType::PlanetaryAssault {
        m += 1;
    }
    if ctx.is_minor_power(&c.employer) {
        m -= 1;
    }
    if ctx.is_clan(&c.enemy) {
        m += if c.attacker { 2 } else { 4 };
    }
    m
}

/// Roll skill then quality with `modifier`.
pub fn resolve(modifier: i32, clan: bool, year: i32, dice: &mut dyn Dice) -> ForceRating {
    let skill = SkillLevel::from_roll(dice.two_d6() + modifier);
    let mut quality_mod = modifier;
    if !clan && year > 2950 && year < 3039 {
        quality_mod -= 1;
    }
    let quality = QualityRating::from_roll(dice.two_d6() + quality_mod);
    ForceRating { skill, quality }
}

pub fn rate_ally(ctx: &MarketContext<'_>, c: &Contract, dice: &mut dyn Dice) -> ForceRating {
    resolve(
        ally_modifier(ctx, c),
        ctx.is_clan(&c.employer),
        ctx.campaign.year(),
        dice,
    )
}

pub fn rate_enemy(ctx: &MarketContext<'_>, c: &Contract, dice: &mut dyn Dice) -> ForceRating {
    resolve(
        enemy_modifier(ctx, c),
        ctx.is_clan(&c.enemy),
        ctx.campaign.year(),
        dice,
    )
}
