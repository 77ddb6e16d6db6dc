//! Contract factory: regular offers, subcontracts of garrison contracts and
//! follow-ups.
//!
//! A regular offer is resolved in two phases. The first picks mission, enemy
//! and target system and may fail (no enemy, no target, no jump path), in
//! which case the whole phase is retried. Only once it succeeds is an id
//! allocated and the contract completed with ratings, length and terms.

use crate::clauses;
use crate::market::MarketState;
use crate::mission::select_mission;
use crate::ratings;
use crate::MarketContext;
use chrono::{Datelike, Days};
use market_core::{
    ClauseModifiers, ClauseTerms, Contract, Dice, FactionCode, ForceRating, MissionType,
    QualityRating, SkillLevel, SystemId,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// A subcontract's drawn enemy must be present within this radius of the
/// parent contract's system, unless it is an irregular force.
pub const SUBCONTRACT_ENEMY_RADIUS_LY: f64 = 30.0;

/// Why one resolution attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unresolved {
    Enemy,
    Target,
    JumpPath,
}

#[derive(Debug)]
struct Resolved {
    mission: MissionType,
    enemy: FactionCode,
    attacker: bool,
    system: SystemId,
    travel_days: u32,
}

/// Contract length in months. With variable length the base is scaled to
/// between 75% and 125%.
pub fn contract_length(mission: MissionType, variable: bool, dice: &mut dyn Dice) -> u32 {
    let base = mission.base_length_months();
    if !variable {
        return base;
    }
    let spread = dice.pick(base as usize / 2 + 1) as u32;
    (base * 3 / 4 + spread).max(1)
}

/// Whether the employer attacks. Defensive missions defend unless the enemy
/// is rebels; relief duty attacks on a d6 below 4.
pub fn is_attacker(mission: MissionType, enemy: &FactionCode, dice: &mut dyn Dice) -> bool {
    if !mission.is_defensive() || enemy.is_rebel() {
        return true;
    }
    mission == MissionType::ReliefDuty && dice.d6() < 4
}

/// Generate a regular offer for the campaign's employer situation.
///
/// Mercenaries on a retainer and government commands always work for the
/// same employer. Free mercenaries draw a fresh employer on every attempt.
pub fn generate_offer(
    ctx: &MarketContext<'_>,
    state: &mut MarketState,
    dice: &mut dyn Dice,
) -> Option<Contract> {
    let campaign = ctx.campaign;
    let retries = campaign.options.generation_retries;
    if !campaign.is_mercenary() {
        return generate(ctx, state, dice, Some(campaign.faction.clone()), retries);
    }
    if let Some(retainer) = &campaign.retainer {
        return generate(ctx, state, dice, Some(retainer.clone()), retries);
    }
    for _ in 0..retries {
        let employer = ctx.relations.random_employer(dice);
        if let Some(contract) = generate(ctx, state, dice, employer, 1) {
            return Some(contract);
        }
    }
    None
}

/// Generate an offer for `employer`, retrying the location phase up to
/// `retries` times.
///
/// A mercenary employer marks the contract as a subcontract for another
/// mercenary command and is replaced by a non-mercenary draw.
pub fn generate(
    ctx: &MarketContext<'_>,
    state: &mut MarketState,
    dice: &mut dyn Dice,
    employer: Option<FactionCode>,
    retries: u32,
) -> Option<Contract> {
    let Some(mut employer) = employer else {
        warn!("could not generate a contract: no employer");
        return None;
    };
    let merc_subcontract = employer.is_mercenary();
    if merc_subcontract {
        employer = find_non_mercenary_employer(ctx, dice)?;
    }

    for attempt in 1..=retries {
        match resolve(ctx, &employer, dice) {
            Ok(resolved) => {
                return Some(complete(
                    ctx,
                    state,
                    dice,
                    employer,
                    resolved,
                    merc_subcontract,
                ))
            }
            Err(reason) => {
                debug!(%employer, attempt, ?reason, "contract resolution failed");
            }
        }
    }
    warn!(%employer, retries, "could not generate a contract: retries exhausted");
    None
}

fn find_non_mercenary_employer(
    ctx: &MarketContext<'_>,
    dice: &mut dyn Dice,
) -> Option<FactionCode> {
    let attempts = ctx.campaign.options.employer_search_attempts;
    for _ in 0..attempts {
        match ctx.relations.random_employer(dice) {
            Some(code) if !code.is_mercenary() => return Some(code),
            _ => {}
        }
    }
    warn!(attempts, "could not find a non-mercenary employer for a subcontract");
    None
}

fn draw_enemy(
    ctx: &MarketContext<'_>,
    employer: &FactionCode,
    mission: MissionType,
    dice: &mut dyn Dice,
) -> Option<FactionCode> {
    match mission {
        MissionType::PirateHunting => Some(FactionCode::pirate()),
        MissionType::RiotDuty => Some(FactionCode::rebel()),
        m => ctx
            .relations
            .random_enemy(employer, m.is_garrison_type(), dice),
    }
}

fn resolve(
    ctx: &MarketContext<'_>,
    employer: &FactionCode,
    dice: &mut dyn Dice,
) -> Result<Resolved, Unresolved> {
    let campaign = ctx.campaign;
    let mission = select_mission(
        ctx.rules,
        dice,
        ctx.unit_rating_mod(),
        ctx.is_major_or_super(employer),
    );
    let enemy = draw_enemy(ctx, employer, mission, dice).ok_or(Unresolved::Enemy)?;
    let mut mission = mission.reclassify_for_enemy(&enemy);
    if ctx.factions.is_neutral(employer) && !ctx.factions.at_war(employer, &enemy, campaign.date) {
        mission = mission.dampen_for_neutral();
    }
    let attacker = is_attacker(mission, &enemy, dice);

    let (offense, defense) = if attacker {
        (employer, &enemy)
    } else {
        (&enemy, employer)
    };
    let system = ctx
        .relations
        .mission_target(offense, defense, dice)
        .ok_or(Unresolved::Target)?;
    let travel_days = ctx
        .jumps
        .travel_days(&campaign.location, &system)
        .ok_or(Unresolved::JumpPath)?;

    Ok(Resolved {
        mission,
        enemy,
        attacker,
        system,
        travel_days,
    })
}

fn skeleton(
    state: &mut MarketState,
    employer: FactionCode,
    enemy: FactionCode,
    mission: MissionType,
    system: SystemId,
    start: chrono::NaiveDate,
) -> Contract {
    Contract {
        id: state.allocate_id(),
        name: String::new(),
        employer,
        enemy,
        mission,
        system,
        start,
        length_months: mission.base_length_months(),
        terms: ClauseTerms::default(),
        ally: ForceRating::default(),
        opposition: ForceRating::default(),
        attacker: false,
        parent: None,
        merc_subcontract: false,
        payment_multiplier: Decimal::ONE,
        parts_availability: 0,
        negotiation: ClauseModifiers::default(),
    }
}

fn rate_forces(ctx: &MarketContext<'_>, contract: &mut Contract, dice: &mut dyn Dice) {
    contract.ally = ratings::rate_ally(ctx, contract, dice);
    contract.opposition = ratings::rate_enemy(ctx, contract, dice);
    if contract.mission == MissionType::CadreDuty {
        contract.ally = ForceRating {
            skill: SkillLevel::Green,
            quality: QualityRating::WORST,
        };
    }
}

fn contract_name(ctx: &MarketContext<'_>, contract: &Contract, label: &str) -> String {
    let system = ctx
        .systems
        .system_name(&contract.system)
        .unwrap_or_else(|| contract.system.to_string());
    format!(
        "{} - {} - {} {}",
        contract.start.year(),
        contract.employer,
        system,
        label
    )
}

fn complete(
    ctx: &MarketContext<'_>,
    state: &mut MarketState,
    dice: &mut dyn Dice,
    employer: FactionCode,
    resolved: Resolved,
    merc_subcontract: bool,
) -> Contract {
    let campaign = ctx.campaign;
    let start = campaign
        .date
        .checked_add_days(Days::new(u64::from(resolved.travel_days)))
        .unwrap_or(campaign.date);
    let mut contract = skeleton(
        state,
        employer,
        resolved.enemy,
        resolved.mission,
        resolved.system,
        start,
    );
    contract.attacker = resolved.attacker;
    contract.merc_subcontract = merc_subcontract;

    rate_forces(ctx, &mut contract, dice);
    contract.length_months = contract_length(
        contract.mission,
        campaign.options.variable_contract_length,
        dice,
    );
    clauses::negotiate(ctx, &mut contract, dice);
    contract.payment_multiplier = ctx
        .valuation
        .payment_multiplier(&contract, campaign, ctx.factions);
    contract.parts_availability = ctx
        .valuation
        .parts_availability(&contract, campaign, ctx.factions);
    contract.name = contract_name(ctx, &contract, contract.mission.name());

    debug!(
        id = %contract.id,
        employer = %contract.employer,
        enemy = %contract.enemy,
        mission = %contract.mission,
        system = %contract.system,
        "generated contract"
    );
    contract
}

/// Terms of a subcontract, derived from its parent's: command one step
/// lower, salvage 10 points lower, support reduced and full transport.
pub fn derive_subcontract_terms(parent: &ClauseTerms) -> ClauseTerms {
    let salvage_pct = parent.salvage_pct.saturating_sub(10);
    ClauseTerms {
        command: parent.command.one_lower(),
        salvage_exchange: parent.salvage_exchange && salvage_pct > 0,
        salvage_pct,
        straight_support: parent.straight_support.saturating_sub(20),
        battle_loss_comp: match parent.battle_loss_comp {
            0..=10 => 0,
            11..=20 => 10,
            blc => blc - 20,
        },
        transport_comp: 100,
    }
}

fn subcontract_enemy(
    ctx: &MarketContext<'_>,
    parent: &Contract,
    mission: MissionType,
    dice: &mut dyn Dice,
) -> FactionCode {
    match draw_enemy(ctx, &parent.employer, mission, dice) {
        Some(enemy) if enemy.is_irregular() || present_near(ctx, &enemy, &parent.system) => enemy,
        _ => parent.enemy.clone(),
    }
}

fn present_near(ctx: &MarketContext<'_>, faction: &FactionCode, system: &SystemId) -> bool {
    let date = ctx.campaign.date;
    std::iter::once(system.clone())
        .chain(
            ctx.systems
                .systems_within(system, SUBCONTRACT_ENEMY_RADIUS_LY),
        )
        .any(|s| ctx.systems.factions_at(&s, date).contains(faction))
}

/// Generate a subcontract of an active garrison contract. It starts today at
/// the parent's system, with terms derived from the parent's and no stored
/// negotiation modifiers.
///
/// The caller decides whether to keep it; a subcontract that does not end
/// before its parent is not valid.
pub fn generate_subcontract(
    ctx: &MarketContext<'_>,
    state: &mut MarketState,
    dice: &mut dyn Dice,
    parent: &Contract,
) -> Contract {
    let campaign = ctx.campaign;
    let mission = select_mission(
        ctx.rules,
        dice,
        ctx.unit_rating_mod(),
        ctx.is_major_or_super(&parent.employer),
    );
    let enemy = subcontract_enemy(ctx, parent, mission, dice);
    let mission = mission.reclassify_for_enemy(&enemy);
    let attacker = is_attacker(mission, &enemy, dice);

    let mut contract = skeleton(
        state,
        parent.employer.clone(),
        enemy,
        mission,
        parent.system.clone(),
        campaign.date,
    );
    contract.attacker = attacker;
    contract.parent = Some(parent.id);
    contract.terms = derive_subcontract_terms(&parent.terms);
    contract.parts_availability = parent.parts_availability;

    rate_forces(ctx, &mut contract, dice);
    contract.length_months = contract_length(
        contract.mission,
        campaign.options.variable_contract_length,
        dice,
    );
    contract.payment_multiplier = ctx
        .valuation
        .payment_multiplier(&contract, campaign, ctx.factions);
    contract.name = contract_name(
        ctx,
        &contract,
        &format!("Subcontract {}", contract.mission),
    );

    debug!(
        id = %contract.id,
        parent = %parent.id,
        mission = %contract.mission,
        "generated subcontract"
    );
    contract
}

/// Generate the follow-up of a concluded contract: same employer, enemy and
/// system, with the follow-up mission type. It starts when the origin ends,
/// or today if that date has passed.
pub fn generate_followup(
    ctx: &MarketContext<'_>,
    state: &mut MarketState,
    dice: &mut dyn Dice,
    origin: &Contract,
) -> Contract {
    let campaign = ctx.campaign;
    let mut contract = skeleton(
        state,
        origin.employer.clone(),
        origin.enemy.clone(),
        origin.mission.followup(),
        origin.system.clone(),
        campaign.date.max(origin.end_date()),
    );
    contract.attacker = origin.attacker;
    contract.ally = origin.ally;
    contract.opposition = origin.opposition;
    contract.merc_subcontract = origin.merc_subcontract;
    contract.length_months = contract_length(
        contract.mission,
        campaign.options.variable_contract_length,
        dice,
    );
    clauses::negotiate(ctx, &mut contract, dice);
    contract.payment_multiplier = ctx
        .valuation
        .payment_multiplier(&contract, campaign, ctx.factions);
    contract.parts_availability = ctx
        .valuation
        .parts_availability(&contract, campaign, ctx.factions);
    contract.name = contract_name(ctx, &contract, contract.mission.name());

    debug!(
        id = %contract.id,
        origin = %origin.id,
        mission = %contract.mission,
        "generated follow-up"
    );
    contract
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{blank_contract, code, date, sys, FixtureWorld};
    use market_core::test_support::ScriptedDice;
    use market_core::{validate_contract, CommandRights};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn relief_duty_attacks_on_low_roll() {
        let cc = code("CC");
        assert!(is_attacker(
            MissionType::ReliefDuty,
            &cc,
            &mut ScriptedDice::new([3])
        ));
        assert!(!is_attacker(
            MissionType::ReliefDuty,
            &cc,
            &mut ScriptedDice::new([4])
        ));
        let mut dice = ScriptedDice::new([]);
        assert!(!is_attacker(MissionType::GarrisonDuty, &cc, &mut dice));
        assert!(is_attacker(MissionType::RiotDuty, &code("REB"), &mut dice));
        assert!(is_attacker(MissionType::ObjectiveRaid, &cc, &mut dice));
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn variable_length_spread() {
        let mut dice = ScriptedDice::new([]);
        assert_eq!(contract_length(MissionType::GarrisonDuty, false, &mut dice), 18);
        // 18 * 3/4 = 13, pick in 0..=9
        let mut dice = ScriptedDice::new([0]);
        assert_eq!(contract_length(MissionType::GarrisonDuty, true, &mut dice), 13);
        let mut dice = ScriptedDice::new([9]);
        assert_eq!(contract_length(MissionType::GarrisonDuty, true, &mut dice), 22);
        // 3 * 3/4 = 2, pick in 0..=1
        let mut dice = ScriptedDice::new([1]);
        assert_eq!(contract_length(MissionType::ReconRaid, true, &mut dice), 3);
    }

    #[test]
    fn subcontract_terms_from_parent() {
        let parent = ClauseTerms {
            command: CommandRights::Liaison,
            salvage_exchange: false,
            salvage_pct: 50,
            straight_support: 0,
            battle_loss_comp: 15,
            transport_comp: 45,
        };
        let t = derive_subcontract_terms(&parent);
        assert_eq!(t.command, CommandRights::House);
        assert_eq!(t.salvage_pct, 40);
        assert_eq!(t.battle_loss_comp, 10);
        assert_eq!(t.straight_support, 0);
        assert_eq!(t.transport_comp, 100);

        let parent = ClauseTerms {
            command: CommandRights::Integrated,
            salvage_exchange: true,
            salvage_pct: 10,
            straight_support: 0,
            battle_loss_comp: 60,
            transport_comp: 20,
        };
        let t = derive_subcontract_terms(&parent);
        assert_eq!(t.command, CommandRights::Integrated);
        assert!(!t.salvage_exchange);
        assert_eq!(t.salvage_pct, 0);
        assert_eq!(t.battle_loss_comp, 40);
    }

    #[test]
    fn neutral_employer_not_at_war_is_dampened() {
        let world = FixtureWorld::inner_sphere();
        let campaign = world.campaign("CS", 2);
        let ctx = world.context(&campaign);
        // 2 + 2 -> other-powers index 2, planetary assault
        let mut dice = ScriptedDice::new([2, 2]);
        let r = resolve(&ctx, &code("CS"), &mut dice).unwrap();
        assert_eq!(r.mission, MissionType::GarrisonDuty);
        assert!(!r.attacker);
        assert_eq!(
            world.targets_requested.borrow().last(),
            Some(&(code("CC"), code("CS")))
        );
    }

    #[test]
    fn neutral_employer_at_war_keeps_assault() {
        let mut world = FixtureWorld::inner_sphere();
        world.wars.push((code("CC"), code("CS")));
        let campaign = world.campaign("CS", 2);
        let ctx = world.context(&campaign);
        let mut dice = ScriptedDice::new([2, 2]);
        let r = resolve(&ctx, &code("CS"), &mut dice).unwrap();
        assert_eq!(r.mission, MissionType::PlanetaryAssault);
        assert!(r.attacker);
        assert_eq!(
            world.targets_requested.borrow().last(),
            Some(&(code("CS"), code("CC")))
        );
    }

    #[test]
    fn garrison_against_rebels_becomes_riot_duty() {
        let mut world = FixtureWorld::inner_sphere();
        world.enemies = vec![code("REB")];
        let campaign = world.campaign("FS", 2);
        let ctx = world.context(&campaign);
        let mut dice = ScriptedDice::new([5, 5]);
        let r = resolve(&ctx, &code("FS"), &mut dice).unwrap();
        assert_eq!(r.mission, MissionType::RiotDuty);
        assert!(r.attacker);
        assert_eq!(r.system, sys("Sian"));
        assert_eq!(r.travel_days, 14);
    }

    #[test]
    fn resolution_failures() {
        let mut world = FixtureWorld::inner_sphere();
        world.enemies.clear();
        let campaign = world.campaign("FS", 2);
        let ctx = world.context(&campaign);
        // objective raid needs a drawn enemy
        let mut dice = ScriptedDice::new([3, 3]);
        assert_eq!(
            resolve(&ctx, &code("FS"), &mut dice).unwrap_err(),
            Unresolved::Enemy
        );

        let mut world = FixtureWorld::inner_sphere();
        world.travel_days = None;
        let ctx = world.context(&campaign);
        let mut dice = ScriptedDice::new([3, 3]);
        assert_eq!(
            resolve(&ctx, &code("FS"), &mut dice).unwrap_err(),
            Unresolved::JumpPath
        );
    }

    #[test]
    fn cadre_duty_ally_is_green_and_worst_quality() {
        let world = FixtureWorld::inner_sphere();
        let campaign = world.campaign("FS", 2);
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let mut dice = ScriptedDice::new([5, 6]).with_fallback(6);
        let c = generate(&ctx, &mut state, &mut dice, Some(code("FS")), 1).unwrap();
        assert_eq!(c.mission, MissionType::CadreDuty);
        assert_eq!(c.ally.skill, SkillLevel::Green);
        assert_eq!(c.ally.quality, QualityRating::F);
        assert_eq!(c.start, date(3025, 3, 15));
        assert_eq!(c.name, "3025 - FS - Sian Cadre Duty");
    }

    #[test]
    fn exhausted_retries_allocate_no_id() {
        let mut world = FixtureWorld::inner_sphere();
        world.target = None;
        let campaign = world.campaign("FS", 2);
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(generate(&ctx, &mut state, &mut rng, Some(code("FS")), 3).is_none());
        assert_eq!(state.last_id(), 0);
        assert!(generate(&ctx, &mut state, &mut rng, None, 3).is_none());
    }

    #[test]
    fn mercenary_employer_is_substituted() {
        let mut world = FixtureWorld::inner_sphere();
        world.employers = vec![code("MERC"), code("FS")];
        let campaign = world.campaign("MERC", 2);
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let c = generate_offer(&ctx, &mut state, &mut rng).unwrap();
        assert!(c.merc_subcontract);
        assert_eq!(c.employer, code("FS"));
    }

    #[test]
    fn mercenary_only_employers_give_up() {
        let mut world = FixtureWorld::inner_sphere();
        world.employers = vec![code("MERC")];
        let campaign = world.campaign("MERC", 2);
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate_offer(&ctx, &mut state, &mut rng).is_none());
        assert_eq!(state.last_id(), 0);
    }

    #[test]
    fn retainer_is_the_employer() {
        let mut world = FixtureWorld::inner_sphere();
        world.employers = vec![code("CC")];
        let mut campaign = world.campaign("MERC", 2);
        campaign.retainer = Some(code("LA"));
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let c = generate_offer(&ctx, &mut state, &mut rng).unwrap();
        assert_eq!(c.employer, code("LA"));
    }

    #[test]
    fn subcontract_keeps_near_enemy_or_falls_back() {
        let mut world = FixtureWorld::inner_sphere();
        world.enemies = vec![code("DC")];
        let campaign = world.campaign("MERC", 2);
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let mut parent = blank_contract("FS", "LA", MissionType::GarrisonDuty);
        parent.length_months = 60;
        // 3 + 3 -> objective raid; DC holds Robinson next door
        let mut dice = ScriptedDice::new([3, 3]);
        let sub = generate_subcontract(&ctx, &mut state, &mut dice, &parent);
        assert_eq!(sub.enemy, code("DC"));
        assert_eq!(sub.parent, Some(parent.id));
        assert_eq!(sub.system, parent.system);
        assert_eq!(sub.start, campaign.date);
        assert_eq!(sub.negotiation, ClauseModifiers::default());
        assert_eq!(sub.terms.transport_comp, 100);

        let mut world = FixtureWorld::inner_sphere();
        world.enemies = vec![code("CC")];
        let ctx = world.context(&campaign);
        let mut dice = ScriptedDice::new([3, 3]);
        let sub = generate_subcontract(&ctx, &mut state, &mut dice, &parent);
        assert_eq!(sub.enemy, code("LA"));
        assert_eq!(state.last_id(), 2);
    }

    #[test]
    fn followup_starts_after_origin() {
        let world = FixtureWorld::inner_sphere();
        let campaign = world.campaign("MERC", 2);
        let ctx = world.context(&campaign);
        let mut state = MarketState::new();
        let origin = blank_contract("FS", "CC", MissionType::ReconRaid);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let f = generate_followup(&ctx, &mut state, &mut rng, &origin);
        assert_eq!(f.mission, MissionType::PlanetaryAssault);
        assert_eq!(f.start, date(3025, 6, 1));
        assert_eq!(f.employer, origin.employer);
        assert_eq!(f.system, origin.system);
        assert_ne!(f.id, origin.id);

        let mut old = blank_contract("FS", "REB", MissionType::RiotDuty);
        old.start = date(3020, 1, 1);
        let f = generate_followup(&ctx, &mut state, &mut rng, &old);
        assert_eq!(f.mission, MissionType::GarrisonDuty);
        assert_eq!(f.start, campaign.date);
    }

    proptest! {
        #[test]
        fn generated_offers_are_valid(
            seed in any::<u64>(),
            urm in 0i32..=5,
            variable in any::<bool>(),
        ) {
            let world = FixtureWorld::inner_sphere();
            let mut campaign = world.campaign("MERC", urm);
            campaign.options.variable_contract_length = variable;
            let ctx = world.context(&campaign);
            let mut state = MarketState::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let c = generate_offer(&ctx, &mut state, &mut rng).unwrap();
            prop_assert!(validate_contract(&c).is_ok());
            prop_assert!(c.start > campaign.date);
            prop_assert_eq!(c.id.0, 1);
        }
    }
}
