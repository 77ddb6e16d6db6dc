//! In-memory collaborators for unit tests.
//!
//! Relations draws cycle through fixed lists without touching the dice, so
//! scripted dice only have to cover the engine's own rolls.

use crate::rules::AtbMonthly;
use crate::valuation::StandardValuation;
use crate::MarketContext;
use chrono::NaiveDate;
use market_core::collab::{
    FactionDirectory, FactionRelations, JumpPaths, Personnel, SystemDirectory,
};
use market_core::{
    AdminRole, Campaign, CampaignOptions, ClauseModifiers, ClauseTerms, Contract, ContractId,
    Dice, Faction, FactionCode, ForceRating, MissionType, PowerTier, SkillLevel, SystemId,
    UnitRating,
};
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

pub(crate) fn code(s: &str) -> FactionCode {
    FactionCode::new(s)
}

pub(crate) fn sys(s: &str) -> SystemId {
    SystemId::new(s)
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) struct FixtureWorld {
    pub factions: BTreeMap<FactionCode, Faction>,
    pub capitals: BTreeMap<FactionCode, SystemId>,
    pub neutral: BTreeSet<FactionCode>,
    pub wars: Vec<(FactionCode, FactionCode)>,
    pub presence: BTreeMap<SystemId, Vec<FactionCode>>,
    pub neighbours: BTreeMap<SystemId, Vec<SystemId>>,
    pub hiring_halls: BTreeSet<SystemId>,
    pub employers: Vec<FactionCode>,
    pub enemies: Vec<FactionCode>,
    pub target: Option<SystemId>,
    pub travel_days: Option<u32>,
    pub admins: BTreeMap<AdminRole, SkillLevel>,
    pub rules: AtbMonthly,
    pub valuation: StandardValuation,
    next_employer: Cell<usize>,
    next_enemy: Cell<usize>,
    pub targets_requested: RefCell<Vec<(FactionCode, FactionCode)>>,
}

fn faction(c: &str, tier: PowerTier, clan: bool, periphery: bool) -> (FactionCode, Faction) {
    (
        code(c),
        Faction {
            code: code(c),
            name: c.to_string(),
            tier,
            clan,
            periphery,
        },
    )
}

impl FixtureWorld {
    pub fn inner_sphere() -> Self {
        let factions = BTreeMap::from([
            faction("FS", PowerTier::SuperPower, false, false),
            faction("LA", PowerTier::SuperPower, false, false),
            faction("CC", PowerTier::MajorPower, false, false),
            faction("DC", PowerTier::SuperPower, false, false),
            faction("CJF", PowerTier::Small, true, false),
            faction("TC", PowerTier::MinorPower, false, true),
            faction("MOC", PowerTier::MinorPower, false, true),
            faction("CS", PowerTier::Small, false, false),
            faction("MERC", PowerTier::Small, false, false),
        ]);
        let presence = BTreeMap::from([
            (sys("Kathil"), vec![code("FS")]),
            (sys("New Avalon"), vec![code("FS")]),
            (sys("Robinson"), vec![code("FS"), code("DC")]),
            (sys("Sian"), vec![code("CC")]),
            (sys("Taurus"), vec![code("TC")]),
            (sys("Pinard"), vec![code("TC")]),
            (sys("Terra"), vec![code("CS")]),
        ]);
        let neighbours = BTreeMap::from([
            (sys("Kathil"), vec![sys("New Avalon"), sys("Robinson")]),
            (sys("Taurus"), vec![sys("Pinard")]),
        ]);
        Self {
            factions,
            capitals: BTreeMap::from([
                (code("FS"), sys("New Avalon")),
                (code("CC"), sys("Sian")),
                (code("TC"), sys("Taurus")),
                (code("CS"), sys("Terra")),
            ]),
            neutral: BTreeSet::from([code("CS")]),
            wars: vec![],
            presence,
            neighbours,
            hiring_halls: BTreeSet::new(),
            employers: vec![code("FS")],
            enemies: vec![code("CC")],
            target: Some(sys("Sian")),
            travel_days: Some(14),
            admins: BTreeMap::from([
                (AdminRole::Command, SkillLevel::Regular),
                (AdminRole::Transport, SkillLevel::Regular),
                (AdminRole::Logistics, SkillLevel::Regular),
            ]),
            rules: AtbMonthly::default(),
            valuation: StandardValuation,
            next_employer: Cell::new(0),
            next_enemy: Cell::new(0),
            targets_requested: RefCell::new(vec![]),
        }
    }

    /// Campaign on the first of the month at Kathil.
    pub fn campaign(&self, faction: &str, unit_rating_mod: i32) -> Campaign {
        Campaign {
            date: date(3025, 3, 1),
            faction: code(faction),
            retainer: None,
            location: sys("Kathil"),
            unit_rating: UnitRating::from_modifier(unit_rating_mod),
            effective_unit_count: 24,
            active_contracts: vec![],
            options: CampaignOptions::default(),
        }
    }

    pub fn context<'a>(&'a self, campaign: &'a Campaign) -> MarketContext<'a> {
        MarketContext {
            campaign,
            factions: self,
            systems: self,
            relations: self,
            jumps: self,
            personnel: self,
            valuation: &self.valuation,
            rules: &self.rules,
        }
    }

    fn cycle(list: &[FactionCode], next: &Cell<usize>) -> Option<FactionCode> {
        if list.is_empty() {
            return None;
        }
        let i = next.get();
        next.set(i + 1);
        Some(list[i % list.len()].clone())
    }
}

/// Contract with neutral terms at Kathil, for modifier tests.
pub(crate) fn blank_contract(employer: &str, enemy: &str, mission: MissionType) -> Contract {
    Contract {
        id: ContractId(1),
        name: "test".to_string(),
        employer: code(employer),
        enemy: code(enemy),
        mission,
        system: sys("Kathil"),
        start: date(3025, 3, 1),
        length_months: mission.base_length_months(),
        terms: ClauseTerms::default(),
        ally: ForceRating::default(),
        opposition: ForceRating::default(),
        attacker: !mission.is_defensive(),
        parent: None,
        merc_subcontract: false,
        payment_multiplier: Decimal::ONE,
        parts_availability: 0,
        negotiation: ClauseModifiers::default(),
    }
}

impl FactionDirectory for FixtureWorld {
    fn faction(&self, code: &FactionCode) -> Option<&Faction> {
        self.factions.get(code)
    }

    fn is_neutral(&self, code: &FactionCode) -> bool {
        self.neutral.contains(code)
    }

    fn at_war(&self, a: &FactionCode, b: &FactionCode, _date: NaiveDate) -> bool {
        self.wars
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    fn starting_planet(&self, code: &FactionCode, _date: NaiveDate) -> Option<SystemId> {
        self.capitals.get(code).cloned()
    }
}

impl SystemDirectory for FixtureWorld {
    fn factions_at(&self, system: &SystemId, _date: NaiveDate) -> Vec<FactionCode> {
        self.presence.get(system).cloned().unwrap_or_default()
    }

    fn systems_within(&self, system: &SystemId, _radius_ly: f64) -> Vec<SystemId> {
        self.neighbours.get(system).cloned().unwrap_or_default()
    }

    fn system_name(&self, system: &SystemId) -> Option<String> {
        self.presence.contains_key(system).then(|| system.0.clone())
    }

    fn is_hiring_hall(&self, system: &SystemId, _date: NaiveDate) -> bool {
        self.hiring_halls.contains(system)
    }
}

impl FactionRelations for FixtureWorld {
    fn random_employer(&self, _dice: &mut dyn Dice) -> Option<FactionCode> {
        Self::cycle(&self.employers, &self.next_employer)
    }

    fn random_enemy(
        &self,
        _employer: &FactionCode,
        _garrison: bool,
        _dice: &mut dyn Dice,
    ) -> Option<FactionCode> {
        Self::cycle(&self.enemies, &self.next_enemy)
    }

    fn mission_target(
        &self,
        attacker: &FactionCode,
        defender: &FactionCode,
        _dice: &mut dyn Dice,
    ) -> Option<SystemId> {
        self.targets_requested
            .borrow_mut()
            .push((attacker.clone(), defender.clone()));
        self.target.clone()
    }

    fn employer_codes(&self) -> BTreeSet<FactionCode> {
        self.factions
            .keys()
            .filter(|c| !c.is_mercenary())
            .cloned()
            .collect()
    }
}

impl JumpPaths for FixtureWorld {
    fn travel_days(&self, _from: &SystemId, _to: &SystemId) -> Option<u32> {
        self.travel_days
    }
}

impl Personnel for FixtureWorld {
    fn best_admin(&self, role: AdminRole) -> Option<SkillLevel> {
        self.admins.get(&role).copied()
    }
}
