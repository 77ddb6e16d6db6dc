//! In-memory world built from a [`Scenario`]. Implements every collaborator
//! the market reads from.
//!
//! Ownership is static over the scenario; wars may start and end. Jumps are
//! links between systems at most [`JUMP_RANGE_LY`] apart, one week each.

use crate::scenario::{Scenario, SystemSpec, WarSpec};
use chrono::NaiveDate;
use market_core::collab::{
    FactionDirectory, FactionRelations, JumpPaths, Personnel, SystemDirectory,
};
use market_core::{AdminRole, Dice, Faction, FactionCode, SkillLevel, SystemId};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Maximum length of a single jump.
pub const JUMP_RANGE_LY: f64 = 30.0;

/// Travel time per jump, recharge included.
pub const DAYS_PER_JUMP: u32 = 7;

#[derive(Debug, Clone)]
pub struct ScenarioWorld {
    factions: BTreeMap<FactionCode, Faction>,
    capitals: BTreeMap<FactionCode, SystemId>,
    era_mods: BTreeMap<FactionCode, i32>,
    hostile: BTreeMap<FactionCode, Vec<FactionCode>>,
    employers: BTreeSet<FactionCode>,
    neutral: BTreeSet<FactionCode>,
    wars: Vec<WarSpec>,
    systems: BTreeMap<SystemId, SystemSpec>,
    admins: BTreeMap<AdminRole, SkillLevel>,
}

impl ScenarioWorld {
    pub fn new(scenario: &Scenario) -> Self {
        let mut world = Self {
            factions: BTreeMap::new(),
            capitals: BTreeMap::new(),
            era_mods: BTreeMap::new(),
            hostile: BTreeMap::new(),
            employers: BTreeSet::new(),
            neutral: scenario.neutral.iter().cloned().collect(),
            wars: scenario.wars.clone(),
            systems: scenario
                .systems
                .iter()
                .map(|s| (s.id.clone(), s.clone()))
                .collect(),
            admins: scenario.admins.clone(),
        };
        for spec in &scenario.factions {
            let code = spec.code.clone();
            world.factions.insert(
                code.clone(),
                Faction {
                    code: code.clone(),
                    name: spec.name.clone(),
                    tier: spec.tier,
                    clan: spec.clan,
                    periphery: spec.periphery,
                },
            );
            if let Some(capital) = &spec.capital {
                world.capitals.insert(code.clone(), capital.clone());
            }
            world.era_mods.insert(code.clone(), spec.era_mod);
            world.hostile.insert(code.clone(), spec.enemies.clone());
            if spec.employer {
                world.employers.insert(code);
            }
        }
        world
    }

    fn distance(a: &SystemSpec, b: &SystemSpec) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    fn owned_by(&self, code: &FactionCode) -> Vec<SystemId> {
        self.systems
            .values()
            .filter(|s| s.owners.contains(code))
            .map(|s| s.id.clone())
            .collect()
    }

    fn owners(&self, id: &SystemId) -> &[FactionCode] {
        self.systems
            .get(id)
            .map(|s| s.owners.as_slice())
            .unwrap_or_default()
    }

    /// Fewest jumps between two systems, breadth-first over jump links.
    pub fn jump_count(&self, from: &SystemId, to: &SystemId) -> Option<u32> {
        if !self.systems.contains_key(to) {
            return None;
        }
        if from == to {
            return Some(0);
        }
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        visited.insert(from.clone());
        queue.push_back((from.clone(), 0));
        while let Some((current, hops)) = queue.pop_front() {
            for next in self.systems_within(&current, JUMP_RANGE_LY) {
                if next == *to {
                    return Some(hops + 1);
                }
                if visited.insert(next.clone()) {
                    queue.push_back((next, hops + 1));
                }
            }
        }
        None
    }
}

impl FactionDirectory for ScenarioWorld {
    fn faction(&self, code: &FactionCode) -> Option<&Faction> {
        self.factions.get(code)
    }

    fn is_neutral(&self, code: &FactionCode) -> bool {
        self.neutral.contains(code)
    }

    fn at_war(&self, a: &FactionCode, b: &FactionCode, date: NaiveDate) -> bool {
        self.wars
            .iter()
            .any(|w| w.involves(a, b) && w.active_on(date))
    }

    fn starting_planet(&self, code: &FactionCode, _date: NaiveDate) -> Option<SystemId> {
        self.capitals.get(code).cloned()
    }

    fn era_modifier(&self, code: &FactionCode, _year: i32) -> i32 {
        self.era_mods.get(code).copied().unwrap_or(0)
    }
}

impl SystemDirectory for ScenarioWorld {
    fn factions_at(&self, system: &SystemId, _date: NaiveDate) -> Vec<FactionCode> {
        self.owners(system).to_vec()
    }

    fn systems_within(&self, system: &SystemId, radius_ly: f64) -> Vec<SystemId> {
        let Some(origin) = self.systems.get(system) else {
            return vec![];
        };
        self.systems
            .values()
            .filter(|s| s.id != origin.id && Self::distance(origin, s) <= radius_ly)
            .map(|s| s.id.clone())
            .collect()
    }

    fn system_name(&self, system: &SystemId) -> Option<String> {
        self.systems.get(system).map(|s| s.name.clone())
    }

    fn is_hiring_hall(&self, system: &SystemId, _date: NaiveDate) -> bool {
        self.systems.get(system).map_or(false, |s| s.hiring_hall)
    }
}

impl FactionRelations for ScenarioWorld {
    fn random_employer(&self, dice: &mut dyn Dice) -> Option<FactionCode> {
        if self.employers.is_empty() {
            return None;
        }
        self.employers
            .iter()
            .nth(dice.pick(self.employers.len()))
            .cloned()
    }

    /// Garrisons also face raiders: rebels and pirates join the candidates.
    fn random_enemy(
        &self,
        employer: &FactionCode,
        garrison: bool,
        dice: &mut dyn Dice,
    ) -> Option<FactionCode> {
        let mut candidates = self.hostile.get(employer).cloned().unwrap_or_default();
        if garrison {
            candidates.push(FactionCode::rebel());
            candidates.push(FactionCode::pirate());
        }
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[dice.pick(candidates.len())].clone())
    }

    /// Irregular forces are fought on the regular side's ground. Otherwise
    /// the defender's systems within a jump of the attacker are preferred.
    fn mission_target(
        &self,
        attacker: &FactionCode,
        defender: &FactionCode,
        dice: &mut dyn Dice,
    ) -> Option<SystemId> {
        let candidates = if defender.is_irregular() {
            self.owned_by(attacker)
        } else if attacker.is_irregular() {
            self.owned_by(defender)
        } else {
            let held = self.owned_by(defender);
            let border: Vec<SystemId> = held
                .iter()
                .filter(|s| {
                    self.systems_within(s, JUMP_RANGE_LY)
                        .iter()
                        .any(|n| self.owners(n).contains(attacker))
                })
                .cloned()
                .collect();
            if border.is_empty() {
                held
            } else {
                border
            }
        };
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[dice.pick(candidates.len())].clone())
    }

    fn employer_codes(&self) -> BTreeSet<FactionCode> {
        self.employers.clone()
    }
}

impl JumpPaths for ScenarioWorld {
    fn travel_days(&self, from: &SystemId, to: &SystemId) -> Option<u32> {
        self.jump_count(from, to).map(|hops| hops * DAYS_PER_JUMP)
    }
}

impl Personnel for ScenarioWorld {
    fn best_admin(&self, role: AdminRole) -> Option<SkillLevel> {
        self.admins.get(&role).copied()
    }
}
