//! YAML scenario: factions, star systems, wars and the campaign to run.

use chrono::NaiveDate;
use market_core::{AdminRole, Campaign, FactionCode, PowerTier, SkillLevel, SystemId};
use market_gen::AtbMonthly;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

fn yes() -> bool {
    true
}

/// A faction as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionSpec {
    pub code: FactionCode,
    pub name: String,
    pub tier: PowerTier,
    #[serde(default)]
    pub clan: bool,
    #[serde(default)]
    pub periphery: bool,
    #[serde(default)]
    pub capital: Option<SystemId>,
    /// Parts availability modifier of the faction's technology era.
    #[serde(default)]
    pub era_mod: i32,
    /// Factions this one hires mercenaries to fight.
    #[serde(default)]
    pub enemies: Vec<FactionCode>,
    /// Whether the faction offers contracts at all.
    #[serde(default = "yes")]
    pub employer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSpec {
    pub id: SystemId,
    pub name: String,
    /// Map position in light years.
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub owners: Vec<FactionCode>,
    #[serde(default)]
    pub hiring_hall: bool,
}

/// A war between two factions, optionally bounded in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarSpec {
    pub between: (FactionCode, FactionCode),
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl WarSpec {
    pub fn involves(&self, a: &FactionCode, b: &FactionCode) -> bool {
        let (x, y) = &self.between;
        (x == a && y == b) || (x == b && y == a)
    }

    pub fn active_on(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| s <= date) && self.end.map_or(true, |e| date < e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub factions: Vec<FactionSpec>,
    pub systems: Vec<SystemSpec>,
    #[serde(default)]
    pub wars: Vec<WarSpec>,
    /// Diplomatically neutral factions.
    #[serde(default)]
    pub neutral: Vec<FactionCode>,
    pub campaign: Campaign,
    /// Best administrator per role; missing roles count as green.
    #[serde(default)]
    pub admins: BTreeMap<AdminRole, SkillLevel>,
    #[serde(default)]
    pub rules: AtbMonthly,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid scenario yaml: {0}")]
    Parse(String),
    #[error("faction {0} is defined twice")]
    DuplicateFaction(FactionCode),
    #[error("system {0} is defined twice")]
    DuplicateSystem(SystemId),
    #[error("{context} refers to unknown faction {code}")]
    UnknownFaction {
        code: FactionCode,
        context: String,
    },
    #[error("{context} refers to unknown system {id}")]
    UnknownSystem { id: SystemId, context: String },
    #[error("unknown embedded scenario: {0}")]
    UnknownEmbedded(String),
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        ScenarioError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for ScenarioError {
    fn from(e: serde_yaml::Error) -> Self {
        ScenarioError::Parse(e.to_string())
    }
}

impl Scenario {
    pub fn from_yaml_str(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Check that every faction and system reference resolves. Rebels and
    /// pirates need no definition.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut codes = BTreeSet::new();
        for f in &self.factions {
            if !codes.insert(&f.code) {
                return Err(ScenarioError::DuplicateFaction(f.code.clone()));
            }
        }
        let mut ids = BTreeSet::new();
        for s in &self.systems {
            if !ids.insert(&s.id) {
                return Err(ScenarioError::DuplicateSystem(s.id.clone()));
            }
        }

        let faction = |code: &FactionCode, context: String| {
            if code.is_irregular() || codes.contains(code) {
                Ok(())
            } else {
                Err(ScenarioError::UnknownFaction {
                    code: code.clone(),
                    context,
                })
            }
        };
        let system = |id: &SystemId, context: String| {
            if ids.contains(id) {
                Ok(())
            } else {
                Err(ScenarioError::UnknownSystem {
                    id: id.clone(),
                    context,
                })
            }
        };

        for f in &self.factions {
            if let Some(capital) = &f.capital {
                system(capital, format!("capital of {}", f.code))?;
            }
            for enemy in &f.enemies {
                faction(enemy, format!("enemies of {}", f.code))?;
            }
        }
        for s in &self.systems {
            for owner in &s.owners {
                faction(owner, format!("owners of {}", s.id))?;
            }
        }
        for war in &self.wars {
            faction(&war.between.0, "war".to_string())?;
            faction(&war.between.1, "war".to_string())?;
        }
        for code in &self.neutral {
            faction(code, "neutral list".to_string())?;
        }

        let campaign = &self.campaign;
        system(&campaign.location, "campaign location".to_string())?;
        if let Some(retainer) = &campaign.retainer {
            faction(retainer, "campaign retainer".to_string())?;
        }
        for c in &campaign.active_contracts {
            faction(&c.employer, format!("active contract {}", c.id))?;
            system(&c.system, format!("active contract {}", c.id))?;
        }
        Ok(())
    }
}

/// Scenarios shipped with the binary, by name.
pub fn embedded_scenario(name: &str) -> Result<&'static str, ScenarioError> {
    match name {
        "demo" => Ok(include_str!("../../../assets/scenarios/demo.yaml")),
        other => Err(ScenarioError::UnknownEmbedded(other.to_string())),
    }
}
