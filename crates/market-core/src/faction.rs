//! Faction and star-system identifiers plus the static faction record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short faction code, e.g. "FS", "LA", "MERC".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactionCode(pub String);

impl FactionCode {
    pub const MERCENARY: &'static str = "MERC";
    pub const PIRATE: &'static str = "PIR";
    pub const REBEL: &'static str = "REB";
    pub const INDEPENDENT: &'static str = "IND";
    pub const COMSTAR: &'static str = "CS";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn mercenary() -> Self {
        Self::new(Self::MERCENARY)
    }

    pub fn pirate() -> Self {
        Self::new(Self::PIRATE)
    }

    pub fn rebel() -> Self {
        Self::new(Self::REBEL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_mercenary(&self) -> bool {
        self.0 == Self::MERCENARY
    }

    pub fn is_pirate(&self) -> bool {
        self.0 == Self::PIRATE
    }

    pub fn is_rebel(&self) -> bool {
        self.0 == Self::REBEL
    }

    /// Rebels and pirates are "irregular" enemies: they never hold territory
    /// and are never constrained by distance.
    pub fn is_irregular(&self) -> bool {
        self.is_rebel() || self.is_pirate()
    }

    pub fn is_independent(&self) -> bool {
        self.0 == Self::INDEPENDENT
    }

    pub fn is_comstar(&self) -> bool {
        self.0 == Self::COMSTAR
    }
}

impl fmt::Display for FactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of a star system.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(pub String);

impl SystemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Political weight of a faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerTier {
    /// Great houses and their peers.
    SuperPower,
    MajorPower,
    MinorPower,
    /// Everything else: independents, bandit kingdoms, single worlds.
    Small,
}

impl PowerTier {
    pub fn is_major_or_super(self) -> bool {
        matches!(self, PowerTier::SuperPower | PowerTier::MajorPower)
    }
}

/// Static faction record as served by the faction directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    /// Faction code.
    pub code: FactionCode,
    /// Display name.
    pub name: String,
    /// Power tier.
    pub tier: PowerTier,
    /// Clan faction.
    #[serde(default)]
    pub clan: bool,
    /// Periphery faction.
    #[serde(default)]
    pub periphery: bool,
}

impl Faction {
    pub fn is_major_or_super(&self) -> bool {
        self.tier.is_major_or_super()
    }

    pub fn is_minor_power(&self) -> bool {
        self.tier == PowerTier::MinorPower
    }

    /// Counts toward the "a real power is present" check of the offer count.
    pub fn is_power_or_clan(&self) -> bool {
        self.is_major_or_super() || self.clan
    }
}
