//! Skill, quality and unit-rating tiers.

use serde::{Deserialize, Serialize};

/// Experience tier of a force or an administrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Green,
    Regular,
    Veteran,
    Elite,
}

impl SkillLevel {
    /// Experience level on the 0..=3 scale used by clause modifiers.
    pub fn experience(self) -> i32 {
        match self {
            SkillLevel::Green => 0,
            SkillLevel::Regular => 1,
            SkillLevel::Veteran => 2,
            SkillLevel::Elite => 3,
        }
    }

    /// Map a modified 2d6 roll to a skill tier.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            i32::MIN..=5 => SkillLevel::Green,
            6..=9 => SkillLevel::Regular,
            10..=11 => SkillLevel::Veteran,
            _ => SkillLevel::Elite,
        }
    }

    pub fn is_veteran_or_better(self) -> bool {
        self >= SkillLevel::Veteran
    }

    pub fn is_elite_or_better(self) -> bool {
        self >= SkillLevel::Elite
    }
}

/// Dragoon quality rating of a force, worst (F) to best (A).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityRating {
    F,
    D,
    C,
    B,
    A,
}

impl QualityRating {
    pub const WORST: QualityRating = QualityRating::F;

    /// Map a modified 2d6 roll to a quality tier.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            i32::MIN..=5 => QualityRating::F,
            6..=8 => QualityRating::D,
            9..=10 => QualityRating::C,
            11 => QualityRating::B,
            _ => QualityRating::A,
        }
    }
}

/// Overall rating of the player's command. Its modifier is the pervasive
/// "unit rating mod" input of the market.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitRating {
    F,
    D,
    C,
    B,
    A,
    #[serde(rename = "A*")]
    AStar,
}

impl UnitRating {
    /// The mid tier; mission rolls are made relative to it.
    pub const MID: UnitRating = UnitRating::C;

    pub fn modifier(self) -> i32 {
        match self {
            UnitRating::F => 0,
            UnitRating::D => 1,
            UnitRating::C => 2,
            UnitRating::B => 3,
            UnitRating::A => 4,
            UnitRating::AStar => 5,
        }
    }

    /// Inverse of [`UnitRating::modifier`], clamping out-of-range values.
    pub fn from_modifier(modifier: i32) -> Self {
        match modifier {
            i32::MIN..=0 => UnitRating::F,
            1 => UnitRating::D,
            2 => UnitRating::C,
            3 => UnitRating::B,
            4 => UnitRating::A,
            _ => UnitRating::AStar,
        }
    }
}

/// Skill and quality of one side of a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceRating {
    pub skill: SkillLevel,
    pub quality: QualityRating,
}

impl Default for ForceRating {
    fn default() -> Self {
        Self {
            skill: SkillLevel::Regular,
            quality: QualityRating::C,
        }
    }
}
