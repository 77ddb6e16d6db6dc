//! Mission type selection.

use crate::rules::MarketRules;
use market_core::{Dice, MissionType, UnitRating};

/// Roll a mission: `2d6 + unit rating mod - C`, clamped to 2..=12, looked up
/// in the rules' table column for the employer's power status.
pub fn select_mission(
    rules: &dyn MarketRules,
    dice: &mut dyn Dice,
    unit_rating_mod: i32,
    major_power: bool,
) -> MissionType {
    let roll = (dice.two_d6() + unit_rating_mod - UnitRating::MID.modifier()).clamp(2, 12);
    rules.mission_table(major_power)[(roll - 2) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::AtbMonthly;
    use market_core::test_support::ScriptedDice;
    use proptest::prelude::*;

    #[test]
    fn roll_is_relative_to_mid_tier() {
        let rules = AtbMonthly::default();
        // 5 + 5 + (2 - 2) = 10 -> index 8
        let mut dice = ScriptedDice::new([5, 5]);
        assert_eq!(
            select_mission(&rules, &mut dice, 2, true),
            MissionType::GarrisonDuty
        );
        // 5 + 5 + (4 - 2) = 12 -> index 10
        let mut dice = ScriptedDice::new([5, 5]);
        assert_eq!(
            select_mission(&rules, &mut dice, 4, false),
            MissionType::DiversionaryRaid
        );
    }

    #[test]
    fn low_rating_clamps_to_first_row() {
        let rules = AtbMonthly::default();
        let mut dice = ScriptedDice::new([1, 1]);
        assert_eq!(
            select_mission(&rules, &mut dice, 0, true),
            MissionType::GuerrillaWarfare
        );
    }

    proptest! {
        #[test]
        fn always_in_table(a in 1i32..=6, b in 1i32..=6, m in -3i32..=8, major in any::<bool>()) {
            let rules = AtbMonthly::default();
            let mut dice = ScriptedDice::new([a, b]);
            let mission = select_mission(&rules, &mut dice, m, major);
            prop_assert!(rules.mission_table(major).contains(&mission));
        }
    }
}
