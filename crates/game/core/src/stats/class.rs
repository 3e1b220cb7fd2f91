//! Class determination from relative activity vs. sleep quality.

use strum::{Display, EnumIter, EnumString};

use crate::metrics::HealthSnapshot;

/// Coarse character archetype derived from a daily snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterClass {
    Warrior,
    Mage,
}

impl CharacterClass {
    /// Determine the class from a snapshot.
    ///
    /// Compares a movement-weighted activity score against a REM-weighted
    /// sleep score:
    ///
    /// ```text
    /// activity_weight = activity.score + steps / 1000
    /// sleep_weight    = sleep.score + rem_sleep × 0.1
    /// ```
    ///
    /// Warrior requires strictly greater activity weight; ties resolve to
    /// mage. Pure function: the same snapshot always yields the same
    /// class.
    pub fn determine(snapshot: &HealthSnapshot) -> Self {
        let activity_weight =
            snapshot.activity.score as f64 + snapshot.activity.steps as f64 / 1000.0;
        let sleep_weight =
            snapshot.sleep.score as f64 + snapshot.sleep.contributors.rem_sleep as f64 * 0.1;

        if activity_weight > sleep_weight {
            Self::Warrior
        } else {
            Self::Mage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ActivityMetrics, ReadinessMetrics, SleepContributors, SleepMetrics};
    use std::str::FromStr;

    fn snapshot(
        sleep_score: u32,
        rem_sleep: u32,
        activity_score: u32,
        steps: u32,
    ) -> HealthSnapshot {
        HealthSnapshot {
            sleep: SleepMetrics {
                score: sleep_score,
                contributors: SleepContributors {
                    deep_sleep: 80,
                    efficiency: 85,
                    latency: 75,
                    rem_sleep,
                    restfulness: 78,
                    timing: 80,
                    total_sleep: 85,
                },
            },
            activity: ActivityMetrics {
                score: activity_score,
                steps,
                active_calories: 300,
            },
            readiness: ReadinessMetrics {
                score: 82,
                hrv_balance: 75.0,
                temperature_deviation: 0.0,
            },
        }
    }

    #[test]
    fn high_activity_yields_warrior() {
        // activity weight 95 + 15 = 110 vs sleep weight 70 + 7 = 77
        let class = CharacterClass::determine(&snapshot(70, 70, 95, 15_000));
        assert_eq!(class, CharacterClass::Warrior);
    }

    #[test]
    fn high_sleep_yields_mage() {
        // activity weight 60 + 5 = 65 vs sleep weight 95 + 9.5 = 104.5
        let class = CharacterClass::determine(&snapshot(95, 95, 60, 5_000));
        assert_eq!(class, CharacterClass::Mage);
    }

    #[test]
    fn ties_resolve_to_mage() {
        // activity weight 80 + 0 = 80 vs sleep weight 80 + 0 = 80
        let class = CharacterClass::determine(&snapshot(80, 0, 80, 0));
        assert_eq!(class, CharacterClass::Mage);
    }

    #[test]
    fn determination_is_pure() {
        let snap = snapshot(70, 70, 95, 15_000);
        assert_eq!(
            CharacterClass::determine(&snap),
            CharacterClass::determine(&snap)
        );
    }

    #[test]
    fn string_forms_round_trip() {
        assert_eq!(CharacterClass::Warrior.to_string(), "warrior");
        assert_eq!(
            CharacterClass::from_str("mage").unwrap(),
            CharacterClass::Mage
        );
    }
}
