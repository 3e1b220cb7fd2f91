//! Display-variant stat derivation.

use crate::metrics::HealthSnapshot;

use super::base::BaseStats;

/// Stat block shown to the player, recomputed on demand from a snapshot.
///
/// Never stored by the core; persistence of current HP/MP across
/// adventures belongs to the embedding layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub hp: u32,
    pub mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub luck: u32,
    /// Critical-hit rate in percent.
    pub critical_rate: u32,
}

impl CharacterStats {
    /// Derive the display stat block from a daily snapshot.
    ///
    /// # Formulas (floor rounding throughout)
    ///
    /// ```text
    /// mp            = base.mp + floor(sleep.score × 1.5)
    /// attack        = base.attack + steps/500 + active_calories/50
    /// critical_rate = 5 + floor(hrv_balance × 0.2)
    /// hp, defense, speed, luck = base values
    /// ```
    ///
    /// Defense intentionally stays at base here; the readiness-adjusted
    /// defense belongs to [`super::SyncStats`].
    pub fn derive(snapshot: &HealthSnapshot) -> Self {
        let base = BaseStats::new();
        Self {
            hp: base.hp,
            mp: base.mp + mp_bonus(snapshot.sleep.score),
            attack: base.attack + attack_bonus(&snapshot.activity),
            defense: base.defense,
            speed: base.speed,
            luck: base.luck,
            critical_rate: BaseStats::CRITICAL_RATE
                + critical_bonus(snapshot.readiness.hrv_balance),
        }
    }
}

/// MP bonus from the sleep score: floor(score × 1.5).
///
/// Shared with the feedback classifier so sync messages report the same
/// gain the stat model grants.
pub(crate) fn mp_bonus(sleep_score: u32) -> u32 {
    (sleep_score * 3) / 2
}

/// Attack bonus from daily movement: steps/500 + calories/50.
pub(super) fn attack_bonus(activity: &crate::metrics::ActivityMetrics) -> u32 {
    activity.steps / 500 + activity.active_calories / 50
}

/// Critical-rate bonus from HRV balance: floor(hrv × 0.2), never negative.
pub(super) fn critical_bonus(hrv_balance: f64) -> u32 {
    (hrv_balance * 0.2).max(0.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ActivityMetrics, ReadinessMetrics, SleepContributors, SleepMetrics};

    fn snapshot(sleep_score: u32, steps: u32, calories: u32, hrv: f64) -> HealthSnapshot {
        HealthSnapshot {
            sleep: SleepMetrics {
                score: sleep_score,
                contributors: SleepContributors {
                    deep_sleep: 80,
                    efficiency: 85,
                    latency: 75,
                    rem_sleep: 82,
                    restfulness: 78,
                    timing: 80,
                    total_sleep: 85,
                },
            },
            activity: ActivityMetrics {
                score: 75,
                steps,
                active_calories: calories,
            },
            readiness: ReadinessMetrics {
                score: 82,
                hrv_balance: hrv,
                temperature_deviation: -0.1,
            },
        }
    }

    #[test]
    fn mp_is_exactly_base_plus_floor_of_scaled_sleep() {
        for score in [0, 1, 55, 85, 100] {
            let stats = CharacterStats::derive(&snapshot(score, 0, 0, 0.0));
            assert_eq!(stats.mp, 50 + (score as f64 * 1.5).floor() as u32);
        }
        // Spot-check the odd-score case: floor(85 × 1.5) = 127
        assert_eq!(CharacterStats::derive(&snapshot(85, 0, 0, 0.0)).mp, 177);
    }

    #[test]
    fn attack_is_monotonic_in_steps_and_calories() {
        let mut last = 0;
        for steps in (0..20_000).step_by(250) {
            let attack = CharacterStats::derive(&snapshot(70, steps, 0, 0.0)).attack;
            assert!(attack >= last);
            last = attack;
        }
        let mut last = 0;
        for calories in (0..1_000).step_by(25) {
            let attack = CharacterStats::derive(&snapshot(70, 0, calories, 0.0)).attack;
            assert!(attack >= last);
            last = attack;
        }
    }

    #[test]
    fn attack_combines_step_and_calorie_bonuses() {
        // 8000/500 = 16, 300/50 = 6
        let stats = CharacterStats::derive(&snapshot(70, 8000, 300, 0.0));
        assert_eq!(stats.attack, 10 + 16 + 6);
    }

    #[test]
    fn critical_rate_scales_with_hrv_balance() {
        assert_eq!(CharacterStats::derive(&snapshot(70, 0, 0, 75.0)).critical_rate, 20);
        assert_eq!(CharacterStats::derive(&snapshot(70, 0, 0, 0.0)).critical_rate, 5);
        // Negative HRV balance never drags the rate below base
        assert_eq!(CharacterStats::derive(&snapshot(70, 0, 0, -10.0)).critical_rate, 5);
    }

    #[test]
    fn untouched_stats_stay_at_base() {
        let stats = CharacterStats::derive(&snapshot(95, 12_000, 500, 90.0));
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.defense, 10);
        assert_eq!(stats.speed, 10);
        assert_eq!(stats.luck, 5);
    }

    #[test]
    fn zero_metrics_degrade_to_base_values() {
        let stats = CharacterStats::derive(&snapshot(0, 0, 0, 0.0));
        assert_eq!(stats.mp, 50);
        assert_eq!(stats.attack, 10);
        assert_eq!(stats.critical_rate, 5);
    }
}
