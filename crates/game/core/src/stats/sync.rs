//! Post-sync stat derivation applied to a persisted character.

use crate::metrics::HealthSnapshot;

use super::base::BaseStats;
use super::derived::{attack_bonus, critical_bonus, mp_bonus};

/// Stat block written back to a persisted character after a provider sync.
///
/// Unlike the display variant, defense gains a readiness bonus and the
/// maxima are exposed so the persistence layer can update both current
/// and maximum columns in one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Critical-hit rate in percent.
    pub critical_rate: u32,
}

impl SyncStats {
    /// Derive the post-sync stat block from a daily snapshot.
    ///
    /// Shares the mp/attack formulas with the display variant and adds
    /// `defense = base.defense + readiness.score / 10`. Floor rounding
    /// throughout.
    pub fn derive(snapshot: &HealthSnapshot) -> Self {
        let base = BaseStats::new();
        let mp = base.mp + mp_bonus(snapshot.sleep.score);
        Self {
            hp: base.hp,
            max_hp: base.hp,
            mp,
            max_mp: mp,
            attack: base.attack + attack_bonus(&snapshot.activity),
            defense: base.defense + snapshot.readiness.score / 10,
            critical_rate: BaseStats::CRITICAL_RATE + critical_bonus(snapshot.readiness.hrv_balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ActivityMetrics, ReadinessMetrics, SleepContributors, SleepMetrics};

    fn snapshot(sleep_score: u32, readiness_score: u32) -> HealthSnapshot {
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
                steps: 8000,
                active_calories: 300,
            },
            readiness: ReadinessMetrics {
                score: readiness_score,
                hrv_balance: 75.0,
                temperature_deviation: 0.0,
            },
        }
    }

    #[test]
    fn defense_gains_readiness_bonus() {
        assert_eq!(SyncStats::derive(&snapshot(80, 82)).defense, 10 + 8);
        assert_eq!(SyncStats::derive(&snapshot(80, 0)).defense, 10);
        assert_eq!(SyncStats::derive(&snapshot(80, 100)).defense, 20);
    }

    #[test]
    fn maxima_mirror_derived_values() {
        let stats = SyncStats::derive(&snapshot(80, 82));
        assert_eq!(stats.max_hp, stats.hp);
        assert_eq!(stats.max_mp, stats.mp);
    }

    #[test]
    fn shared_formulas_match_display_variant() {
        let snap = snapshot(85, 82);
        let sync = SyncStats::derive(&snap);
        let display = crate::stats::CharacterStats::derive(&snap);
        assert_eq!(sync.mp, display.mp);
        assert_eq!(sync.attack, display.attack);
        assert_eq!(sync.critical_rate, display.critical_rate);
        // The one deliberate divergence
        assert_ne!(sync.defense, display.defense);
    }
}
