//! Rarity drop tables for adventure item drops.
//!
//! The drop table is a game-balance knob, not a hard contract: the three
//! health-score buckets and the monotonic cumulative ranges are fixed
//! structure, the numbers inside are tunable.

use super::item::Rarity;

/// Cumulative rarity thresholds for one health-score bucket.
///
/// Entries are `(upper_bound, rarity)` pairs checked in order against a
/// uniform `[0, 100)` roll; the final entry must have an upper bound of
/// 100 so every roll resolves.
pub type RarityTiers = &'static [(u32, Rarity)];

/// Rarity weighting and drop gate for adventure drops.
///
/// Higher daily health scores shift weight towards rarer tiers. A fixed
/// drop-chance gate is rolled independently of the tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTable {
    /// Tiers for health scores of 90 and above.
    pub high: RarityTiers,
    /// Tiers for health scores in 70..=89.
    pub mid: RarityTiers,
    /// Tiers for health scores below 70.
    pub low: RarityTiers,
    /// Probability (percent) that an adventure drops an item at all.
    pub drop_chance_percent: u32,
}

impl DropTable {
    const HIGH: RarityTiers = &[
        (5, Rarity::Legendary),
        (15, Rarity::Epic),
        (35, Rarity::Rare),
        (60, Rarity::Uncommon),
        (100, Rarity::Common),
    ];

    const MID: RarityTiers = &[
        (2, Rarity::Epic),
        (10, Rarity::Rare),
        (40, Rarity::Uncommon),
        (100, Rarity::Common),
    ];

    const LOW: RarityTiers = &[
        (5, Rarity::Rare),
        (25, Rarity::Uncommon),
        (100, Rarity::Common),
    ];

    pub const DEFAULT_DROP_CHANCE_PERCENT: u32 = 30;

    /// Select the tier table for a daily health score.
    fn tiers(&self, health_score: u32) -> RarityTiers {
        if health_score >= 90 {
            self.high
        } else if health_score >= 70 {
            self.mid
        } else {
            self.low
        }
    }

    /// Resolve a uniform `[0, 100)` roll to a rarity for the given score.
    pub fn rarity_for(&self, health_score: u32, roll: u32) -> Rarity {
        let tiers = self.tiers(health_score);
        for &(bound, rarity) in tiers {
            if roll < bound {
                return rarity;
            }
        }
        // Last bound is 100 and rolls are < 100, but stay total anyway.
        tiers.last().map(|&(_, rarity)| rarity).unwrap_or(Rarity::Common)
    }

    /// Whether a drop-gate roll in `[0, 100)` passes the gate.
    pub fn passes_gate(&self, roll: u32) -> bool {
        roll < self.drop_chance_percent
    }
}

impl Default for DropTable {
    fn default() -> Self {
        Self {
            high: Self::HIGH,
            mid: Self::MID,
            low: Self::LOW,
            drop_chance_percent: Self::DEFAULT_DROP_CHANCE_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_bucket_covers_all_five_tiers() {
        let table = DropTable::default();
        assert_eq!(table.rarity_for(95, 0), Rarity::Legendary);
        assert_eq!(table.rarity_for(95, 4), Rarity::Legendary);
        assert_eq!(table.rarity_for(95, 5), Rarity::Epic);
        assert_eq!(table.rarity_for(95, 34), Rarity::Rare);
        assert_eq!(table.rarity_for(95, 59), Rarity::Uncommon);
        assert_eq!(table.rarity_for(95, 99), Rarity::Common);
    }

    #[test]
    fn mid_bucket_has_no_legendary() {
        let table = DropTable::default();
        assert_eq!(table.rarity_for(75, 0), Rarity::Epic);
        assert_eq!(table.rarity_for(75, 9), Rarity::Rare);
        assert_eq!(table.rarity_for(75, 39), Rarity::Uncommon);
        assert_eq!(table.rarity_for(75, 40), Rarity::Common);
    }

    #[test]
    fn low_bucket_caps_at_rare() {
        let table = DropTable::default();
        assert_eq!(table.rarity_for(40, 4), Rarity::Rare);
        assert_eq!(table.rarity_for(40, 24), Rarity::Uncommon);
        assert_eq!(table.rarity_for(40, 25), Rarity::Common);
    }

    #[test]
    fn bucket_boundaries() {
        let table = DropTable::default();
        // 90 is high, 89 is mid, 70 is mid, 69 is low
        assert_eq!(table.rarity_for(90, 0), Rarity::Legendary);
        assert_eq!(table.rarity_for(89, 0), Rarity::Epic);
        assert_eq!(table.rarity_for(70, 0), Rarity::Epic);
        assert_eq!(table.rarity_for(69, 0), Rarity::Rare);
    }

    #[test]
    fn cumulative_ranges_sum_to_one_hundred() {
        let table = DropTable::default();
        for tiers in [table.high, table.mid, table.low] {
            let mut previous = 0;
            for &(bound, _) in tiers {
                assert!(bound > previous, "bounds must be strictly increasing");
                previous = bound;
            }
            assert_eq!(previous, 100);
        }
    }

    #[test]
    fn gate_uses_configured_chance() {
        let table = DropTable::default();
        assert!(table.passes_gate(0));
        assert!(table.passes_gate(29));
        assert!(!table.passes_gate(30));
        assert!(!table.passes_gate(99));
    }
}
