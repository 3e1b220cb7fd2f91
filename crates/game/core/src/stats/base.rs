//! Base stat constants shared by both derivation variants.

/// Baseline stat block before any health-derived bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub luck: u32,
}

impl BaseStats {
    /// Base critical-hit rate (percent) before the HRV bonus.
    pub const CRITICAL_RATE: u32 = 5;

    pub const fn new() -> Self {
        Self {
            hp: 100,
            mp: 50,
            attack: 10,
            defense: 10,
            speed: 10,
            luck: 5,
        }
    }
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::new()
    }
}
