//! Game configuration constants and tunable balance parameters.

use crate::catalog::DropTable;

/// Balance parameters consumed by the adventure engine.
///
/// Thresholds and multipliers are compile-time constants; the drop table
/// is runtime-tunable so embedders can reweight rarities without a
/// rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Rarity weighting and drop gate for adventure item drops.
    pub drop_table: DropTable,
}

impl GameConfig {
    // ===== morning (sleep-based) =====
    /// Sleep score at or above which the hidden dungeon appears.
    pub const HIDDEN_DUNGEON_SLEEP_SCORE: u32 = 90;
    /// Sleep score below which the ambush penalty fires.
    pub const PENALTY_SLEEP_SCORE: u32 = 60;
    /// REM contributor score at or above which the dream crystal drops.
    pub const DREAM_CRYSTAL_REM_SLEEP: u32 = 90;
    pub const HIDDEN_DUNGEON_EXPERIENCE_MULTIPLIER: f64 = 1.5;
    pub const PENALTY_EXPERIENCE_MULTIPLIER: f64 = 0.7;

    // ===== afternoon (activity-based) =====
    /// Step count at or above which the rare equipment drops.
    pub const RARE_EQUIPMENT_STEPS: u32 = 10_000;
    /// Steps per treasure box.
    pub const TREASURE_BOX_STEPS: u32 = 2_000;
    pub const RARE_EQUIPMENT_GOLD_MULTIPLIER: f64 = 2.0;

    // ===== evening (composite) =====
    /// Minimum value of all three scores for the boss battle.
    pub const BOSS_BATTLE_SCORE: u32 = 80;
    /// Readiness score gating critical success.
    pub const CRITICAL_READINESS_SCORE: u32 = 90;
    /// HRV balance gating critical success.
    pub const CRITICAL_HRV_BALANCE: f64 = 85.0;
    pub const CRITICAL_MULTIPLIER: f64 = 2.0;

    // ===== rewards =====
    /// Experience at a perfect average score.
    pub const BASE_EXPERIENCE: u32 = 100;
    /// Gold at a perfect average score.
    pub const BASE_GOLD: u32 = 50;
    pub const WARRIOR_GOLD_BONUS: u32 = 20;
    pub const MAGE_EXPERIENCE_BONUS: u32 = 30;

    pub fn new() -> Self {
        Self {
            drop_table: DropTable::default(),
        }
    }

    pub fn with_drop_table(drop_table: DropTable) -> Self {
        Self { drop_table }
    }
}
