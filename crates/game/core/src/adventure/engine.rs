//! The adventure outcome simulator.

use std::str::FromStr;

use crate::catalog::{ItemCatalog, ItemId};
use crate::config::GameConfig;
use crate::metrics::HealthSnapshot;
use crate::rng::RngOracle;
use crate::stats::CharacterClass;

use super::outcome::{AdventureEvent, AdventureOutcome, ClassBonus, EventKind};
use super::time::{AdventureError, TimeOfDay};

/// Catalog id of the fixed rare item granted by high REM sleep.
const DREAM_CRYSTAL_ID: &str = "dream_crystal";

/// Catalog id of the rare equipment granted by a 10k-step day.
const RARE_EQUIPMENT_ID: &str = "adventurer_boots";

/// Computes adventure outcomes from a daily health snapshot.
///
/// The engine borrows its collaborators (catalog, config, RNG oracle)
/// instead of owning them, so a single read-only catalog constructed at
/// startup serves every invocation and tests can swap in fixed oracles.
///
/// Every operation is a side-effect-free function of its inputs: nothing
/// here mutates the snapshot, and character progression is applied by the
/// caller from the returned outcome.
pub struct AdventureEngine<'a> {
    catalog: &'a ItemCatalog,
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> AdventureEngine<'a> {
    pub fn new(catalog: &'a ItemCatalog, config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    /// Morning adventure, driven by last night's sleep.
    ///
    /// A sleep score of 90+ reveals the hidden dungeon and raises the
    /// experience multiplier; below 60 a monster ambush penalty lowers
    /// it. Independently of either branch, a REM contributor of 90+
    /// grants the dream crystal.
    pub fn morning(&self, snapshot: &HealthSnapshot) -> AdventureOutcome {
        let mut outcome = AdventureOutcome::default();

        if snapshot.sleep.score >= GameConfig::HIDDEN_DUNGEON_SLEEP_SCORE {
            outcome.events.push(AdventureEvent::new(
                EventKind::HiddenDungeon,
                "Tower of Dreams",
                "A night of quality sleep revealed the hidden dungeon \"Tower of Dreams\"!",
            ));
            outcome.experience_multiplier = GameConfig::HIDDEN_DUNGEON_EXPERIENCE_MULTIPLIER;
        } else if snapshot.sleep.score < GameConfig::PENALTY_SLEEP_SCORE {
            outcome.events.push(AdventureEvent::new(
                EventKind::Penalty,
                "Monster Ambush",
                "Too little sleep: monsters caught you off guard!",
            ));
            outcome.experience_multiplier = GameConfig::PENALTY_EXPERIENCE_MULTIPLIER;
        }

        // Independent of the score branches above.
        if snapshot.sleep.contributors.rem_sleep >= GameConfig::DREAM_CRYSTAL_REM_SLEEP {
            if let Some(crystal) = self.catalog.get(&ItemId::from(DREAM_CRYSTAL_ID)) {
                outcome.items.push(crystal.clone());
            }
        }

        outcome
    }

    /// Afternoon adventure, driven by today's movement.
    ///
    /// 10k+ steps grant the rare equipment and double gold; treasure
    /// boxes accrue at one per 2000 steps regardless.
    pub fn afternoon(&self, snapshot: &HealthSnapshot) -> AdventureOutcome {
        let mut outcome = AdventureOutcome::default();

        if snapshot.activity.steps >= GameConfig::RARE_EQUIPMENT_STEPS {
            if let Some(boots) = self.catalog.get(&ItemId::from(RARE_EQUIPMENT_ID)) {
                outcome.items.push(boots.clone());
            }
            outcome.gold_multiplier = GameConfig::RARE_EQUIPMENT_GOLD_MULTIPLIER;
        }

        outcome.treasure_boxes = snapshot.activity.steps / GameConfig::TREASURE_BOX_STEPS;

        outcome
    }

    /// Evening adventure, driven by the whole day.
    ///
    /// All three scores at 80+ trigger the boss battle; a readiness score
    /// of 90+ with HRV balance of 85+ independently triggers a critical
    /// success doubling both multipliers. Both may fire together.
    pub fn evening(&self, snapshot: &HealthSnapshot) -> AdventureOutcome {
        let mut outcome = AdventureOutcome::default();

        if snapshot.sleep.score >= GameConfig::BOSS_BATTLE_SCORE
            && snapshot.activity.score >= GameConfig::BOSS_BATTLE_SCORE
            && snapshot.readiness.score >= GameConfig::BOSS_BATTLE_SCORE
        {
            outcome.events.push(AdventureEvent::new(
                EventKind::BossBattle,
                "Guardian of Health",
                "Fully rested and ready, you challenge the legendary boss \"Guardian of Health\"!",
            ));
        }

        if snapshot.readiness.score >= GameConfig::CRITICAL_READINESS_SCORE
            && snapshot.readiness.hrv_balance >= GameConfig::CRITICAL_HRV_BALANCE
        {
            outcome.critical_success = true;
            outcome.experience_multiplier = GameConfig::CRITICAL_MULTIPLIER;
            outcome.gold_multiplier = GameConfig::CRITICAL_MULTIPLIER;
        }

        outcome
    }

    /// Base reward calculation shared by every slot.
    ///
    /// Rewards scale with the mean of the three daily scores; the class
    /// bonus is a flat amount on top (warriors earn gold, mages earn
    /// experience).
    pub fn rewards(&self, snapshot: &HealthSnapshot, class: CharacterClass) -> AdventureOutcome {
        let average = snapshot.average_score();

        let class_bonus = match class {
            CharacterClass::Warrior => ClassBonus {
                experience: 0,
                gold: GameConfig::WARRIOR_GOLD_BONUS,
            },
            CharacterClass::Mage => ClassBonus {
                experience: GameConfig::MAGE_EXPERIENCE_BONUS,
                gold: 0,
            },
        };

        AdventureOutcome {
            base_experience: (GameConfig::BASE_EXPERIENCE as f64 * average / 100.0).floor() as u32,
            base_gold: (GameConfig::BASE_GOLD as f64 * average / 100.0).floor() as u32,
            class_bonus,
            ..AdventureOutcome::default()
        }
    }

    /// Run one adventure for a time-of-day slot.
    ///
    /// Composes the slot formula with the reward calculation and a drop
    /// roll against the catalog. The class is determined from the
    /// snapshot; multipliers from the slot and the reward pass multiply
    /// into one scalar, flat bonuses stay separate fields.
    ///
    /// `seed` makes the run replayable: the same snapshot and seed always
    /// produce the same outcome under a deterministic RNG oracle.
    pub fn run(
        &self,
        time_of_day: TimeOfDay,
        snapshot: &HealthSnapshot,
        seed: u64,
    ) -> AdventureOutcome {
        let mut outcome = match time_of_day {
            TimeOfDay::Morning => self.morning(snapshot),
            TimeOfDay::Afternoon => self.afternoon(snapshot),
            TimeOfDay::Night => self.evening(snapshot),
        };

        let class = CharacterClass::determine(snapshot);
        let rewards = self.rewards(snapshot, class);
        outcome.experience_multiplier *= rewards.experience_multiplier;
        outcome.gold_multiplier *= rewards.gold_multiplier;
        outcome.base_experience = rewards.base_experience;
        outcome.base_gold = rewards.base_gold;
        outcome.class_bonus = rewards.class_bonus;

        let health_score = snapshot.average_score().floor() as u32;
        if let Some(drop) =
            self.catalog
                .drop_for_adventure(&self.config.drop_table, health_score, self.rng, seed)
        {
            outcome.items.push(drop.clone());
        }

        outcome
    }

    /// Run one adventure for a caller-supplied time-of-day tag.
    ///
    /// Unrecognized tags are rejected before any computation.
    pub fn run_tagged(
        &self,
        tag: &str,
        snapshot: &HealthSnapshot,
        seed: u64,
    ) -> Result<AdventureOutcome, AdventureError> {
        let time_of_day = TimeOfDay::from_str(tag).map_err(|_| AdventureError::InvalidTimeOfDay {
            tag: tag.to_owned(),
        })?;
        Ok(self.run(time_of_day, snapshot, seed))
    }
}
