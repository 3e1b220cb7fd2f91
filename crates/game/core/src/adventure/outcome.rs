//! Adventure outcome types.

use strum::{Display, EnumString};

use crate::catalog::Item;

/// Narrative event category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    HiddenDungeon,
    Penalty,
    BossBattle,
    Normal,
}

/// One narrative event inside an outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdventureEvent {
    pub kind: EventKind,
    pub name: String,
    pub message: String,
}

impl AdventureEvent {
    pub fn new(kind: EventKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Flat reward bonuses granted by the character's class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassBonus {
    pub experience: u32,
    pub gold: u32,
}

/// Result of one adventure invocation.
///
/// Produced fresh per invocation and never mutated after the engine
/// returns it. Contains only primitive and enum-typed fields so the
/// persistence layer can serialize it verbatim.
///
/// Multipliers fold into a single scalar applied to the base reward;
/// flat bonuses (`class_bonus`, `treasure_boxes`, `items`) stay separate
/// fields and are never folded into the multiplier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdventureOutcome {
    pub events: Vec<AdventureEvent>,
    pub items: Vec<Item>,
    pub experience_multiplier: f64,
    pub gold_multiplier: f64,
    pub treasure_boxes: u32,
    pub critical_success: bool,
    pub base_experience: u32,
    pub base_gold: u32,
    pub class_bonus: ClassBonus,
}

impl AdventureOutcome {
    /// Total experience after multipliers and the flat class bonus.
    pub fn total_experience(&self) -> u32 {
        (self.base_experience as f64 * self.experience_multiplier).floor() as u32
            + self.class_bonus.experience
    }

    /// Total gold after multipliers and the flat class bonus.
    pub fn total_gold(&self) -> u32 {
        (self.base_gold as f64 * self.gold_multiplier).floor() as u32 + self.class_bonus.gold
    }
}

impl Default for AdventureOutcome {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            items: Vec::new(),
            experience_multiplier: 1.0,
            gold_multiplier: 1.0,
            treasure_boxes: 0,
            critical_success: false,
            base_experience: 0,
            base_gold: 0,
            class_bonus: ClassBonus::default(),
        }
    }
}
