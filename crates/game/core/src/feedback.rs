//! Feedback Classifier: runtime signals -> presentation hints.
//!
//! Maps discrete game events (step deltas, sync completion, streaks,
//! drops) to advisory hint records for a presentation layer. Hints carry
//! only primitive and enum-typed fields, are never persisted as game
//! state, and the classifier itself is stateless: the same input always
//! yields the same hint shape.

use crate::catalog::{ItemCatalog, ItemKind};
use crate::metrics::{HealthSnapshot, SleepMetrics};
use crate::stats::mp_bonus;
use strum::Display;

/// Hint category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FeedbackKind {
    Immediate,
    DailySummary,
    Milestone,
    Streak,
    Comeback,
    EpicMoment,
}

/// Daypart a summary hint belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FeedbackTiming {
    Morning,
    Afternoon,
    Evening,
    Realtime,
}

/// A granted reward attached to a hint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HintReward {
    pub kind: String,
    pub amount: u32,
}

/// A named debuff attached to a penalty hint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HintDebuff {
    pub kind: String,
    pub duration: String,
}

/// Fixed-format summary of the day's adventure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdventureDigest {
    /// Estimated reading/viewing duration, e.g. "3-5min".
    pub duration: String,
    pub highlights: Vec<String>,
}

/// An actionable suggestion attached to the evening digest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    pub kind: String,
    pub reason: String,
    pub recommendation: String,
}

/// Presentation hint produced by the classifier.
///
/// Unused fields stay at their neutral defaults; the presentation layer
/// renders whatever is present.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub timing: Option<FeedbackTiming>,
    /// Visual cue identifier, e.g. "coin_sparkle".
    pub visual: Option<String>,
    /// Audio cue identifier, e.g. "coin_collect".
    pub audio: Option<String>,
    pub message: Option<String>,
    /// Cue duration in milliseconds.
    pub duration_ms: Option<u32>,
    pub particle_effect: bool,
    pub rewards: Vec<HintReward>,
    pub debuffs: Vec<HintDebuff>,
    pub progress_percent: Option<f64>,
    /// Reward label for milestone hints.
    pub reward: Option<String>,
    pub celebration: bool,
    pub digest: Option<AdventureDigest>,
    pub suggestions: Vec<Suggestion>,
    /// Flat bonus for comeback hints.
    pub bonus: Option<HintReward>,
    /// Exact day count for streak hints.
    pub streak_days: Option<u32>,
    pub encouragement: bool,
    /// Compensation item kind for negative-event hints.
    pub compensation: Option<String>,
    pub humor: Option<String>,
    pub badge: Option<String>,
    pub intensity: Option<String>,
    pub screen_effect: Option<String>,
    pub share_prompt: bool,
}

impl Default for FeedbackKind {
    fn default() -> Self {
        Self::Immediate
    }
}

impl Feedback {
    /// Neutral immediate hint with no cue.
    fn immediate() -> Self {
        Self::default()
    }

    fn summary(timing: FeedbackTiming) -> Self {
        Self {
            kind: FeedbackKind::DailySummary,
            timing: Some(timing),
            ..Self::default()
        }
    }
}

/// Heart-rate sample forwarded by the realtime signal source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartRateSample {
    pub bpm: u32,
    pub is_stable: bool,
    pub hrv: f64,
}

/// Step milestone supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub steps: u32,
    pub reward: String,
}

/// Login streak state supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginStreak {
    pub current_streak: u32,
    pub best_streak: u32,
}

/// A negative game event to soften.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegativeEvent {
    pub kind: String,
    pub severity: String,
}

/// A rare item drop worth celebrating.
#[derive(Clone, Debug, PartialEq)]
pub struct RareDrop {
    pub item_name: String,
    pub rarity: String,
    /// Probability in [0, 1] the drop had.
    pub drop_rate: f64,
}

/// Stateless classifier from runtime signals to presentation hints.
///
/// Borrows the catalog for the evening equipment suggestion; never
/// touches persisted game state.
pub struct FeedbackSystem<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> FeedbackSystem<'a> {
    /// Comeback bonus granted after a broken streak.
    pub const COMEBACK_BONUS: u32 = 100;

    /// Streak hints fire on every multiple of this many days.
    pub const STREAK_INTERVAL: u32 = 3;

    /// Sleep score below which the evening digest suggests new equipment.
    pub const EQUIPMENT_SUGGESTION_SLEEP_SCORE: u32 = 75;

    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Step delta signal: an increase earns a short coin cue.
    pub fn on_steps_update(&self, previous_steps: u32, current_steps: u32) -> Feedback {
        if current_steps > previous_steps {
            return Feedback {
                visual: Some("coin_sparkle".to_owned()),
                audio: Some("coin_collect".to_owned()),
                duration_ms: Some(1500),
                ..Feedback::immediate()
            };
        }
        Feedback::immediate()
    }

    /// Sleep sync completion: report the MP gained, using the same
    /// formula as the stat model.
    pub fn on_sleep_sync(&self, sleep: &SleepMetrics) -> Feedback {
        let mp_gain = mp_bonus(sleep.score);
        Feedback {
            visual: Some("level_up_effect".to_owned()),
            message: Some(format!("MP +{mp_gain} restored!")),
            duration_ms: Some(2000),
            ..Feedback::immediate()
        }
    }

    /// Realtime heart-rate sample: a stable rhythm earns an aura cue.
    pub fn on_heart_rate(&self, sample: &HeartRateSample) -> Feedback {
        if sample.is_stable {
            return Feedback {
                visual: Some("aura_effect".to_owned()),
                particle_effect: true,
                duration_ms: Some(3000),
                ..Feedback::immediate()
            };
        }
        Feedback::immediate()
    }

    /// Morning digest of last night's sleep.
    pub fn morning_digest(&self, snapshot: &HealthSnapshot) -> Feedback {
        let mut feedback = Feedback::summary(FeedbackTiming::Morning);
        let score = snapshot.sleep.score;

        if score >= 90 {
            feedback.visual = Some("legendary_rest".to_owned());
            feedback.message = Some("A legendary night's rest!".to_owned());
            feedback.rewards.push(HintReward {
                kind: "mp_recovery".to_owned(),
                amount: score * 2,
            });
        } else if score < 70 {
            feedback.visual = Some("nightmare".to_owned());
            feedback.message = Some("Nightmares haunted your sleep...".to_owned());
            feedback.debuffs.push(HintDebuff {
                kind: "mp_penalty".to_owned(),
                duration: "until_noon".to_owned(),
            });
        } else {
            feedback.visual = Some("normal_rest".to_owned());
            feedback.message = Some("You seem to have slept well.".to_owned());
        }

        feedback
    }

    /// Afternoon progress towards the step target.
    ///
    /// The displayed percentage is capped at 100 even past the target.
    pub fn afternoon_progress(&self, current_steps: u32, target_steps: u32) -> Feedback {
        let percent = if target_steps == 0 {
            100.0
        } else {
            (current_steps as f64 / target_steps as f64 * 100.0).min(100.0)
        };
        let remaining = target_steps.saturating_sub(current_steps);

        let message = if remaining > 0 {
            format!("{remaining} steps until a rare treasure chest appears!")
        } else {
            "Target reached! You claim a rare treasure chest!".to_owned()
        };

        Feedback {
            progress_percent: Some(percent),
            message: Some(message),
            ..Feedback::summary(FeedbackTiming::Afternoon)
        }
    }

    /// Celebration on an exact milestone match, neutral hint otherwise.
    pub fn check_milestone(&self, steps: u32, milestones: &[Milestone]) -> Feedback {
        if let Some(achieved) = milestones.iter().find(|m| m.steps == steps) {
            return Feedback {
                kind: FeedbackKind::Milestone,
                visual: Some("milestone_achieved".to_owned()),
                reward: Some(achieved.reward.clone()),
                celebration: true,
                ..Feedback::default()
            };
        }
        Feedback::immediate()
    }

    /// Evening digest of the whole day.
    ///
    /// Always carries the fixed highlight list; a low sleep score appends
    /// an equipment-change suggestion naming an accessory from the
    /// catalog.
    pub fn evening_digest(&self, snapshot: &HealthSnapshot) -> Feedback {
        let mut feedback = Feedback::summary(FeedbackTiming::Evening);
        feedback.digest = Some(AdventureDigest {
            duration: "3-5min".to_owned(),
            highlights: vec![
                format!("Sleep score: {}", snapshot.sleep.score),
                format!("Steps: {}", snapshot.activity.steps),
                format!("Readiness: {}", snapshot.readiness.score),
            ],
        });

        if snapshot.sleep.score < Self::EQUIPMENT_SUGGESTION_SLEEP_SCORE {
            let recommendation = match self.catalog.items_by_kind(ItemKind::Accessory).first() {
                Some(accessory) => format!(
                    "Equip the {} to improve your sleep quality.",
                    accessory.name
                ),
                None => "Equip a restorative accessory to improve your sleep quality.".to_owned(),
            };
            feedback.suggestions.push(Suggestion {
                kind: "equipment_change".to_owned(),
                reason: "low_sleep_score".to_owned(),
                recommendation,
            });
        }

        feedback
    }

    /// Streak check: broken streaks earn a comeback bonus, multiples of
    /// three earn a streak celebration.
    pub fn check_login_streak(&self, streak: &LoginStreak) -> Feedback {
        if streak.current_streak == 0 {
            return Feedback {
                kind: FeedbackKind::Comeback,
                bonus: Some(HintReward {
                    kind: "comeback_bonus".to_owned(),
                    amount: Self::COMEBACK_BONUS,
                }),
                message: Some("Fresh-start bonus! Let's adventure together again.".to_owned()),
                encouragement: true,
                ..Feedback::default()
            };
        }

        if streak.current_streak % Self::STREAK_INTERVAL == 0 {
            return Feedback {
                kind: FeedbackKind::Streak,
                streak_days: Some(streak.current_streak),
                message: Some(format!(
                    "{} days logged in a row!",
                    streak.current_streak
                )),
                visual: Some("streak_celebration".to_owned()),
                ..Feedback::default()
            };
        }

        Feedback::immediate()
    }

    /// Soften a negative event with a fixed compensation hint.
    pub fn on_negative_event(&self, _event: &NegativeEvent) -> Feedback {
        Feedback {
            compensation: Some("recovery_spring".to_owned()),
            humor: Some("Even heroes need a day off!".to_owned()),
            badge: Some("lazy_day".to_owned()),
            ..Feedback::immediate()
        }
    }

    /// Maximum-intensity celebration for a rare drop.
    pub fn on_rare_drop(&self, event: &RareDrop) -> Feedback {
        Feedback {
            kind: FeedbackKind::EpicMoment,
            intensity: Some("maximum".to_owned()),
            screen_effect: Some("full_screen_flash".to_owned()),
            duration_ms: Some(7000),
            share_prompt: true,
            message: Some(format!(
                "Obtained {}! (drop rate: {}%)",
                event.item_name,
                event.drop_rate * 100.0
            )),
            ..Feedback::default()
        }
    }
}
