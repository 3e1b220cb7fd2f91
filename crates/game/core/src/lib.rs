//! Deterministic game mechanics derived from daily health metrics.
//!
//! `quest-core` turns a wearable's sleep/activity/readiness snapshot into
//! role-playing-game state: a stat block and class, the outcome of a
//! periodic adventure, and presentation hints for the UI layer. All
//! operations are pure functions of their arguments; the only
//! non-determinism is the injectable [`rng::RngOracle`], so every
//! computation is replayable in tests. Network access, persistence, and
//! rendering live in the embedding layers, which consume the serializable
//! types exported here.
pub mod adventure;
pub mod catalog;
pub mod character;
pub mod config;
pub mod feedback;
pub mod metrics;
pub mod rng;
pub mod stats;
pub use adventure::{
    AdventureEngine, AdventureError, AdventureEvent, AdventureOutcome, ClassBonus, EventKind,
    TimeOfDay,
};
pub use catalog::{DropTable, Item, ItemCatalog, ItemEffect, ItemId, ItemKind, Rarity, StatKind};
pub use character::Character;
pub use config::GameConfig;
pub use feedback::{
    AdventureDigest, Feedback, FeedbackKind, FeedbackSystem, FeedbackTiming, HeartRateSample,
    HintDebuff, HintReward, LoginStreak, Milestone, NegativeEvent, RareDrop, Suggestion,
};
pub use metrics::{
    ActivityMetrics, HealthSnapshot, ReadinessMetrics, SleepContributors, SleepMetrics,
};
pub use rng::{PcgRng, RngOracle, mix_seed};
pub use stats::{BaseStats, CharacterClass, CharacterStats, SyncStats};
