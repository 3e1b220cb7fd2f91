//! Character Stat Model: pure functions from a health snapshot to stats.
//!
//! Two derivation variants coexist on purpose:
//!
//! - [`CharacterStats`] is the display variant, computed whenever a
//!   snapshot is shown to the player. Defense stays at its base value.
//! - [`SyncStats`] is the post-sync variant applied when a persisted
//!   character is updated after a provider sync. Defense gains a
//!   readiness bonus and max HP/MP are exposed alongside current values.
//!
//! The two call sites represent different semantic moments, so the
//! formulas are kept as distinctly named operations rather than merged.
//! Every rounded field uses floor (integer division); no field mixes
//! rounding rules between variants.

mod base;
mod class;
mod derived;
mod sync;

pub use base::BaseStats;
pub use class::CharacterClass;
pub use derived::CharacterStats;
pub use sync::SyncStats;

pub(crate) use derived::mp_bonus;
