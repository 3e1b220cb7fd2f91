//! Adventure Engine: health snapshot + time-of-day slot -> outcome.
//!
//! Each time-of-day slot has its own formula (morning reads sleep,
//! afternoon reads movement, evening reads the whole day) and every slot
//! shares the reward calculation. The consolidated [`AdventureEngine::run`]
//! entry point composes a slot with rewards and a catalog drop roll into
//! one [`AdventureOutcome`].

mod engine;
mod outcome;
mod time;

pub use engine::AdventureEngine;
pub use outcome::{AdventureEvent, AdventureOutcome, ClassBonus, EventKind};
pub use time::{AdventureError, TimeOfDay};
