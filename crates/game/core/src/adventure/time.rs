//! Time-of-day slots and adventure input validation.

use strum::{Display, EnumIter, EnumString};

/// Time-of-day slot selecting which adventure formula applies.
///
/// The evening slot is tagged `night` on the wire, matching the tag the
/// embedding API accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

/// Errors from the adventure entry points.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdventureError {
    /// The caller supplied a time-of-day tag outside
    /// `morning`/`afternoon`/`night`. Rejected before any computation.
    #[error("invalid time of day: {tag:?}")]
    InvalidTimeOfDay { tag: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn known_tags_parse() {
        assert_eq!(TimeOfDay::from_str("morning").unwrap(), TimeOfDay::Morning);
        assert_eq!(
            TimeOfDay::from_str("afternoon").unwrap(),
            TimeOfDay::Afternoon
        );
        assert_eq!(TimeOfDay::from_str("night").unwrap(), TimeOfDay::Night);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!(TimeOfDay::from_str("evening").is_err());
        assert!(TimeOfDay::from_str("").is_err());
    }
}
