//! Daily health metric snapshot types.
//!
//! A [`HealthSnapshot`] is the immutable input to every formula in this
//! crate: one bundle of sleep/activity/readiness metrics per user per day.
//! The snapshot is constructed once at the provider-adapter boundary;
//! malformed payloads are rejected there (serde fails on missing fields)
//! instead of propagating partial data into the formulas.
//!
//! Score-like fields are not clamped by the core. Upstream providers
//! occasionally report partial days as zero, and the formulas degrade
//! gracefully (zero steps contribute zero bonus).

/// One day's immutable sleep/activity/readiness bundle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthSnapshot {
    pub sleep: SleepMetrics,
    pub activity: ActivityMetrics,
    pub readiness: ReadinessMetrics,
}

impl HealthSnapshot {
    pub fn new(sleep: SleepMetrics, activity: ActivityMetrics, readiness: ReadinessMetrics) -> Self {
        Self {
            sleep,
            activity,
            readiness,
        }
    }

    /// Mean of the three daily scores, used for reward scaling and drop rolls.
    pub fn average_score(&self) -> f64 {
        (self.sleep.score + self.activity.score + self.readiness.score) as f64 / 3.0
    }
}

/// Nightly sleep summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepMetrics {
    /// Overall sleep score (0-100 from the provider).
    pub score: u32,
    pub contributors: SleepContributors,
}

/// Per-contributor sleep sub-scores (0-100 from the provider).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepContributors {
    pub deep_sleep: u32,
    pub efficiency: u32,
    pub latency: u32,
    pub rem_sleep: u32,
    pub restfulness: u32,
    pub timing: u32,
    pub total_sleep: u32,
}

/// Daily movement summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityMetrics {
    /// Overall activity score (0-100 from the provider).
    pub score: u32,
    pub steps: u32,
    pub active_calories: u32,
}

/// Daily recovery summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadinessMetrics {
    /// Overall readiness score (0-100 from the provider).
    pub score: u32,
    /// Heart-rate-variability balance, observed range roughly 0-100.
    pub hrv_balance: f64,
    /// Deviation from baseline body temperature in degrees Celsius.
    pub temperature_deviation: f64,
}
