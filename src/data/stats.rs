//! Derived statistics and alert evaluation.
//!
//! Everything here is a pure function of a [`ValueLog`] snapshot. Each call
//! recomputes from the full log (O(n)), so repeated evaluation of the same
//! log always gives bit-identical results.

use serde::{Deserialize, Serialize};

use super::log::ValueLog;
use crate::error::{Error, Result};

/// Mean above this value is in the high tier.
pub const TIER_HIGH: f64 = 3.0;
/// Mean above this value (and not above [`TIER_HIGH`]) is in the mid tier.
pub const TIER_MID: f64 = 2.0;
/// Observations below this value are styled as below threshold.
pub const ROW_THRESHOLD: f64 = 2.0;
/// Every value in the lookback window must be below this for a consecutive-low alert.
pub const CONSECUTIVE_LOW: f64 = 2.0;
/// Number of trailing observations checked by the consecutive-low alert.
pub const CONSECUTIVE_WINDOW: usize = 3;
/// The latest value below this raises a single-low alert.
pub const SINGLE_LOW: f64 = 1.5;

/// Cutoffs used for tiers, row styling and alerts.
///
/// Defaults are the fixed constants above. The lookback window is not part
/// of the configurable set and is always [`CONSECUTIVE_WINDOW`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub tier_high: f64,
    pub tier_mid: f64,
    pub row: f64,
    pub consecutive_low: f64,
    pub single_low: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            tier_high: TIER_HIGH,
            tier_mid: TIER_MID,
            row: ROW_THRESHOLD,
            consecutive_low: CONSECUTIVE_LOW,
            single_low: SINGLE_LOW,
        }
    }
}

impl Thresholds {
    /// Reject non-finite cutoffs and overlapping tier bands.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("tier_high", self.tier_high),
            ("tier_mid", self.tier_mid),
            ("row", self.row),
            ("consecutive_low", self.consecutive_low),
            ("single_low", self.single_low),
        ];
        if let Some((name, _)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidThresholds(format!("{} must be finite", name)));
        }
        if self.tier_mid > self.tier_high {
            return Err(Error::InvalidThresholds(format!(
                "tier_mid ({}) must not exceed tier_high ({})",
                self.tier_mid, self.tier_high
            )));
        }
        Ok(())
    }

    /// Classify a mean into a tier. Both cutoffs are strict: a mean equal to
    /// `tier_high` is mid, a mean equal to `tier_mid` is low.
    pub fn tier(&self, mean: f64) -> Tier {
        if mean > self.tier_high {
            Tier::High
        } else if mean > self.tier_mid {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    /// Classify a single observation for row styling.
    pub fn row_class(&self, value: f64) -> RowClass {
        if value < self.row {
            RowClass::BelowThreshold
        } else {
            RowClass::AtOrAboveThreshold
        }
    }
}

/// Coarse classification of the running mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Mid => "mid",
            Tier::High => "high",
        }
    }
}

/// Per-observation classification used only for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowClass {
    BelowThreshold,
    AtOrAboveThreshold,
}

impl RowClass {
    pub fn label(&self) -> &'static str {
        match self {
            RowClass::BelowThreshold => "below-threshold",
            RowClass::AtOrAboveThreshold => "at-or-above-threshold",
        }
    }
}

/// Alert raised against the tail of the log. At most one is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    /// The last [`CONSECUTIVE_WINDOW`] observations were all below `threshold`.
    ConsecutiveLow { threshold: f64 },
    /// The latest observation `value` was below `threshold`.
    SingleLow { value: f64, threshold: f64 },
}

impl Alert {
    /// Banner text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Alert::ConsecutiveLow { threshold } => format!(
                "Alert: {} consecutive values below {:.1} detected!",
                CONSECUTIVE_WINDOW, threshold
            ),
            Alert::SingleLow { .. } => "Last value is very low. Watch out!".to_string(),
        }
    }
}

/// Arithmetic mean over every value, recomputed from scratch.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyLog);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Evaluate alerts in priority order; the first match wins.
///
/// The consecutive-low check runs first, so a single-low alert is suppressed
/// whenever the consecutive one fires.
pub fn evaluate_alert(values: &[f64], thresholds: &Thresholds) -> Result<Option<Alert>> {
    let last = *values.last().ok_or(Error::EmptyLog)?;

    if let Some(start) = values.len().checked_sub(CONSECUTIVE_WINDOW) {
        if values[start..].iter().all(|&v| v < thresholds.consecutive_low) {
            return Ok(Some(Alert::ConsecutiveLow {
                threshold: thresholds.consecutive_low,
            }));
        }
    }

    if last < thresholds.single_low {
        return Ok(Some(Alert::SingleLow {
            value: last,
            threshold: thresholds.single_low,
        }));
    }

    Ok(None)
}

/// Snapshot of everything derived from the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    pub tier: Tier,
    pub alert: Option<Alert>,
}

impl Stats {
    /// Compute stats for the current log, or [`Error::EmptyLog`] if nothing
    /// has been recorded yet.
    pub fn compute(log: &ValueLog, thresholds: &Thresholds) -> Result<Self> {
        let values = log.all();
        let mean = mean(values)?;
        Ok(Self {
            count: values.len(),
            mean,
            tier: thresholds.tier(mean),
            alert: evaluate_alert(values, thresholds)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_for(values: &[f64]) -> Result<Stats> {
        Stats::compute(&ValueLog::from_values(values.iter().copied()), &Thresholds::default())
    }

    fn alert_for(values: &[f64]) -> Option<Alert> {
        evaluate_alert(values, &Thresholds::default()).unwrap()
    }

    #[test]
    fn mean_of_empty_log_is_an_error() {
        assert!(matches!(mean(&[]), Err(Error::EmptyLog)));
        assert!(matches!(stats_for(&[]), Err(Error::EmptyLog)));
    }

    #[test]
    fn mean_is_arithmetic_average() {
        let m = mean(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((m - 2.5).abs() < 1e-12);

        let m = mean(&[1.1, 2.2, 3.3]).unwrap();
        assert!((m - 2.2).abs() < 1e-9);
    }

    #[test]
    fn mean_does_not_depend_on_insertion_order() {
        let forward = mean(&[1.25, 7.5, 0.3, 2.0]).unwrap();
        let reversed = mean(&[2.0, 0.3, 7.5, 1.25]).unwrap();
        assert!((forward - reversed).abs() < 1e-12);
    }

    #[test]
    fn recomputing_stats_is_idempotent() {
        let log = ValueLog::from_values([1.7, 2.9, 0.4, 3.3]);
        let t = Thresholds::default();
        assert_eq!(
            Stats::compute(&log, &t).unwrap(),
            Stats::compute(&log, &t).unwrap()
        );
    }

    #[test]
    fn tier_boundaries_are_strict() {
        let t = Thresholds::default();
        assert_eq!(t.tier(2.0), Tier::Low);
        assert_eq!(t.tier(2.0001), Tier::Mid);
        assert_eq!(t.tier(3.0), Tier::Mid);
        assert_eq!(t.tier(3.0001), Tier::High);
        assert_eq!(t.tier(-5.0), Tier::Low);
        assert_eq!(t.tier(100.0), Tier::High);
    }

    #[test]
    fn row_class_is_independent_of_tier() {
        let t = Thresholds::default();
        assert_eq!(t.row_class(1.99), RowClass::BelowThreshold);
        assert_eq!(t.row_class(2.0), RowClass::AtOrAboveThreshold);
        assert_eq!(t.row_class(10.0), RowClass::AtOrAboveThreshold);
        assert_eq!(RowClass::BelowThreshold.label(), "below-threshold");
    }

    #[test]
    fn three_low_values_raise_consecutive_alert() {
        assert!(matches!(
            alert_for(&[1.0, 1.0, 1.0]),
            Some(Alert::ConsecutiveLow { .. })
        ));
    }

    #[test]
    fn consecutive_alert_only_looks_at_the_tail() {
        assert!(matches!(
            alert_for(&[5.0, 1.9, 1.8, 1.7]),
            Some(Alert::ConsecutiveLow { .. })
        ));
    }

    #[test]
    fn single_low_when_tail_is_not_all_low() {
        assert_eq!(
            alert_for(&[5.0, 5.0, 1.0]),
            Some(Alert::SingleLow {
                value: 1.0,
                threshold: 1.5
            })
        );
    }

    #[test]
    fn two_entries_cannot_raise_consecutive_alert() {
        assert!(matches!(
            alert_for(&[1.0, 1.0]),
            Some(Alert::SingleLow { .. })
        ));
    }

    #[test]
    fn low_but_not_very_low_value_raises_nothing() {
        assert_eq!(alert_for(&[5.0, 1.9]), None);
        assert_eq!(alert_for(&[1.5]), None);
    }

    #[test]
    fn no_alert_for_high_value() {
        assert_eq!(alert_for(&[2.5]), None);
    }

    #[test]
    fn alert_on_empty_log_is_an_error() {
        assert!(matches!(
            evaluate_alert(&[], &Thresholds::default()),
            Err(Error::EmptyLog)
        ));
    }

    #[test]
    fn stats_combine_mean_tier_and_alert() {
        let stats = stats_for(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 1.0);
        assert_eq!(stats.tier, Tier::Low);
        assert!(matches!(stats.alert, Some(Alert::ConsecutiveLow { .. })));
    }

    #[test]
    fn alert_messages() {
        let consecutive = Alert::ConsecutiveLow { threshold: 2.0 };
        assert_eq!(
            consecutive.message(),
            "Alert: 3 consecutive values below 2.0 detected!"
        );
        let single = Alert::SingleLow {
            value: 1.0,
            threshold: 1.5,
        };
        assert!(single.message().contains("very low"));
    }

    #[test]
    fn default_thresholds_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn overlapping_tiers_are_rejected() {
        let t = Thresholds {
            tier_mid: 4.0,
            ..Thresholds::default()
        };
        assert!(matches!(t.validate(), Err(Error::InvalidThresholds(_))));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let t = Thresholds {
            single_low: f64::NAN,
            ..Thresholds::default()
        };
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("single_low"));
    }
}
