//! Chronological log of recorded observations.

use tracing::debug;

use super::value::parse_observation;
use crate::error::Result;

/// Ordered, append-only sequence of observations for one session.
///
/// Insertion order is chronological order and display order. Entries are
/// never reordered, deduplicated or removed; the log only grows by one
/// value per successful add.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueLog {
    values: Vec<f64>,
}

impl ValueLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Build a log from already-parsed values, keeping their order.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Record a value at the end of the log.
    pub fn append(&mut self, value: f64) {
        self.values.push(value);
        debug!(value, len = self.values.len(), "observation recorded");
    }

    /// Parse raw input and record it.
    ///
    /// Either exactly one value is appended or, on a parse failure, the log
    /// is left untouched.
    pub fn append_input(&mut self, raw: &str) -> Result<f64> {
        let value = parse_observation(raw)?;
        self.append(value);
        Ok(value)
    }

    /// All recorded values in chronological order.
    pub fn all(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recent observation.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// The most recent `n` observations, or `None` if fewer were recorded.
    pub fn tail(&self, n: usize) -> Option<&[f64]> {
        let start = self.values.len().checked_sub(n)?;
        Some(&self.values[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_log_is_empty() {
        let log = ValueLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.all().is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn append_grows_by_one_at_the_end() {
        let mut log = ValueLog::from_values([1.0, 2.0]);

        log.append(3.5);

        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some(3.5));
        assert_eq!(log.all(), &[1.0, 2.0, 3.5]);
    }

    #[test]
    fn append_keeps_duplicates_and_order() {
        let mut log = ValueLog::new();
        for v in [2.0, 1.0, 2.0, 1.0] {
            log.append(v);
        }
        assert_eq!(log.all(), &[2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn append_input_parses_and_records() {
        let mut log = ValueLog::new();

        let value = log.append_input(" 1.50 ").unwrap();

        assert_eq!(value, 1.5);
        assert_eq!(log.all(), &[1.5]);
    }

    #[test]
    fn invalid_input_leaves_log_unchanged() {
        let mut log = ValueLog::from_values([1.0]);

        let err = log.append_input("abc").unwrap_err();

        assert!(matches!(err, Error::InvalidInput { .. }));
        assert_eq!(log.len(), 1);
        assert_eq!(log.all(), &[1.0]);
    }

    #[test]
    fn reading_is_idempotent() {
        let log = ValueLog::from_values([1.1, 2.2]);
        assert_eq!(log.all(), log.all());
        assert_eq!(log.clone(), log);
    }

    #[test]
    fn tail_requires_enough_entries() {
        let log = ValueLog::from_values([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(log.tail(3), Some(&[2.0, 3.0, 4.0][..]));
        assert_eq!(log.tail(4), Some(&[1.0, 2.0, 3.0, 4.0][..]));
        assert!(log.tail(5).is_none());
    }
}
