//! Bounded conversion history.

use std::collections::VecDeque;

use unitconv_core::HISTORY_CAPACITY;

use crate::record::ConversionRecord;

/// Rolling history of the most recent conversions.
///
/// Holds at most `capacity` records; pushing onto a full history drops the
/// oldest one.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<ConversionRecord>,
    capacity: usize,
}

impl History {
    /// History with the default capacity of five records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// History holding at most `capacity` records (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, returning the evicted oldest record if the history was full.
    pub fn push(&mut self, record: ConversionRecord) -> Option<ConversionRecord> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(record);
        evicted
    }

    /// Records from newest to oldest.
    pub fn recent(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.entries.iter().rev()
    }

    /// The most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Rgb;
    use unitconv_core::Category;

    #[allow(clippy::cast_precision_loss)]
    fn record(i: usize) -> ConversionRecord {
        ConversionRecord {
            time: format!("00:00:{i:02}"),
            category: Category::Distance,
            from_value: i as f64,
            from_unit: "meters".into(),
            to_value: i as f64 / 1000.0,
            to_unit: "kilometers".into(),
            color: Rgb::new(0, 0, 0),
        }
    }

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 5);
        assert!(history.latest().is_none());
    }

    #[test]
    fn keeps_five_most_recent() {
        let mut history = History::new();
        for i in 0..8 {
            history.push(record(i));
        }
        assert_eq!(history.len(), 5);
        let times: Vec<_> = history.recent().map(|r| r.time.as_str()).collect();
        assert_eq!(
            times,
            vec!["00:00:07", "00:00:06", "00:00:05", "00:00:04", "00:00:03"]
        );
    }

    #[test]
    fn push_reports_eviction() {
        let mut history = History::with_capacity(2);
        assert!(history.push(record(0)).is_none());
        assert!(history.push(record(1)).is_none());
        let evicted = history.push(record(2)).unwrap();
        assert_eq!(evicted.time, "00:00:00");
    }

    #[test]
    fn latest_is_newest() {
        let mut history = History::new();
        history.push(record(1));
        history.push(record(2));
        assert_eq!(history.latest().unwrap().time, "00:00:02");
    }

    #[test]
    fn zero_capacity_clamped() {
        let mut history = History::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.push(record(1));
        history.push(record(2));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut history = History::new();
        history.push(record(1));
        history.clear();
        assert!(history.is_empty());
    }
}
