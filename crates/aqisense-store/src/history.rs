//! In-memory session history.

use tracing::debug;

use aqisense_types::PredictionRecord;

/// Append-only sequence of the session's prediction records.
///
/// Insertion order is submission order; records are never mutated, deduped,
/// reordered, or evicted. The store lives for one interactive session and
/// dies with it — there is deliberately no persistence behind it. It is
/// created by the handling flow and passed explicitly wherever records are
/// appended or read, never held as ambient global state.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<PredictionRecord>,
}

impl HistoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence. Always succeeds.
    pub fn append(&mut self, record: PredictionRecord) {
        debug!(aqi = record.aqi, category = %record.category, "History record appended");
        self.records.push(record);
    }

    /// The full ordered sequence of records as of this call.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PredictionRecord> {
        self.records.clone()
    }

    /// Borrow the records without copying.
    #[must_use]
    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PredictionRecord> {
        self.records.last()
    }

    /// Number of records appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqisense_types::AqiCategory;
    use time::macros::date;

    fn record(hour: u8, aqi: f64) -> PredictionRecord {
        PredictionRecord::new(date!(2024 - 01 - 10), hour, aqi, AqiCategory::Good)
    }

    #[test]
    fn test_appends_preserve_order() {
        let mut store = HistoryStore::new();
        let (r1, r2, r3) = (record(1, 10.0), record(2, 20.0), record(3, 30.0));
        store.append(r1);
        store.append(r2);
        store.append(r3);

        assert_eq!(store.snapshot(), vec![r1, r2, r3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut store = HistoryStore::new();
        store.append(record(1, 10.0));
        assert_eq!(store.snapshot(), store.snapshot());
    }

    #[test]
    fn test_no_deduplication() {
        let mut store = HistoryStore::new();
        let r = record(1, 10.0);
        store.append(r);
        store.append(r);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_store() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert!(store.last().is_none());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_last_tracks_most_recent_append() {
        let mut store = HistoryStore::new();
        store.append(record(1, 10.0));
        store.append(record(2, 99.0));
        assert_eq!(store.last().unwrap().aqi, 99.0);
    }
}
