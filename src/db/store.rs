//! The session record store contract and its in-memory implementation.
//!
//! History is append-only. Nothing in the application updates or deletes a
//! record once written; the store only has to insert atomically and answer
//! read queries. Two backends implement [`RecordStore`]:
//!
//! - [`MemoryStore`] keeps records in a vector behind a read-write lock.
//! - [`crate::db::records::Records`] persists them in SQLite.
//!
//! Both hold their lock for the whole operation, so a reader never observes a
//! half-written record.

use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::record::SessionRecord;
use chrono::NaiveDateTime;
use parking_lot::RwLock;

pub trait RecordStore: Send + Sync {
    /// Inserts a record.
    ///
    /// # Errors
    ///
    /// [`PomodoroError::DuplicateId`] when a record with the same id exists.
    fn append(&self, record: &SessionRecord) -> PomodoroResult<()>;

    fn get(&self, id: &str) -> PomodoroResult<Option<SessionRecord>>;

    /// Every stored record. Callers must not rely on the order.
    fn list_all(&self) -> PomodoroResult<Vec<SessionRecord>>;

    /// Completed work sessions whose end time lies in `[start, end]`.
    fn list_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> PomodoroResult<Vec<SessionRecord>>;
}

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<SessionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: &SessionRecord) -> PomodoroResult<()> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.id == record.id) {
            return Err(PomodoroError::DuplicateId(record.id.clone()));
        }
        records.push(record.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> PomodoroResult<Option<SessionRecord>> {
        Ok(self.records.read().iter().find(|r| r.id == id).cloned())
    }

    fn list_all(&self) -> PomodoroResult<Vec<SessionRecord>> {
        Ok(self.records.read().clone())
    }

    fn list_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> PomodoroResult<Vec<SessionRecord>> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| r.is_completed_work() && r.end_time >= start && r.end_time <= end)
            .cloned()
            .collect())
    }
}
