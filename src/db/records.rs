//! SQLite-backed session history.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::records::Records;
//! use pomo::db::store::RecordStore;
//!
//! let records = Records::new()?;
//! for record in records.list_all()? {
//!     println!("{} {}", record.end_time, record.task_title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::db::store::RecordStore;
use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::record::{format_timestamp, parse_timestamp, Phase, SessionRecord};
use anyhow::Result;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::sync::Arc;

const INSERT_RECORD: &str = "INSERT INTO session_records (id, task_id, task_title, start_time, end_time, phase, completed) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_RECORDS: &str = "SELECT id, task_id, task_title, start_time, end_time, phase, completed FROM session_records";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_WORK_IN_RANGE: &str = "WHERE phase = 'work' AND completed = 1 AND end_time >= ?1 AND end_time <= ?2";
const ORDER_BY_END: &str = "ORDER BY end_time DESC";

/// Raw column values, decoded outside the rusqlite row callback so that
/// malformed timestamps surface as [`PomodoroError::Corrupted`].
struct RecordRow {
    id: String,
    task_id: Option<String>,
    task_title: String,
    start_time: String,
    end_time: String,
    phase: String,
    completed: bool,
}

impl RecordRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(RecordRow {
            id: row.get(0)?,
            task_id: row.get(1)?,
            task_title: row.get(2)?,
            start_time: row.get(3)?,
            end_time: row.get(4)?,
            phase: row.get(5)?,
            completed: row.get(6)?,
        })
    }

    fn decode(self) -> PomodoroResult<SessionRecord> {
        Ok(SessionRecord {
            id: self.id,
            task_id: self.task_id,
            task_title: self.task_title,
            start_time: parse_timestamp(&self.start_time)?,
            end_time: parse_timestamp(&self.end_time)?,
            phase: self.phase.parse::<Phase>().map_err(|e| PomodoroError::Corrupted(e.to_string()))?,
            completed: self.completed,
        })
    }
}

pub struct Records {
    conn: Arc<Mutex<Connection>>,
}

impl Records {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Self {
        Records {
            conn: Arc::new(Mutex::new(db.conn)),
        }
    }

    fn query(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> PomodoroResult<Vec<SessionRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, RecordRow::from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(RecordRow::decode).collect()
    }

    /// Most recent records first, at most `limit` of them.
    pub fn recent(&self, limit: usize) -> PomodoroResult<Vec<SessionRecord>> {
        let sql = format!("{} {} LIMIT ?1", SELECT_RECORDS, ORDER_BY_END);
        self.query(&sql, &[&(limit as i64)])
    }
}

impl RecordStore for Records {
    fn append(&self, record: &SessionRecord) -> PomodoroResult<()> {
        let conn = self.conn.lock();
        let result = conn.execute(
            INSERT_RECORD,
            params![
                record.id,
                record.task_id,
                record.task_title,
                format_timestamp(&record.start_time),
                format_timestamp(&record.end_time),
                record.phase.as_str(),
                record.completed,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => Err(PomodoroError::DuplicateId(record.id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    fn get(&self, id: &str) -> PomodoroResult<Option<SessionRecord>> {
        let conn = self.conn.lock();
        let sql = format!("{} {}", SELECT_RECORDS, WHERE_ID);
        let row = conn.query_row(&sql, [id], RecordRow::from_row).optional()?;
        row.map(RecordRow::decode).transpose()
    }

    fn list_all(&self) -> PomodoroResult<Vec<SessionRecord>> {
        self.query(SELECT_RECORDS, &[])
    }

    fn list_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> PomodoroResult<Vec<SessionRecord>> {
        let sql = format!("{} {} {}", SELECT_RECORDS, WHERE_WORK_IN_RANGE, ORDER_BY_END);
        self.query(&sql, &[&format_timestamp(&start), &format_timestamp(&end)])
    }
}
