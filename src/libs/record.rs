//! Session history entries and the timer phase tag.

use crate::libs::error::PomodoroError;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp layout used for every stored record.
///
/// Millisecond precision keeps `23:59:59.999` window edges exact, and the
/// fixed width makes lexical order in SQLite match chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Title stored on records completed without an active task.
pub const NO_TASK_TITLE: &str = "No task";

/// The purpose of the countdown currently running.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Work, Phase::ShortBreak, Phase::LongBreak];

    /// Wire and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::ShortBreak => "shortBreak",
            Phase::LongBreak => "longBreak",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Work)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = PomodoroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Phase::Work),
            "shortBreak" => Ok(Phase::ShortBreak),
            "longBreak" => Ok(Phase::LongBreak),
            other => Err(PomodoroError::validation(format!("unknown phase '{}'", other))),
        }
    }
}

/// One finished countdown.
///
/// Records are created once by the orchestrator and never mutated. The task
/// title is a snapshot taken at completion time, so renaming or deleting the
/// task later leaves history untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub task_id: Option<String>,
    pub task_title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub phase: Phase,
    /// Always `true` for countdowns that ran to zero.
    pub completed: bool,
}

impl SessionRecord {
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Whether the record counts towards productivity statistics.
    pub fn is_completed_work(&self) -> bool {
        self.phase == Phase::Work && self.completed
    }
}

impl AsRef<SessionRecord> for SessionRecord {
    fn as_ref(&self) -> &SessionRecord {
        self
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, PomodoroError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| PomodoroError::Corrupted(format!("timestamp '{}': {}", value, e)))
}
