//! Tasks that work sessions are booked against.

use crate::libs::error::{PomodoroError, PomodoroResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PomodoroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(PomodoroError::validation(format!("unknown priority '{}'", other))),
        }
    }
}

/// How close an open task is to its due date.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DueDateStatus {
    Overdue,
    Today,
    /// Due within the next three days.
    Soon,
    Normal,
}

impl DueDateStatus {
    pub fn of(due_date: NaiveDate, today: NaiveDate) -> Self {
        match (due_date - today).num_days() {
            d if d < 0 => DueDateStatus::Overdue,
            0 => DueDateStatus::Today,
            d if d <= 3 => DueDateStatus::Soon,
            _ => DueDateStatus::Normal,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    pub total_pomodoros: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    /// Due date status, or `None` for completed tasks and tasks without a
    /// due date.
    pub fn due_status(&self, today: NaiveDate) -> Option<DueDateStatus> {
        if self.completed {
            return None;
        }
        self.due_date.map(|due| DueDateStatus::of(due, today))
    }
}

/// Input for creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.trim().to_string(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
        }
    }

    pub fn validate(&self) -> PomodoroResult<()> {
        if self.title.trim().is_empty() {
            return Err(PomodoroError::validation("Task title must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Open,
    Completed,
}

/// What the session orchestrator needs to know about a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRef {
    pub id: String,
    pub title: String,
}

impl From<&Task> for TaskRef {
    fn from(task: &Task) -> Self {
        TaskRef {
            id: task.id.clone(),
            title: task.title.clone(),
        }
    }
}

/// Task list operations the timer core depends on.
///
/// Implementations must be safe to call from the blocking thread pool;
/// the pomodoro increment runs there, detached from session recording.
pub trait TaskCollaborator: Send + Sync {
    fn find_task(&self, id: &str) -> PomodoroResult<Option<TaskRef>>;

    fn increment_completed_pomodoros(&self, id: &str) -> PomodoroResult<()>;
}
