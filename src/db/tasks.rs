use super::db::Db;
use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::task::{NewTask, Priority, Task, TaskCollaborator, TaskFilter, TaskRef};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use uuid::Uuid;

const INSERT_TASK: &str = "INSERT INTO tasks (id, title, description, due_date, priority, completed, total_pomodoros, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, FALSE, 0, ?6, ?6)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, priority, completed, total_pomodoros, created_at, updated_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_ID_PREFIX: &str = "WHERE substr(id, 1, length(?1)) = ?1";
const WHERE_OPEN: &str = "WHERE completed = FALSE";
const WHERE_COMPLETED: &str = "WHERE completed = TRUE";
const ORDER_BY: &str = "ORDER BY completed ASC, created_at DESC";
const TOGGLE_TASK: &str = "UPDATE tasks SET completed = NOT completed, updated_at = ?2 WHERE id = ?1";
const INCREMENT_POMODOROS: &str = "UPDATE tasks SET total_pomodoros = total_pomodoros + 1, updated_at = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Task list persisted in the `tasks` table.
///
/// The connection is shared behind a mutex so the store can be handed to the
/// blocking pool for pomodoro increments.
#[derive(Clone)]
pub struct Tasks {
    conn: Arc<Mutex<Connection>>,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks {
            conn: Arc::new(Mutex::new(db.conn)),
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<(Task, String)> {
        let priority: String = row.get(4)?;
        let task = Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            priority: Priority::default(),
            completed: row.get(5)?,
            total_pomodoros: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        };
        Ok((task, priority))
    }

    fn decode((mut task, priority): (Task, String)) -> PomodoroResult<Task> {
        task.priority = priority.parse().map_err(|_| PomodoroError::Corrupted(format!("task {} has priority '{}'", task.id, priority)))?;
        Ok(task)
    }

    pub fn insert(&self, new_task: &NewTask) -> PomodoroResult<Task> {
        new_task.validate()?;
        let id = Uuid::new_v4().to_string();
        let now = now();
        {
            let conn = self.conn.lock();
            conn.execute(
                INSERT_TASK,
                params![id, new_task.title.trim(), new_task.description, new_task.due_date, new_task.priority.as_str(), now],
            )?;
        }
        self.get(&id)?.ok_or(PomodoroError::LookupMiss(id))
    }

    pub fn fetch(&self, filter: TaskFilter) -> PomodoroResult<Vec<Task>> {
        let sql = match filter {
            TaskFilter::All => format!("{} {}", SELECT_TASKS, ORDER_BY),
            TaskFilter::Open => format!("{} {} {}", SELECT_TASKS, WHERE_OPEN, ORDER_BY),
            TaskFilter::Completed => format!("{} {} {}", SELECT_TASKS, WHERE_COMPLETED, ORDER_BY),
        };

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(Self::decode).collect()
    }

    pub fn get(&self, id: &str) -> PomodoroResult<Option<Task>> {
        let conn = self.conn.lock();
        let row = conn.query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), [id], Self::map_row).optional()?;
        row.map(Self::decode).transpose()
    }

    /// Finds a task by its full id or by an unambiguous id prefix, so the CLI
    /// can accept the short ids it prints.
    pub fn resolve(&self, id_or_prefix: &str) -> PomodoroResult<Task> {
        if let Some(task) = self.get(id_or_prefix)? {
            return Ok(task);
        }

        let mut matches = {
            let conn = self.conn.lock();
            let mut stmt = conn.prepare(&format!("{} {} LIMIT 2", SELECT_TASKS, WHERE_ID_PREFIX))?;
            let rows = stmt.query_map([id_or_prefix], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        };

        if matches.len() > 1 {
            return Err(PomodoroError::validation(format!("Task id prefix '{}' is ambiguous", id_or_prefix)));
        }
        match matches.pop() {
            Some(row) => Self::decode(row),
            None => Err(PomodoroError::LookupMiss(id_or_prefix.to_string())),
        }
    }

    /// Flips the completed flag and returns the updated task.
    pub fn toggle(&self, id: &str) -> PomodoroResult<Task> {
        let changed = self.conn.lock().execute(TOGGLE_TASK, params![id, now()])?;
        if changed == 0 {
            return Err(PomodoroError::LookupMiss(id.to_string()));
        }
        self.get(id)?.ok_or_else(|| PomodoroError::LookupMiss(id.to_string()))
    }

    /// Removes a task. Session records keep their copy of the title.
    pub fn delete(&self, id: &str) -> PomodoroResult<()> {
        let changed = self.conn.lock().execute(DELETE_TASK, [id])?;
        if changed == 0 {
            return Err(PomodoroError::LookupMiss(id.to_string()));
        }
        Ok(())
    }
}

impl TaskCollaborator for Tasks {
    fn find_task(&self, id: &str) -> PomodoroResult<Option<TaskRef>> {
        Ok(self.get(id)?.as_ref().map(TaskRef::from))
    }

    fn increment_completed_pomodoros(&self, id: &str) -> PomodoroResult<()> {
        let changed = self.conn.lock().execute(INCREMENT_POMODOROS, params![id, now()])?;
        if changed == 0 {
            return Err(PomodoroError::LookupMiss(id.to_string()));
        }
        Ok(())
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
