//! Turns timer completions into persisted session records.
//!
//! For every [`CompletionEvent`] the orchestrator resolves the active task,
//! builds an immutable [`SessionRecord`], appends it to the record store and,
//! for finished work phases, asks the task list to bump the task's pomodoro
//! count. The increment is fire-and-forget: it never delays or undoes the
//! record, and its failures are only logged.
//!
//! ```text
//! CompletionEvent ──▶ build_record ──▶ commit ──▶ RecordStore
//!                          │                 └──▶ increment (blocking pool)
//!                          ▼
//!                  TaskCollaborator::find_task
//! ```

use crate::db::store::RecordStore;
use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::messages::Message;
use crate::libs::record::{Phase, SessionRecord, NO_TASK_TITLE};
use crate::libs::settings::Settings;
use crate::libs::task::{TaskCollaborator, TaskRef};
use crate::libs::timer::CompletionEvent;
use crate::{msg_debug, msg_warning};
use chrono::{SubsecRound, TimeDelta};
use std::sync::Arc;
use uuid::Uuid;

pub struct SessionOrchestrator {
    store: Arc<dyn RecordStore>,
    tasks: Arc<dyn TaskCollaborator>,
    settings: Settings,
    active_task: Option<String>,
}

impl SessionOrchestrator {
    pub fn new(store: Arc<dyn RecordStore>, tasks: Arc<dyn TaskCollaborator>, settings: Settings) -> Self {
        SessionOrchestrator {
            store,
            tasks,
            settings,
            active_task: None,
        }
    }

    pub fn set_active_task(&mut self, task_id: Option<String>) {
        self.active_task = task_id;
    }

    pub fn active_task(&self) -> Option<&str> {
        self.active_task.as_deref()
    }

    /// Keeps the fallback start-time computation in step with the timer.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Resolves the active task. A missing task or a failing lookup is not
    /// fatal; the session is then recorded without a task.
    fn resolve_task(&self) -> Option<TaskRef> {
        let id = self.active_task.as_deref()?;
        match self.tasks.find_task(id) {
            Ok(Some(task)) => Some(task),
            Ok(None) => {
                msg_warning!(Message::ActiveTaskNotFound(id.to_string()));
                None
            }
            Err(e) => {
                msg_warning!(Message::TaskLookupFailed(e.to_string()));
                None
            }
        }
    }

    /// Builds the record for a completion without persisting it.
    ///
    /// When the event has no start time (a break, or a work phase entered
    /// without `toggle`), the start is the end minus the configured length
    /// of the completed phase. Timestamps are cut to the millisecond
    /// precision the stores keep.
    pub fn build_record(&self, event: &CompletionEvent) -> SessionRecord {
        let task = self.resolve_task();
        let end_time = event.ended_at.trunc_subsecs(3);
        let start_time = event
            .started_at
            .map(|t| t.trunc_subsecs(3))
            .unwrap_or_else(|| end_time - TimeDelta::minutes(i64::from(self.settings.minutes_for(event.phase))));

        SessionRecord {
            id: Uuid::new_v4().to_string(),
            task_id: task.as_ref().map(|t| t.id.clone()),
            task_title: task.map(|t| t.title).unwrap_or_else(|| NO_TASK_TITLE.to_string()),
            start_time,
            end_time,
            phase: event.phase,
            completed: true,
        }
    }

    /// Appends a record.
    ///
    /// Re-committing a record that is already stored unchanged succeeds, so a
    /// caller that saw a persistence error can retry with the same value.
    pub fn commit(&self, record: &SessionRecord) -> PomodoroResult<()> {
        match self.store.append(record) {
            Err(PomodoroError::DuplicateId(id)) => match self.store.get(&id)? {
                Some(stored) if stored == *record => {
                    msg_debug!("session record {} already stored", id);
                    Ok(())
                }
                _ => Err(PomodoroError::DuplicateId(id)),
            },
            result => result,
        }
    }

    /// Records a completion and, for work phases booked against a task,
    /// dispatches the pomodoro increment.
    pub fn record_completion(&self, event: &CompletionEvent) -> PomodoroResult<SessionRecord> {
        self.record(self.build_record(event))
    }

    /// Commits a built record and dispatches its follow-up increment.
    /// Calling it again with the same record after a retryable failure
    /// stores the session once.
    pub fn record(&self, record: SessionRecord) -> PomodoroResult<SessionRecord> {
        self.commit(&record)?;
        msg_debug!("recorded {} session {} ({})", record.phase, record.id, record.task_title);

        if record.phase == Phase::Work {
            if let Some(task_id) = record.task_id.clone() {
                self.dispatch_increment(task_id);
            }
        }

        Ok(record)
    }

    /// Runs the increment on the blocking pool when called inside a tokio
    /// runtime, inline otherwise.
    fn dispatch_increment(&self, task_id: String) {
        let tasks = Arc::clone(&self.tasks);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || increment(tasks.as_ref(), &task_id));
            }
            Err(_) => increment(tasks.as_ref(), &task_id),
        }
    }
}

fn increment(tasks: &dyn TaskCollaborator, task_id: &str) {
    if let Err(e) = tasks.increment_completed_pomodoros(task_id) {
        msg_warning!(Message::PomodoroIncrementFailed(task_id.to_string(), e.to_string()));
    }
}
