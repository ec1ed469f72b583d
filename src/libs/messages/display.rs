//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigModuleTimer => "Timer durations".to_string(),
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigReadFailed(error) => format!("Could not read configuration, using defaults: {}", error),
            Message::PromptWorkMinutes => "Focus length in minutes".to_string(),
            Message::PromptShortBreakMinutes => "Short break length in minutes".to_string(),
            Message::PromptLongBreakMinutes => "Long break length in minutes".to_string(),
            Message::PromptLongBreakInterval => "Focus sessions before a long break".to_string(),
            Message::ValueOutOfRange(min, max) => format!("Enter a value between {} and {}", min, max),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Timer settings".to_string(),
            Message::SettingsUpdated => "Timer settings updated".to_string(),
            Message::SettingsRejected(reason) => format!("Settings not saved: {}", reason),

            // === TIMER MESSAGES ===
            Message::TimerStarting(phase) => format!("{} started", phase),
            Message::TimerControls => "[p] pause/resume  [r] reset  [w] focus  [s] short break  [l] long break  [q] quit".to_string(),
            Message::PhaseCompleted(phase) => format!("{} finished", phase),
            Message::NextPhaseReady(phase) => format!("Up next: {}. Press [p] to start", phase),
            Message::SwitchWhileRunning => "Pause the timer before switching phases".to_string(),
            Message::TimerStopped(count) => format!("Timer stopped after {} focus session(s)", count),

            // === SESSION MESSAGES ===
            Message::SessionRecorded(title) => format!("Session recorded: {}", title),
            Message::SessionCommitFailed(error) => format!("Failed to record session: {}", error),
            Message::SessionCommitRetrying(error) => format!("Could not record session ({}), retrying once", error),
            Message::ActiveTaskNotFound(id) => format!("Active task {} no longer exists, recording without a task", id),
            Message::TaskLookupFailed(error) => format!("Task lookup failed, recording without a task: {}", error),
            Message::PomodoroIncrementFailed(id, error) => format!("Could not update pomodoro count for task {}: {}", id, error),
            Message::WorkingOn(title) => format!("Working on: {}", title),
            Message::NoActiveTask => "No active task. Sessions will be recorded without a task".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskActivated(title) => format!("Focus sessions will be booked against '{}'", title),
            Message::TaskDeactivated => "Active task cleared".to_string(),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatsRollingHeader(days) => format!("Focus sessions in the last {} day(s)", days),
            Message::StatsHistoricalHeader(days, date) => format!("Focus sessions in the {} day(s) up to {}", days, date),
            Message::StatsMonthHeader(month) => format!("Focus sessions in {}", month),
            Message::StatsSummary(count, focus) => format!("{} session(s), {} of focus", count, focus),
            Message::CurrentPeriodHeader => "Today / last 7 days / last 30 days".to_string(),
            Message::HourlyHeader => "By hour of day".to_string(),
            Message::DailyHeader => "By day of week".to_string(),
            Message::AvailableMonthsHeader => "Months with recorded sessions".to_string(),
            Message::NoSessionsInPeriod => "No focus sessions in this period".to_string(),
            Message::NoSessionsRecorded => "No focus sessions recorded yet".to_string(),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader(count) => format!("Last {} session(s)", count),
            Message::NoRecords => "No sessions recorded yet".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting sessions as {}", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NoDataToExport => "No sessions to export".to_string(),

            // === INPUT ERRORS ===
            Message::InvalidDateFormat(value) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", value),
            Message::InvalidMonthFormat(value) => format!("Invalid month '{}', expected YYYY-MM", value),
        };
        write!(f, "{}", s)
    }
}
