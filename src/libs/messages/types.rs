/// Every user-facing message pomo prints.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === CONFIGURATION MESSAGES ===
    ConfigModuleTimer,
    ConfigSaved,
    ConfigReadFailed(String),
    PromptWorkMinutes,
    PromptShortBreakMinutes,
    PromptLongBreakMinutes,
    PromptLongBreakInterval,
    ValueOutOfRange(u32, u32),

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingsUpdated,
    SettingsRejected(String),

    // === TIMER MESSAGES ===
    TimerStarting(String),
    TimerControls,
    PhaseCompleted(String),
    NextPhaseReady(String),
    SwitchWhileRunning,
    TimerStopped(u32),

    // === SESSION MESSAGES ===
    SessionRecorded(String),
    SessionCommitFailed(String),
    SessionCommitRetrying(String),
    ActiveTaskNotFound(String),
    TaskLookupFailed(String),
    PomodoroIncrementFailed(String, String),
    WorkingOn(String),
    NoActiveTask,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskActivated(String),
    TaskDeactivated,
    TaskNotFound(String),
    TasksHeader,
    TasksNotFound,
    ConfirmDeleteTask(String),
    OperationCancelled,
    PromptTaskTitle,

    // === STATISTICS MESSAGES ===
    StatsRollingHeader(u32),
    StatsHistoricalHeader(u32, String),
    StatsMonthHeader(String),
    StatsSummary(usize, String),
    CurrentPeriodHeader,
    HourlyHeader,
    DailyHeader,
    AvailableMonthsHeader,
    NoSessionsInPeriod,
    NoSessionsRecorded,

    // === HISTORY MESSAGES ===
    HistoryHeader(usize),
    NoRecords,

    // === EXPORT MESSAGES ===
    ExportingData(String),
    ExportCompleted(String),
    NoDataToExport,

    // === INPUT ERRORS ===
    InvalidDateFormat(String),
    InvalidMonthFormat(String),
}
