//! Pomodoro countdown state machine.
//!
//! The [`Timer`] owns a single countdown and moves between work, short break
//! and long break phases. It has no clock of its own: an external scheduler
//! calls [`Timer::tick`] once per second and passes the wall-clock time that
//! should be stamped on any completion. Each tick removes exactly one second,
//! so jitter in the scheduler never accumulates into drift.
//!
//! ## Transitions
//!
//! ```text
//!            count % interval != 0
//!   ┌──────┐ ───────────────────▶ ┌────────────┐
//!   │ Work │                       │ ShortBreak │
//!   └──────┘ ◀─────────────────── └────────────┘
//!     │  ▲
//!     │  │        count % interval == 0
//!     │  └─────────────────────── ┌───────────┐
//!     └─────────────────────────▶ │ LongBreak │
//!                                 └───────────┘
//! ```
//!
//! Every completed phase leaves the timer stopped; the next phase must be
//! started explicitly.
//!
//! ## Usage
//!
//! ```rust
//! use pomo::libs::settings::Settings;
//! use pomo::libs::timer::Timer;
//! use chrono::Local;
//!
//! let mut timer = Timer::new(Settings::default());
//! timer.toggle(Local::now().naive_local());
//! if let Some(event) = timer.tick(Local::now().naive_local()) {
//!     println!("{} finished", event.phase);
//! }
//! ```

use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::record::Phase;
use crate::libs::settings::Settings;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Read-only view of the countdown handed to the presentation layer.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub is_running: bool,
    /// Work phases finished since the timer was created. Never decremented.
    pub completed_work_count: u32,
    /// Set when a work phase starts running, cleared on completion, reset
    /// or a manual phase switch.
    pub current_session_started_at: Option<NaiveDateTime>,
}

/// Emitted by the tick that brings a running countdown to zero.
///
/// Carries copies of the values the timer clears during the transition.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    pub phase: Phase,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: NaiveDateTime,
    /// Phase the timer moved to after this completion.
    pub next_phase: Phase,
}

pub struct Timer {
    settings: Settings,
    state: TimerState,
}

impl Timer {
    pub fn new(settings: Settings) -> Self {
        Timer {
            state: TimerState {
                phase: Phase::Work,
                remaining_seconds: settings.seconds_for(Phase::Work),
                is_running: false,
                completed_work_count: 0,
                current_session_started_at: None,
            },
            settings,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn snapshot(&self) -> TimerState {
        self.state.clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Starts or pauses the countdown.
    ///
    /// Starting a work phase stamps `now` as the session start. Resuming
    /// after a pause stamps it again.
    pub fn toggle(&mut self, now: NaiveDateTime) {
        if !self.state.is_running && self.state.phase == Phase::Work {
            self.state.current_session_started_at = Some(now);
        }
        self.state.is_running = !self.state.is_running;
    }

    /// Stops the countdown and rewinds the current phase to its full length.
    pub fn reset(&mut self) {
        self.state.is_running = false;
        self.state.current_session_started_at = None;
        self.state.remaining_seconds = self.settings.seconds_for(self.state.phase);
    }

    /// Jumps to `target` with a full countdown.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::Validation`] and leaves the state untouched
    /// while the countdown is running.
    pub fn switch_phase(&mut self, target: Phase) -> PomodoroResult<()> {
        if self.state.is_running {
            return Err(PomodoroError::validation("Pause the timer before switching phase"));
        }
        self.state.phase = target;
        self.state.is_running = false;
        self.state.current_session_started_at = None;
        self.state.remaining_seconds = self.settings.seconds_for(target);
        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// Does nothing while paused. Returns the completion event when this tick
    /// brought a running countdown to zero; by then the timer has already
    /// moved to the next phase and stopped.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<CompletionEvent> {
        if !self.state.is_running {
            return None;
        }
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        }
        if self.state.remaining_seconds == 0 {
            return Some(self.complete(now));
        }
        None
    }

    /// Replaces the settings.
    ///
    /// A stopped timer rewinds its current phase to the new length, dropping
    /// any partial progress. A running countdown keeps its remaining time and
    /// picks the new lengths up from the next phase on.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if !self.state.is_running {
            self.state.remaining_seconds = self.settings.seconds_for(self.state.phase);
        }
    }

    fn complete(&mut self, now: NaiveDateTime) -> CompletionEvent {
        let finished = self.state.phase;
        let started_at = self.state.current_session_started_at.take();
        self.state.is_running = false;

        let next = match finished {
            Phase::Work => {
                self.state.completed_work_count += 1;
                if self.state.completed_work_count % self.settings.long_break_interval == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };

        self.state.phase = next;
        self.state.remaining_seconds = self.settings.seconds_for(next);

        CompletionEvent {
            phase: finished,
            started_at,
            ended_at: now,
            next_phase: next,
        }
    }
}
