//! Timer settings value object.
//!
//! `Settings` describes how long each phase lasts and how many work phases
//! pass between long breaks. Values are validated once, by whoever hands them
//! to the core (the config file loader, the `settings` command or the init
//! wizard); the timer itself trusts what it receives.
//!
//! ## Accepted ranges
//!
//! | field                 | min | max |
//! |-----------------------|-----|-----|
//! | `work_minutes`        | 1   | 60  |
//! | `short_break_minutes` | 1   | 30  |
//! | `long_break_minutes`  | 1   | 60  |
//! | `long_break_interval` | 2   | 10  |

use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::record::Phase;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const WORK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
pub const SHORT_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=30;
pub const LONG_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
pub const LONG_BREAK_INTERVAL_RANGE: RangeInclusive<u32> = 2..=10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Length of a work phase in minutes.
    pub work_minutes: u32,
    /// Length of a short break in minutes.
    pub short_break_minutes: u32,
    /// Length of a long break in minutes.
    pub long_break_minutes: u32,
    /// Completed work phases between two long breaks.
    pub long_break_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_interval: 4,
        }
    }
}

impl Settings {
    /// Builds a validated settings value.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::Validation`] naming the first field that is
    /// out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pomo::libs::settings::Settings;
    ///
    /// let settings = Settings::new(50, 10, 30, 3).unwrap();
    /// assert_eq!(settings.work_minutes, 50);
    /// assert!(Settings::new(0, 5, 15, 4).is_err());
    /// ```
    pub fn new(work_minutes: u32, short_break_minutes: u32, long_break_minutes: u32, long_break_interval: u32) -> PomodoroResult<Self> {
        let settings = Settings {
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            long_break_interval,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every field against its accepted range.
    pub fn validate(&self) -> PomodoroResult<()> {
        check_range("Work time", "minutes", self.work_minutes, WORK_MINUTES_RANGE)?;
        check_range("Short break", "minutes", self.short_break_minutes, SHORT_BREAK_MINUTES_RANGE)?;
        check_range("Long break", "minutes", self.long_break_minutes, LONG_BREAK_MINUTES_RANGE)?;
        check_range("Long break interval", "work sessions", self.long_break_interval, LONG_BREAK_INTERVAL_RANGE)?;
        Ok(())
    }

    pub fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    /// Full countdown length of `phase` in seconds.
    pub fn seconds_for(&self, phase: Phase) -> u32 {
        self.minutes_for(phase) * 60
    }
}

fn check_range(field: &str, unit: &str, value: u32, range: RangeInclusive<u32>) -> PomodoroResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PomodoroError::validation(format!(
            "{} must be between {} and {} {}, got {}",
            field,
            range.start(),
            range.end(),
            unit,
            value
        )))
    }
}
