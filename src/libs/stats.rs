//! Focus statistics over session history.
//!
//! Everything here is a pure function of the records it is given. Only
//! completed work sessions count; breaks never show up in productivity
//! numbers.
//!
//! ## Time windows
//!
//! Two period conventions coexist on purpose:
//!
//! - **Rolling** (`reference = None`): `[now − days × 24h, now]`, no snapping
//!   to midnight. Used for "today / this week / this month so far".
//! - **Historical** (`reference = Some(date)`):
//!   `[date − days at 00:00:00.000, date at 23:59:59.999]`. Used when looking
//!   at the days around a specific date.
//!
//! Calendar months run from day 1 at midnight to the last day at
//! `23:59:59.999`; the last day is found as "first day of next month minus one
//! day", so month lengths and leap years need no special cases.
//!
//! ## Usage
//!
//! ```rust
//! use pomo::libs::record::SessionRecord;
//! use pomo::libs::stats::{daily_buckets, hourly_buckets, Statistics};
//! use chrono::Local;
//!
//! let history: Vec<SessionRecord> = Vec::new();
//! let stats = Statistics::new(&history);
//! let week = stats.period_records(7, None, Local::now().naive_local());
//! assert_eq!(hourly_buckets(&week).len(), 24);
//! assert_eq!(daily_buckets(&week).iter().map(|b| b.count).sum::<u32>(), 0);
//! ```

use crate::libs::error::{PomodoroError, PomodoroResult};
use crate::libs::record::SessionRecord;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::Serialize;
use std::collections::BTreeSet;

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Count of sessions that ended in one hour-of-day or day-of-week slot.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub index: u32,
    pub count: u32,
}

/// A calendar month with data, month index 0-based.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Parses `YYYY-MM` with a 1-based month as typed by users.
    pub fn parse(value: &str) -> PomodoroResult<Self> {
        let invalid = || PomodoroError::validation(format!("Invalid month '{}', expected YYYY-MM", value));
        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(MonthKey { year, month: month - 1 })
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }
}

/// Closed interval `[start, end]` on record end times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        *timestamp >= self.start && *timestamp <= self.end
    }

    /// Window used by [`Statistics::period_records`].
    ///
    /// A start that would fall before the earliest representable date is
    /// clamped to it.
    pub fn period(days: u32, reference: Option<NaiveDate>, now: NaiveDateTime) -> Window {
        match reference {
            Some(date) => Window {
                start: date.checked_sub_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MIN).and_time(NaiveTime::MIN),
                end: date.and_time(end_of_day()),
            },
            None => Window {
                start: now.checked_sub_signed(TimeDelta::days(i64::from(days))).unwrap_or(NaiveDateTime::MIN),
                end: now,
            },
        }
    }

    /// Window used by [`Statistics::month_records`].
    pub fn month(year: i32, month0: u32) -> PomodoroResult<Window> {
        if month0 > 11 {
            return Err(PomodoroError::validation(format!("Month index must be between 0 and 11, got {}", month0)));
        }
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(|| PomodoroError::validation(format!("Year {} is out of range", year)))?;
        let next_first = if month0 == 11 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month0 + 2, 1)
        }
        .ok_or_else(|| PomodoroError::validation(format!("Year {} is out of range", year)))?;
        let last = next_first - TimeDelta::days(1);

        Ok(Window {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(end_of_day()),
        })
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

/// Today / week / month counts shown next to the timer.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodSummary {
    pub today: usize,
    pub week: usize,
    pub month: usize,
}

/// Read-only queries over a history snapshot.
pub struct Statistics<'a> {
    history: &'a [SessionRecord],
}

impl<'a> Statistics<'a> {
    pub fn new(history: &'a [SessionRecord]) -> Self {
        Statistics { history }
    }

    fn completed_work_in(&self, window: Window) -> Vec<&'a SessionRecord> {
        self.history.iter().filter(|r| r.is_completed_work() && window.contains(&r.end_time)).collect()
    }

    /// Completed work sessions in the last `days` days.
    ///
    /// See the module docs for the difference between rolling and
    /// historical windows.
    pub fn period_records(&self, days: u32, reference: Option<NaiveDate>, now: NaiveDateTime) -> Vec<&'a SessionRecord> {
        self.completed_work_in(Window::period(days, reference, now))
    }

    /// Completed work sessions that ended in a calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::Validation`] when `month0` is not in `0..=11`.
    pub fn month_records(&self, year: i32, month0: u32) -> PomodoroResult<Vec<&'a SessionRecord>> {
        Ok(self.completed_work_in(Window::month(year, month0)?))
    }

    /// Months that contain at least one completed work session, most recent
    /// first.
    pub fn available_months(&self) -> Vec<MonthKey> {
        let months: BTreeSet<MonthKey> = self
            .history
            .iter()
            .filter(|r| r.is_completed_work())
            .map(|r| MonthKey {
                year: r.end_time.year(),
                month: r.end_time.month0(),
            })
            .collect();
        months.into_iter().rev().collect()
    }

    /// Rolling 1, 7 and 30 day counts.
    pub fn current_period_summary(&self, now: NaiveDateTime) -> PeriodSummary {
        PeriodSummary {
            today: self.period_records(1, None, now).len(),
            week: self.period_records(7, None, now).len(),
            month: self.period_records(30, None, now).len(),
        }
    }
}

fn bucketize<I>(size: usize, records: I, slot: impl Fn(&SessionRecord) -> usize) -> Vec<Bucket>
where
    I: IntoIterator,
    I::Item: AsRef<SessionRecord>,
{
    let mut buckets: Vec<Bucket> = (0..size).map(|i| Bucket { index: i as u32, count: 0 }).collect();
    for record in records {
        if let Some(bucket) = buckets.get_mut(slot(record.as_ref())) {
            bucket.count += 1;
        }
    }
    buckets
}

/// 24 buckets keyed by the hour each session ended.
pub fn hourly_buckets<I>(records: I) -> Vec<Bucket>
where
    I: IntoIterator,
    I::Item: AsRef<SessionRecord>,
{
    bucketize(HOURS_PER_DAY, records, |r| r.end_time.hour() as usize)
}

/// 7 buckets keyed by the weekday each session ended, Sunday first.
pub fn daily_buckets<I>(records: I) -> Vec<Bucket>
where
    I: IntoIterator,
    I::Item: AsRef<SessionRecord>,
{
    bucketize(DAYS_PER_WEEK, records, |r| r.end_time.weekday().num_days_from_sunday() as usize)
}

/// Total time spent in the given sessions.
pub fn total_focus_time<I>(records: I) -> TimeDelta
where
    I: IntoIterator,
    I::Item: AsRef<SessionRecord>,
{
    records.into_iter().map(|r| r.as_ref().duration()).fold(TimeDelta::zero(), |acc, d| acc + d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_parse() {
        assert_eq!(MonthKey::parse("2024-02").unwrap(), MonthKey { year: 2024, month: 1 });
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024").is_err());
        assert!(MonthKey::parse("abcd-01").is_err());
    }

    #[test]
    fn test_december_window_ends_on_new_years_eve() {
        let window = Window::month(2025, 11).unwrap();
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap().and_hms_milli_opt(23, 59, 59, 999).unwrap());
    }

    #[test]
    fn test_month_index_out_of_range() {
        assert!(matches!(Window::month(2025, 12), Err(PomodoroError::Validation(_))));
    }

    #[test]
    fn test_historical_window_snaps_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let now = date.and_hms_opt(14, 30, 0).unwrap();
        let window = Window::period(2, Some(date), now);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 3, 8).unwrap().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(window.end, date.and_hms_milli_opt(23, 59, 59, 999).unwrap());
    }

    #[test]
    fn test_empty_history() {
        let history: Vec<SessionRecord> = Vec::new();
        let stats = Statistics::new(&history);
        assert!(stats.available_months().is_empty());
        assert!(hourly_buckets(&history).iter().all(|b| b.count == 0));
        assert_eq!(daily_buckets(&history).len(), 7);
    }
}
