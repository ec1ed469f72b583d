//! Human-readable labels and durations for terminal output.
//!
//! Domain enums only carry their wire names; the words shown to the user are
//! chosen here.

use crate::libs::record::Phase;
use crate::libs::task::{DueDateStatus, Priority};
use chrono::TimeDelta;

/// `HH:MM` with negative values clamped to zero.
pub fn format_duration(duration: &TimeDelta) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Countdown display, `MM:SS`.
pub fn format_countdown(remaining_seconds: u32) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => "Focus",
        Phase::ShortBreak => "Short break",
        Phase::LongBreak => "Long break",
    }
}

pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

pub fn due_status_label(status: Option<DueDateStatus>) -> &'static str {
    match status {
        Some(DueDateStatus::Overdue) => "overdue",
        Some(DueDateStatus::Today) => "due today",
        Some(DueDateStatus::Soon) => "due soon",
        Some(DueDateStatus::Normal) | None => "",
    }
}

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_LABELS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Short weekday name for a day-of-week bucket index (0 = Sunday).
pub fn weekday_label(index: u32) -> &'static str {
    WEEKDAY_LABELS.get(index as usize).copied().unwrap_or("?")
}

/// `"Mar 2024"` for a 0-based month index.
pub fn month_label(year: i32, month0: u32) -> String {
    match MONTH_LABELS.get(month0 as usize) {
        Some(name) => format!("{} {}", name, year),
        None => format!("{}-{:02}", year, month0 + 1),
    }
}

/// First eight characters of a UUID, enough to address a task from the CLI.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(25 * 60), "25:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(0), "00:00");
    }

    #[test]
    fn test_format_duration_clamps_negative() {
        assert_eq!(format_duration(&TimeDelta::minutes(135)), "02:15");
        assert_eq!(format_duration(&TimeDelta::minutes(-5)), "00:00");
    }

    #[test]
    fn test_calendar_labels() {
        assert_eq!(weekday_label(0), "Sun");
        assert_eq!(weekday_label(9), "?");
        assert_eq!(month_label(2024, 1), "Feb 2024");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }
}
