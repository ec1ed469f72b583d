//! Terminal tables.

use crate::libs::formatter::{due_status_label, format_duration, month_label, phase_label, priority_label, short_id, weekday_label};
use crate::libs::record::SessionRecord;
use crate::libs::settings::Settings;
use crate::libs::stats::{Bucket, MonthKey, PeriodSummary};
use crate::libs::task::Task;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// `active` marks the task new sessions are booked against.
    pub fn tasks(tasks: &[Task], active: Option<&str>, today: NaiveDate) {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "TITLE", "PRIORITY", "DUE", "STATUS", "🍅", "DONE"]);
        for task in tasks {
            let marker = if active == Some(task.id.as_str()) { "▶" } else { "" };
            table.add_row(row![
                marker,
                short_id(&task.id),
                task.title,
                priority_label(task.priority),
                task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                due_status_label(task.due_status(today)),
                task.total_pomodoros,
                if task.completed { "✔" } else { "" }
            ]);
        }
        table.printstd();
    }

    pub fn records(records: &[SessionRecord]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "START", "END", "DURATION", "PHASE", "TASK"]);
        for record in records {
            table.add_row(row![
                record.end_time.format("%Y-%m-%d"),
                record.start_time.format("%H:%M"),
                record.end_time.format("%H:%M"),
                format_duration(&record.duration()),
                phase_label(record.phase),
                record.task_title
            ]);
        }
        table.printstd();
    }

    /// Non-empty hour buckets with a bar proportional to the count.
    pub fn hourly(buckets: &[Bucket]) {
        let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
        let mut table = Table::new();

        table.add_row(row!["HOUR", "SESSIONS", ""]);
        for bucket in buckets.iter().filter(|b| b.count > 0) {
            table.add_row(row![format!("{:02}:00", bucket.index), bucket.count, bar(bucket.count, max)]);
        }
        table.printstd();
    }

    pub fn daily(buckets: &[Bucket]) {
        let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
        let mut table = Table::new();

        table.add_row(row!["DAY", "SESSIONS", ""]);
        for bucket in buckets {
            table.add_row(row![weekday_label(bucket.index), bucket.count, bar(bucket.count, max)]);
        }
        table.printstd();
    }

    pub fn summary(summary: &PeriodSummary) {
        let mut table = Table::new();
        table.add_row(row!["TODAY", "7 DAYS", "30 DAYS"]);
        table.add_row(row![summary.today, summary.week, summary.month]);
        table.printstd();
    }

    pub fn months(months: &[MonthKey]) {
        let mut table = Table::new();
        table.add_row(row!["MONTH", "KEY"]);
        for month in months {
            table.add_row(row![month_label(month.year, month.month), format!("{}-{:02}", month.year, month.month + 1)]);
        }
        table.printstd();
    }

    pub fn settings(settings: &Settings) {
        let mut table = Table::new();
        table.add_row(row!["Focus", format!("{} min", settings.work_minutes)]);
        table.add_row(row!["Short break", format!("{} min", settings.short_break_minutes)]);
        table.add_row(row!["Long break", format!("{} min", settings.long_break_minutes)]);
        table.add_row(row!["Long break every", format!("{} sessions", settings.long_break_interval)]);
        table.printstd();
    }
}

fn bar(count: u32, max: u32) -> String {
    const WIDTH: u32 = 30;
    if max == 0 {
        return String::new();
    }
    "█".repeat((count * WIDTH / max) as usize)
}
