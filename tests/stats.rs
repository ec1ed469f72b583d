#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use pomo::libs::record::{Phase, SessionRecord};
    use pomo::libs::stats::{daily_buckets, hourly_buckets, total_focus_time, MonthKey, Statistics, Window};

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_milli_opt(h, mi, s, ms).unwrap()
    }

    fn record(id: &str, end: NaiveDateTime, phase: Phase, completed: bool) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            task_id: None,
            task_title: "No task".to_string(),
            start_time: end - TimeDelta::minutes(25),
            end_time: end,
            phase,
            completed,
        }
    }

    fn work(id: &str, end: NaiveDateTime) -> SessionRecord {
        record(id, end, Phase::Work, true)
    }

    fn ids(records: &[&SessionRecord]) -> Vec<String> {
        let mut ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_leap_february_window() {
        let window = Window::month(2024, 1).unwrap();
        assert_eq!(window.start, ts(2024, 2, 1, 0, 0, 0, 0));
        assert_eq!(window.end, ts(2024, 2, 29, 23, 59, 59, 999));

        let history = vec![
            work("jan-31", ts(2024, 1, 31, 23, 59, 59, 999)),
            work("feb-01", ts(2024, 2, 1, 0, 0, 0, 0)),
            work("feb-29", ts(2024, 2, 29, 23, 59, 59, 999)),
            work("mar-01", ts(2024, 3, 1, 0, 0, 0, 0)),
        ];
        let stats = Statistics::new(&history);
        assert_eq!(ids(&stats.month_records(2024, 1).unwrap()), vec!["feb-01", "feb-29"]);
    }

    #[test]
    fn test_non_leap_february_ends_on_28th() {
        let window = Window::month(2025, 1).unwrap();
        assert_eq!(window.end, ts(2025, 2, 28, 23, 59, 59, 999));
    }

    #[test]
    fn test_rolling_one_day_window() {
        let now = ts(2025, 3, 10, 14, 0, 0, 0);
        let history = vec![
            work("25h-ago", now - TimeDelta::hours(25)),
            work("23h-ago", now - TimeDelta::hours(23)),
            work("just-now", now),
        ];
        let stats = Statistics::new(&history);

        assert_eq!(ids(&stats.period_records(1, None, now)), vec!["23h-ago", "just-now"]);
    }

    #[test]
    fn test_historical_window_covers_whole_days() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let now = ts(2025, 3, 20, 9, 0, 0, 0);
        let history = vec![
            work("before", ts(2025, 3, 8, 23, 59, 59, 999)),
            work("first", ts(2025, 3, 9, 0, 0, 0, 0)),
            work("last", ts(2025, 3, 10, 23, 59, 59, 999)),
            work("after", ts(2025, 3, 11, 0, 0, 0, 0)),
        ];
        let stats = Statistics::new(&history);

        assert_eq!(ids(&stats.period_records(1, Some(reference), now)), vec!["first", "last"]);
    }

    #[test]
    fn test_only_completed_work_is_counted() {
        let end = ts(2025, 3, 10, 10, 0, 0, 0);
        let history = vec![
            work("work", end),
            record("short", end, Phase::ShortBreak, true),
            record("long", end, Phase::LongBreak, true),
            record("abandoned", end, Phase::Work, false),
        ];
        let stats = Statistics::new(&history);

        assert_eq!(ids(&stats.period_records(1, None, end)), vec!["work"]);
        assert_eq!(ids(&stats.month_records(2025, 2).unwrap()), vec!["work"]);
    }

    #[test]
    fn test_bucket_sums_match_record_count() {
        let history: Vec<SessionRecord> = (0..40)
            .map(|i| work(&format!("r{}", i), ts(2025, 3, 1, 0, 0, 0, 0) + TimeDelta::minutes(i * 317)))
            .collect();

        let hourly = hourly_buckets(&history);
        let daily = daily_buckets(&history);
        assert_eq!(hourly.len(), 24);
        assert_eq!(daily.len(), 7);
        assert_eq!(hourly.iter().map(|b| b.count).sum::<u32>(), 40);
        assert_eq!(daily.iter().map(|b| b.count).sum::<u32>(), 40);
    }

    #[test]
    fn test_bucket_indices() {
        // 2025-03-09 is a Sunday.
        let history = vec![work("sun", ts(2025, 3, 9, 7, 30, 0, 0)), work("mon", ts(2025, 3, 10, 23, 10, 0, 0))];

        let hourly = hourly_buckets(&history);
        assert_eq!(hourly[7].count, 1);
        assert_eq!(hourly[23].count, 1);

        let daily = daily_buckets(&history);
        assert_eq!(daily[0].count, 1);
        assert_eq!(daily[1].count, 1);
        assert!(daily.iter().enumerate().all(|(i, b)| b.index == i as u32));
    }

    #[test]
    fn test_available_months_descending_and_distinct() {
        let history = vec![
            work("a", ts(2024, 11, 3, 10, 0, 0, 0)),
            work("b", ts(2025, 2, 14, 10, 0, 0, 0)),
            work("c", ts(2025, 2, 20, 10, 0, 0, 0)),
            work("d", ts(2024, 12, 31, 10, 0, 0, 0)),
            record("break-only", ts(2023, 6, 1, 10, 0, 0, 0), Phase::ShortBreak, true),
        ];
        let stats = Statistics::new(&history);

        assert_eq!(
            stats.available_months(),
            vec![
                MonthKey { year: 2025, month: 1 },
                MonthKey { year: 2024, month: 11 },
                MonthKey { year: 2024, month: 10 },
            ]
        );
    }

    #[test]
    fn test_current_period_summary_and_focus_time() {
        let now = ts(2025, 3, 10, 14, 0, 0, 0);
        let history = vec![
            work("today", now - TimeDelta::hours(2)),
            work("this-week", now - TimeDelta::days(3)),
            work("this-month", now - TimeDelta::days(20)),
            work("older", now - TimeDelta::days(45)),
        ];
        let stats = Statistics::new(&history);

        let summary = stats.current_period_summary(now);
        assert_eq!((summary.today, summary.week, summary.month), (1, 2, 3));
        assert_eq!(total_focus_time(&history), TimeDelta::minutes(100));
    }

    #[test]
    fn test_huge_period_is_clamped_to_earliest_date() {
        let now = ts(2025, 3, 10, 14, 0, 0, 0);
        let history = vec![work("recent", now - TimeDelta::hours(1)), work("old", ts(1970, 1, 1, 0, 0, 0, 0))];
        let stats = Statistics::new(&history);

        let historical = Window::period(200_000_000, Some(now.date()), now);
        assert_eq!(historical.start, NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(ids(&stats.period_records(200_000_000, Some(now.date()), now)), vec!["old", "recent"]);

        let rolling = Window::period(200_000_000, None, now);
        assert_eq!(rolling.start, NaiveDateTime::MIN);
        assert_eq!(rolling.end, now);
        assert_eq!(ids(&stats.period_records(200_000_000, None, now)), vec!["old", "recent"]);
    }
}
