use super::parse_date;
use crate::{
    db::{records::Records, store::RecordStore},
    libs::{
        formatter::{format_duration, month_label},
        messages::Message,
        record::SessionRecord,
        stats::{daily_buckets, hourly_buckets, total_focus_time, MonthKey, Statistics},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// A hundred years of history.
const MAX_PERIOD_DAYS: i64 = 36_500;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Length of the period in days
    #[arg(short, long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=MAX_PERIOD_DAYS))]
    days: u32,

    /// Count whole days up to this date (YYYY-MM-DD or 'today') instead of a rolling window
    #[arg(long)]
    date: Option<String>,

    /// A calendar month, YYYY-MM
    #[arg(short, long, conflicts_with_all = ["days", "date"])]
    month: Option<String>,

    /// List the months that have recorded sessions
    #[arg(long, conflicts_with_all = ["days", "date", "month"])]
    months: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let history = Records::new()?.list_all()?;
    let stats = Statistics::new(&history);
    let now = Local::now().naive_local();

    if args.months {
        let months = stats.available_months();
        if months.is_empty() {
            msg_info!(Message::NoSessionsRecorded);
        } else {
            msg_print!(Message::AvailableMonthsHeader, true);
            View::months(&months);
        }
        return Ok(());
    }

    let records: Vec<&SessionRecord> = match &args.month {
        Some(month) => {
            let key = MonthKey::parse(month).map_err(|_| msg_error_anyhow!(Message::InvalidMonthFormat(month.clone())))?;
            msg_print!(Message::StatsMonthHeader(month_label(key.year, key.month)), true);
            stats.month_records(key.year, key.month)?
        }
        None => {
            let reference = args.date.as_deref().map(|d| parse_date(d, now.date())).transpose()?;
            match reference {
                Some(date) => msg_print!(Message::StatsHistoricalHeader(args.days, date.to_string()), true),
                None => {
                    msg_print!(Message::CurrentPeriodHeader, true);
                    View::summary(&stats.current_period_summary(now));
                    msg_print!(Message::StatsRollingHeader(args.days), true);
                }
            }
            stats.period_records(args.days, reference, now)
        }
    };

    if records.is_empty() {
        msg_info!(Message::NoSessionsInPeriod);
        return Ok(());
    }

    msg_print!(Message::StatsSummary(records.len(), format_duration(&total_focus_time(&records))));
    msg_print!(Message::HourlyHeader, true);
    View::hourly(&hourly_buckets(&records));
    msg_print!(Message::DailyHeader, true);
    View::daily(&daily_buckets(&records));

    Ok(())
}
