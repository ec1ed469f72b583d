//! Command-line interface.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` entry point; [`Cli::menu`] parses the arguments and dispatches.

pub mod export;
pub mod history;
pub mod init;
pub mod settings;
pub mod start;
pub mod stats;
pub mod task;

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure timer durations")]
    Init(init::InitArgs),
    #[command(about = "Show or change timer settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Run the Pomodoro timer")]
    Start(start::StartArgs),
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Show focus statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "List recorded sessions")]
    History(history::HistoryArgs),
    #[command(about = "Export sessions or tasks to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Start(args) => start::cmd(args).await,
            Commands::Task(args) => task::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Accepts `today` or `YYYY-MM-DD`.
pub fn parse_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date("2024-02-29", today).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("29.02.2024", today).is_err());
    }

    #[test]
    fn test_stats_days_is_bounded() {
        assert!(Cli::try_parse_from(["pomo", "stats", "--days", "30"]).is_ok());
        assert!(Cli::try_parse_from(["pomo", "stats", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "stats", "--days", "200000000"]).is_err());
    }
}
