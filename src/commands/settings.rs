use crate::{
    libs::{config::Config, messages::Message, settings::Settings, view::View},
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Focus length in minutes (1-60)
    #[arg(short, long)]
    work: Option<u32>,

    /// Short break length in minutes (1-30)
    #[arg(short, long)]
    short: Option<u32>,

    /// Long break length in minutes (1-60)
    #[arg(short, long)]
    long: Option<u32>,

    /// Focus sessions before a long break (2-10)
    #[arg(short, long)]
    interval: Option<u32>,
}

impl SettingsArgs {
    fn is_empty(&self) -> bool {
        self.work.is_none() && self.short.is_none() && self.long.is_none() && self.interval.is_none()
    }

    /// Applies the given values over `current`, validating the result.
    fn merge(&self, current: Settings) -> Result<Settings> {
        let merged = Settings::new(
            self.work.unwrap_or(current.work_minutes),
            self.short.unwrap_or(current.short_break_minutes),
            self.long.unwrap_or(current.long_break_minutes),
            self.interval.unwrap_or(current.long_break_interval),
        );
        match merged {
            Ok(settings) => Ok(settings),
            Err(e) => msg_bail_anyhow!(Message::SettingsRejected(e.to_string())),
        }
    }
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut config = Config::read()?;

    if args.is_empty() {
        msg_print!(Message::SettingsHeader);
        View::settings(&config.settings()?);
        return Ok(());
    }

    let current = config.pomodoro.unwrap_or_default();
    let settings = args.merge(current)?;
    config.pomodoro = Some(settings);
    config.save()?;

    View::settings(&settings);
    msg_success!(Message::SettingsUpdated);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(work: Option<u32>, interval: Option<u32>) -> SettingsArgs {
        SettingsArgs {
            work,
            short: None,
            long: None,
            interval,
        }
    }

    #[test]
    fn test_merge_keeps_unspecified_values() {
        let merged = args(Some(50), None).merge(Settings::default()).unwrap();
        assert_eq!(merged.work_minutes, 50);
        assert_eq!(merged.short_break_minutes, 5);
        assert_eq!(merged.long_break_interval, 4);
    }

    #[test]
    fn test_merge_rejects_out_of_range() {
        assert!(args(Some(61), None).merge(Settings::default()).is_err());
        assert!(args(None, Some(1)).merge(Settings::default()).is_err());
    }
}
