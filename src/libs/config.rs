//! User configuration stored as JSON in the data directory.
//!
//! The file holds the timer settings and the id of the task that new work
//! sessions are booked against. A missing file is not an error; defaults
//! apply until `pomo init` or `pomo settings` writes one.
//!
//! ```json
//! {
//!   "pomodoro": {
//!     "workMinutes": 25,
//!     "shortBreakMinutes": 5,
//!     "longBreakMinutes": 15,
//!     "longBreakInterval": 4
//!   },
//!   "active_task": "5f0c..."
//! }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::settings::{
    Settings, LONG_BREAK_INTERVAL_RANGE, LONG_BREAK_MINUTES_RANGE, SHORT_BREAK_MINUTES_RANGE, WORK_MINUTES_RANGE,
};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::ops::RangeInclusive;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pomodoro: Option<Settings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_task: Option<String>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective timer settings.
    ///
    /// A hand-edited file with out-of-range values is rejected here rather
    /// than handed to the timer.
    pub fn settings(&self) -> Result<Settings> {
        let settings = self.pomodoro.unwrap_or_default();
        settings.validate()?;
        Ok(settings)
    }

    /// Interactive setup wizard. Every value is re-prompted until it lies
    /// within its bounds.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.pomodoro.unwrap_or_default();

        msg_print!(Message::ConfigModuleTimer);
        let settings = Settings::new(
            prompt_minutes(Message::PromptWorkMinutes, default.work_minutes, WORK_MINUTES_RANGE)?,
            prompt_minutes(Message::PromptShortBreakMinutes, default.short_break_minutes, SHORT_BREAK_MINUTES_RANGE)?,
            prompt_minutes(Message::PromptLongBreakMinutes, default.long_break_minutes, LONG_BREAK_MINUTES_RANGE)?,
            prompt_minutes(Message::PromptLongBreakInterval, default.long_break_interval, LONG_BREAK_INTERVAL_RANGE)?,
        )?;
        config.pomodoro = Some(settings);

        Ok(config)
    }
}

fn prompt_minutes(prompt: Message, default: u32, range: RangeInclusive<u32>) -> Result<u32> {
    let value = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} ({}-{})", prompt, range.start(), range.end()))
        .default(default)
        .validate_with(|input: &u32| -> std::result::Result<(), String> {
            if range.contains(input) {
                Ok(())
            } else {
                Err(Message::ValueOutOfRange(*range.start(), *range.end()).to_string())
            }
        })
        .interact_text()?;
    Ok(value)
}
