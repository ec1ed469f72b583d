//! Writes session history and the task list to CSV or JSON files.

use crate::libs::formatter::format_duration;
use crate::libs::record::{format_timestamp, SessionRecord};
use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Every recorded session
    Sessions,
    /// The task list
    Tasks,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after the data kind and
    /// the current time, e.g. `pomo_sessions_20250314_101500.csv`.
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        let kind = match data {
            ExportData::Sessions => "sessions",
            ExportData::Tasks => "tasks",
        };
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path =
            output_path.unwrap_or_else(|| PathBuf::from(format!("pomo_{}_{}.{}", kind, Local::now().format("%Y%m%d_%H%M%S"), extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_sessions(&self, records: &[SessionRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(records),
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["id", "task_id", "task_title", "phase", "start_time", "end_time", "duration", "completed"])?;
                for record in records {
                    wtr.write_record([
                        record.id.as_str(),
                        record.task_id.as_deref().unwrap_or(""),
                        record.task_title.as_str(),
                        record.phase.as_str(),
                        format_timestamp(&record.start_time).as_str(),
                        format_timestamp(&record.end_time).as_str(),
                        format_duration(&record.duration()).as_str(),
                        if record.completed { "true" } else { "false" },
                    ])?;
                }
                wtr.flush()?;
                Ok(())
            }
        }
    }

    pub fn export_tasks(&self, tasks: &[Task]) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(tasks),
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["id", "title", "description", "due_date", "priority", "completed", "pomodoros"])?;
                for task in tasks {
                    wtr.write_record([
                        task.id.clone(),
                        task.title.clone(),
                        task.description.clone(),
                        task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                        task.priority.to_string(),
                        task.completed.to_string(),
                        task.total_pomodoros.to_string(),
                    ])?;
                }
                wtr.flush()?;
                Ok(())
            }
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, value)?;
        Ok(())
    }
}
