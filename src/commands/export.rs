use crate::{
    db::{records::Records, store::RecordStore, tasks::Tasks},
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        task::TaskFilter,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "sessions")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingData(format!("{:?}", args.format).to_lowercase()));
    let exporter = Exporter::new(args.format, args.data, args.output);

    match args.data {
        ExportData::Sessions => {
            let mut records = Records::new()?.list_all()?;
            if records.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            records.sort_by(|a, b| a.end_time.cmp(&b.end_time));
            exporter.export_sessions(&records)?;
        }
        ExportData::Tasks => {
            let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
            if tasks.is_empty() {
                msg_info!(Message::NoDataToExport);
                return Ok(());
            }
            exporter.export_tasks(&tasks)?;
        }
    }

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
