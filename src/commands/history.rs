use crate::{
    db::records::Records,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of sessions to show, newest first
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let records = Records::new()?.recent(args.limit)?;
    if records.is_empty() {
        msg_info!(Message::NoRecords);
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(records.len()), true);
    View::records(&records);
    Ok(())
}
