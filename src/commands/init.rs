use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default durations without prompting
    #[arg(short, long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults {
        Config {
            pomodoro: Some(Default::default()),
            ..Config::read().unwrap_or_default()
        }
    } else {
        Config::init()?
    };
    config.save()?;

    View::settings(&config.settings()?);
    msg_success!(Message::ConfigSaved);
    Ok(())
}
