//! # Pomo - a Pomodoro timer for the terminal
//!
//! Runs focus and break countdowns, records every finished session in a
//! local SQLite database and reports when and how much you focus.
//!
//! ## Layout
//!
//! - [`libs::timer`]: the countdown state machine
//! - [`libs::orchestrator`]: turns completions into session records
//! - [`libs::stats`]: period, month, hourly and weekday aggregation
//! - [`db`]: SQLite persistence for sessions and tasks
//! - [`commands`]: the clap command-line interface
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
