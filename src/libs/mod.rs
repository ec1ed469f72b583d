//! Core library modules.
//!
//! The timer core (`settings`, `record`, `timer`, `stats`, `orchestrator`,
//! `runner`) has no knowledge of the terminal or the database layout. The
//! remaining modules provide configuration, messaging and rendering for the
//! command-line front end.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod orchestrator;
pub mod record;
pub mod runner;
pub mod settings;
pub mod stats;
pub mod task;
pub mod timer;
pub mod view;
