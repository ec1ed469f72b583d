//! SQLite persistence.
//!
//! One database file in the data directory holds the task list and the
//! session history. [`db::Db`] opens it and brings the schema up to date via
//! [`migrations`]; [`records::Records`] and [`tasks::Tasks`] wrap the
//! connection for their table. [`store::RecordStore`] is the contract the
//! session orchestrator writes through, with an in-memory implementation for
//! tests and embedding.

pub mod db;
pub mod migrations;
pub mod records;
pub mod store;
pub mod tasks;
