//! Small terminal tool for logging the tasks you worked on during the day.
//! Every task is stored as one row in a local SQLite database, and the rows of the current day
//! can be printed back as a table with computed durations.
//!

pub mod cli;
pub mod config;
pub mod storage;
pub mod tasks;
pub mod utils;
