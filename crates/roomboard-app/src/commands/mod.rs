//! CLI subcommand implementations.

pub mod board;
pub mod config;
pub mod message;
pub mod watch;
