//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use roomboard_core::OutputFormat;

/// roomboard - Room availability at a glance
#[derive(Debug, Parser)]
#[command(name = "roomboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ROOMBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Base URL of the booking backend (overrides the config file)
    #[arg(long, env = "ROOMBOARD_SERVER")]
    pub server: Option<String>,

    /// Output the board in JSON format
    #[arg(long)]
    pub json: bool,

    /// Date to view (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Follow the board interactively (date navigation, info, messages)
    Watch,

    /// Fetch a single message by identifier
    Message {
        /// The message identifier
        id: String,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump the current configuration to stdout
    Dump,
    /// Show the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tty_board() {
        let cli = Cli::parse_from(["roomboard"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.output_format(), OutputFormat::Tty);
        assert!(cli.date.is_none());
    }

    #[test]
    fn json_flag_switches_output() {
        let cli = Cli::parse_from(["roomboard", "--json"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn date_parses_iso() {
        let cli = Cli::parse_from(["roomboard", "--date", "2024-03-07"]);
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 3, 7));
    }

    #[test]
    fn message_subcommand_carries_id() {
        let cli = Cli::parse_from(["roomboard", "message", "42"]);
        match cli.command {
            Some(Command::Message { ref id }) => assert_eq!(id, "42"),
            _ => panic!("expected message subcommand"),
        }
    }
}
