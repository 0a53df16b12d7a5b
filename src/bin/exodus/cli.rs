use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Converter between Earth time and the Mars calendar.
#[derive(Parser)]
#[command(name = "exodus", version, about = "Earth / Mars calendar converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Read and show Mars time of day in Mars seconds (MTC).
    #[arg(long, global = true)]
    pub mtc: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; prints the current instant when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert an Earth datetime with offset to a Mars timestamp.
    ToMars {
        /// Earth datetime, e.g. '2025-01-01 00:00:01+00:00'.
        #[arg(allow_hyphen_values = true)]
        earth: String,
    },
    /// Convert a Mars timestamp to an Earth datetime in UTC.
    ToEarth {
        /// Mars timestamp, e.g. '0030-03-51 12:26:45.556'.
        #[arg(allow_hyphen_values = true)]
        mars: String,
    },
    /// Show the current instant on Earth and on Mars.
    Now,
    /// Milliseconds from one Mars timestamp to another.
    Delta {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end:   String,
    },
    /// Shift a Mars timestamp by a number of milliseconds.
    Add {
        #[arg(allow_hyphen_values = true)]
        timestamp: String,
        #[arg(allow_hyphen_values = true)]
        delta:     i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["exodus", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
        assert!(!cli.mtc);
    }

    #[test]
    fn test_negative_arguments() {
        let cli = Cli::try_parse_from(["exodus", "--mtc", "add", "-0001-12-54 00:00:00.000", "-1000"])
            .unwrap();
        assert!(cli.mtc);
        match cli.command {
            Some(Command::Add { timestamp, delta }) => {
                assert_eq!(timestamp, "-0001-12-54 00:00:00.000");
                assert_eq!(delta, -1000);
            },
            _ => panic!("expected add"),
        }
    }
}
