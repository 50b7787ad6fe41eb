//! iPhone detector CLI - Command-line interface
//!
//! Classifies a described display environment against the known iPhone
//! signatures and can watch it react to resize events.

mod commands;
mod error;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use iphone_detector::config::DEFAULT_QUIET_WINDOW_MS;

use commands::common::EnvironmentArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "iphone-detector", version, about = "Identify iPhone models from display properties")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify an environment once and print the report
    Report {
        #[command(flatten)]
        env: EnvironmentArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every known device signature
    Models,

    /// Start the detector and apply resize lines read from stdin
    Watch {
        #[command(flatten)]
        env: EnvironmentArgs,

        /// Quiet window before a resize burst is considered settled
        #[arg(long, default_value_t = DEFAULT_QUIET_WINDOW_MS)]
        quiet_window_ms: u64,
    },

    /// Save an environment profile (defaults to the user config directory)
    Profile {
        #[command(flatten)]
        env: EnvironmentArgs,

        /// Destination file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Report { env, json } => commands::report::run(&env, json),
        Command::Models => commands::models::run(),
        Command::Watch {
            env,
            quiet_window_ms,
        } => commands::watch::run(&env, quiet_window_ms),
        Command::Profile { env, output } => commands::profile::run(&env, output),
    }
}

fn main() {
    let cli = Cli::parse();
    iphone_detector::logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use iphone_detector::DeviceModel;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_with_model() {
        let cli = Cli::parse_from(["iphone-detector", "report", "--model", "XI_Pro_Max", "--json"]);
        match cli.command {
            Command::Report { env, json } => {
                assert_eq!(env.model, Some(DeviceModel::XIProMax));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_watch_default_window() {
        let cli = Cli::parse_from(["iphone-detector", "-v", "watch"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Watch {
                quiet_window_ms, ..
            } => assert_eq!(quiet_window_ms, DEFAULT_QUIET_WINDOW_MS),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_landscape_requires_model() {
        assert!(Cli::try_parse_from(["iphone-detector", "report", "--landscape"]).is_err());
    }
}
