//! RouteSheet CLI - Command-line interface
//!
//! Resolves a destination address from a starting coordinate and prints the
//! route overlay and summary card the route screen would show.

mod commands;
mod console;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use routesheet::config::{config_file_path, ConfigFile};
use routesheet::coord::Coordinate;
use routesheet::logging::{default_log_dir, init_logging, DEFAULT_LOG_FILE};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "routesheet")]
#[command(version, about = "Resolve a destination into a driving route", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a destination address and present the route
    Route {
        /// Starting position as LAT,LON in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,

        /// Destination address (free text)
        #[arg(long)]
        to: String,

        /// Config file (defaults to ~/.routesheet/config.ini)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Config file (defaults to ~/.routesheet/config.ini)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Format a distance and duration like the summary card
    FormatSummary {
        /// Distance in meters
        #[arg(long)]
        distance: f64,

        /// Duration in seconds
        #[arg(long)]
        duration: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Route { from, to, config } => run_route(from, &to, config),
        Commands::Init { force, config } => {
            commands::init::run(&config.unwrap_or_else(config_file_path), force)
        }
        Commands::FormatSummary { distance, duration } => {
            commands::format::run(distance, duration);
            Ok(())
        }
    };

    if let Err(e) = result {
        e.exit();
    }
}

fn run_route(from: Coordinate, to: &str, config: Option<PathBuf>) -> Result<(), CliError> {
    let config = ConfigFile::load_from(&config.unwrap_or_else(config_file_path))?;
    let _logging = init_logging(&default_log_dir(), DEFAULT_LOG_FILE)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;
    commands::route::run(&config, from, to)
}
