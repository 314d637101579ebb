use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::cli::{CarCommands, GarageCommands, MaintenanceCommands, ReportCommands};

/// Garage maintenance scheduling tool
///
/// Keeps track of garages, the cars registered with them and the
/// maintenance visits scheduled at each garage, and reports daily capacity
/// and monthly demand per garage. Everything is available from the command
/// line or, with `serve`, as a JSON HTTP API.
#[derive(Parser)]
#[command(version, about, name = "garage")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/garage/garage.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the garage CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage garages
    #[command(alias = "g")]
    Garage {
        #[command(subcommand)]
        command: GarageCommands,
    },
    /// Manage cars
    #[command(alias = "c")]
    Car {
        #[command(subcommand)]
        command: CarCommands,
    },
    /// Manage scheduled maintenance
    #[command(alias = "m")]
    Maintenance {
        #[command(subcommand)]
        command: MaintenanceCommands,
    },
    /// Daily availability and monthly request reports
    #[command(alias = "r")]
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Start the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: SocketAddr,

        /// Browser origin allowed to call the API; repeat for several
        #[arg(long = "cors-origin", default_value = "http://localhost:3000")]
        cors_origins: Vec<String>,
    },
}
