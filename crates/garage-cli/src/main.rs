//! Garage CLI Application
//!
//! Command-line and HTTP interface for the garage maintenance scheduler.

mod args;
mod cli;
mod http;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use garage_core::{GarageServiceBuilder, params::ListGarages};
use http::ServeConfig;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let service = GarageServiceBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize garage service")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Using database {}", service.database_path().display());

    match command {
        Some(Garage { command }) => {
            Cli::new(service, renderer)
                .handle_garage_command(command)
                .await
        }
        Some(Car { command }) => Cli::new(service, renderer).handle_car_command(command).await,
        Some(Maintenance { command }) => {
            Cli::new(service, renderer)
                .handle_maintenance_command(command)
                .await
        }
        Some(Report { command }) => {
            Cli::new(service, renderer)
                .handle_report_command(command)
                .await
        }
        Some(Serve { bind, cors_origins }) => {
            http::serve(service, ServeConfig { bind, cors_origins })
                .await
                .context("HTTP server failed")
        }
        None => {
            Cli::new(service, renderer)
                .list_garages(ListGarages::default())
                .await
        }
    }
}
