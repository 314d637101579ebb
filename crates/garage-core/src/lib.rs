//! Core library for the garage management application.
//!
//! This crate owns everything below the user-facing surfaces: the SQLite
//! storage of garages, cars and maintenance records, the calendar
//! arithmetic, the daily availability and monthly request reports, and the
//! async [`GarageService`] that the CLI and the HTTP server both call.
//!
//! # Layout
//!
//! - [`calendar`]: leap years, month lengths, year-month values and the
//!   [`calendar::CalendarUnit`] abstraction the reports bucket over
//! - [`reports`]: date-bucketed report computations over a
//!   [`reports::ReportSource`]
//! - [`db`]: SQLite persistence and read snapshots
//! - [`service`]: async facade used by the binaries
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use garage_core::{GarageServiceBuilder, params::{DailyReport, GarageInput}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = GarageServiceBuilder::new()
//!     .with_database_path(Some("garage.db"))
//!     .build()
//!     .await?;
//!
//! let garage = service
//!     .create_garage(&GarageInput {
//!         name: "North".to_string(),
//!         location: "1 Main St".to_string(),
//!         city: "Springfield".to_string(),
//!         capacity: 5,
//!     })
//!     .await?;
//!
//! let report = service
//!     .daily_availability_report(&DailyReport {
//!         garage_id: garage.id,
//!         start_date: "2024-03-01".to_string(),
//!         end_date: "2024-03-07".to_string(),
//!     })
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod reports;
pub mod service;

// Re-export commonly used types
pub use calendar::YearMonth;
pub use db::{Database, Snapshot};
pub use display::{
    Cars, CreateResult, DeleteResult, Garages, Maintenances, MonthlyRequestsReport, UpdateResult,
};
pub use error::{GarageError, Result};
pub use models::{
    Car, DailyAvailability, Garage, Maintenance, MaintenanceDetails, MonthlyRequests,
};
pub use reports::{GarageAvailability, MonthlyRequestsRow, ReportSource};
pub use service::{GarageService, GarageServiceBuilder};
