//! Parameter structures for garage operations
//!
//! These structures are shared by every interface (CLI, HTTP) and carry no
//! framework-specific derives beyond serde. Field names use camelCase on the
//! wire so the HTTP layer can deserialize query strings and JSON bodies
//! straight into them; the CLI builds them from its clap argument structs.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  HTTP Query /   │    │  Core Params    │
//! │  (clap derives) │───▶│   JSON bodies   │───▶│ (serde derives) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates and months arrive as strings and are parsed by the `validate`
//! methods, so malformed input surfaces as
//! [`GarageError::InvalidFormat`](crate::GarageError::InvalidFormat) no
//! matter which interface supplied it.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{self, YearMonth},
    error::{GarageError, Result},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Fields of a garage, used for both creation and full replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GarageInput {
    pub name: String,
    pub location: String,
    pub city: String,
    /// Daily capacity
    pub capacity: u32,
}

impl GarageInput {
    /// Rejects blank names.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GarageError::invalid_input("name").with_reason("Name must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for listing garages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListGarages {
    /// Case-insensitive substring of the city name
    pub city: Option<String>,
}

/// Fields of a car, used for both creation and full replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    pub make: String,
    pub model: String,
    pub production_year: i32,
    #[serde(default)]
    pub license_plate: Option<String>,
    /// Garages to associate the car with; replaces any existing associations
    #[serde(default)]
    pub garage_ids: Vec<u64>,
}

impl CarInput {
    /// Normalizes the license plate: surrounding whitespace is dropped and a
    /// blank plate counts as no plate.
    pub fn license_plate(&self) -> Option<&str> {
        self.license_plate
            .as_deref()
            .map(str::trim)
            .filter(|plate| !plate.is_empty())
    }
}

/// Parameters for listing cars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCars {
    /// Case-insensitive substring of the make
    pub car_make: Option<String>,
    /// Only cars associated with this garage
    pub garage_id: Option<u64>,
    /// Minimum production year, inclusive
    pub from_year: Option<i32>,
    /// Maximum production year, inclusive
    pub to_year: Option<i32>,
}

/// Fields of a maintenance record, used for both creation and replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceInput {
    pub garage_id: u64,
    pub car_id: u64,
    pub service_type: String,
    /// `YYYY-MM-DD`
    pub scheduled_date: String,
}

impl MaintenanceInput {
    /// Parses the scheduled date.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidFormat` - When the date is not `YYYY-MM-DD`
    pub fn validate(&self) -> Result<Date> {
        calendar::parse_date("scheduledDate", &self.scheduled_date)
    }
}

/// Parameters for listing maintenance records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMaintenances {
    pub car_id: Option<u64>,
    pub garage_id: Option<u64>,
    /// Earliest scheduled date, inclusive, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Latest scheduled date, inclusive, `YYYY-MM-DD`
    pub end_date: Option<String>,
}

/// Parameters for the daily availability report of a garage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub garage_id: u64,
    /// First day of the report, inclusive, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day of the report, inclusive, `YYYY-MM-DD`
    pub end_date: String,
}

impl DailyReport {
    /// Parses both boundaries. Ordering is checked by the report itself.
    pub fn validate(&self) -> Result<(Date, Date)> {
        let start = calendar::parse_date("startDate", &self.start_date)?;
        let end = calendar::parse_date("endDate", &self.end_date)?;
        Ok((start, end))
    }
}

/// Parameters for the monthly maintenance-request report of a garage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub garage_id: u64,
    /// First month of the report, inclusive, `YYYY-MM`
    pub start_month: String,
    /// Last month of the report, inclusive, `YYYY-MM`
    pub end_month: String,
}

impl MonthlyReport {
    /// Parses both boundaries. Ordering is checked by the report itself.
    pub fn validate(&self) -> Result<(YearMonth, YearMonth)> {
        let start = YearMonth::parse_field("startMonth", &self.start_month)?;
        let end = YearMonth::parse_field("endMonth", &self.end_month)?;
        Ok((start, end))
    }
}
