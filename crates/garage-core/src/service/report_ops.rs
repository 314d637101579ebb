//! Report operations for the GarageService.
//!
//! Each report runs inside its own read snapshot, released when the
//! computation returns.

use super::GarageService;
use crate::{
    error::Result,
    models::MonthlyRequests,
    params::{DailyReport, MonthlyReport},
    reports::{self, GarageAvailability},
};

impl GarageService {
    /// Requests and remaining capacity of a garage for every day of a range.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidFormat` - When a date is not `YYYY-MM-DD`
    /// * `GarageError::InvalidRange` - When the start date is after the end date
    /// * `GarageError::GarageNotFound` - When the garage does not exist
    pub async fn daily_availability_report(&self, params: &DailyReport) -> Result<GarageAvailability> {
        let (start, end) = params.validate()?;
        let garage_id = params.garage_id;

        self.with_database(move |db| {
            let snapshot = db.snapshot()?;
            reports::daily_availability(&snapshot, garage_id, start, end)
        })
        .await
    }

    /// Maintenance requests of a garage for every month of a range.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidFormat` - When a month is not `YYYY-MM`
    /// * `GarageError::InvalidRange` - When the start month is after the end month
    pub async fn monthly_requests_report(&self, params: &MonthlyReport) -> Result<Vec<MonthlyRequests>> {
        let (start, end) = params.validate()?;
        let garage_id = params.garage_id;

        self.with_database(move |db| {
            let snapshot = db.snapshot()?;
            reports::monthly_requests(&snapshot, garage_id, start, end)
        })
        .await
    }
}
