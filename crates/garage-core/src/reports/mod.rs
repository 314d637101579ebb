//! Date-bucketed reports over maintenance records.
//!
//! Both reports share one shape: partition a closed range of calendar units
//! into buckets ([`buckets`]), count the maintenance records falling in each
//! bucket, then map the buckets onto response rows ([`assembler`]).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ReportSource   │    │    buckets      │    │   assembler     │
//! │ (garage + range │───▶│ (one bucket per │───▶│ (rows, garage   │
//! │     lookups)    │    │  day or month)  │    │    metadata)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Report functions take their data source as a parameter. In production
//! that is a [`crate::db::Snapshot`], so all reads of a report see one
//! consistent database state.
//!
//! ```rust
//! use garage_core::{Database, reports};
//! use garage_core::params::GarageInput;
//! use jiff::civil::date;
//!
//! # fn main() -> garage_core::Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! let mut db = Database::new(dir.path().join("garage.db"))?;
//! let garage = db.create_garage(&GarageInput {
//!     name: "North".to_string(),
//!     location: "1 Main St".to_string(),
//!     city: "Springfield".to_string(),
//!     capacity: 5,
//! })?;
//!
//! let snapshot = db.snapshot()?;
//! let report =
//!     reports::daily_availability(&snapshot, garage.id, date(2024, 3, 1), date(2024, 3, 3))?;
//! assert_eq!(report.days.len(), 3);
//! assert!(report.days.iter().all(|day| day.available_capacity == 5));
//! # Ok(())
//! # }
//! ```

use jiff::civil::Date;

use crate::{
    error::Result,
    models::{Garage, Maintenance},
};

pub mod assembler;
pub mod buckets;
pub mod daily;
pub mod monthly;


pub use assembler::{GarageAvailability, MonthlyRequestsRow, YearMonthRow};
pub use buckets::{Bucket, bucket_events};
pub use daily::daily_availability;
pub use monthly::monthly_requests;

/// Read access the reports need from storage.
pub trait ReportSource {
    /// Looks up a garage by ID.
    fn find_garage_by_id(&self, id: u64) -> Result<Option<Garage>>;

    /// All maintenance records of `garage_id` scheduled within
    /// `[start, end]`, both ends inclusive.
    fn find_maintenances_by_garage_and_date_range(
        &self,
        garage_id: u64,
        start: Date,
        end: Date,
    ) -> Result<Vec<Maintenance>>;
}
