//! Data models for garages, cars and maintenance records.
//!
//! Persisted entities ([`Garage`], [`Car`], [`Maintenance`]) mirror the
//! SQLite schema. [`MaintenanceDetails`] is the joined read model returned to
//! callers, and the types in [`report`] are derived values computed by
//! [`crate::reports`]. Display implementations live in
//! [`crate::display::models`].
//!
//! All wire-facing types serialize with camelCase field names:
//!
//! ```rust
//! use garage_core::models::DailyAvailability;
//! use jiff::civil::date;
//!
//! let day = DailyAvailability::new(date(2024, 3, 2), 1, 5);
//! let json = serde_json::to_string(&day).unwrap();
//! assert_eq!(json, r#"{"date":"2024-03-02","requests":1,"availableCapacity":4}"#);
//! ```

pub mod car;
pub mod filters;
pub mod garage;
pub mod maintenance;
pub mod report;


pub use car::Car;
pub use filters::{CarFilter, GarageFilter, MaintenanceFilter};
pub use garage::Garage;
pub use maintenance::{Maintenance, MaintenanceDetails};
pub use report::{DailyAvailability, MonthlyRequests};
