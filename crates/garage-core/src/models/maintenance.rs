//! Maintenance record definitions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A maintenance visit of one car at one garage on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    /// Unique identifier for the maintenance record
    pub id: u64,

    /// Car being serviced
    pub car_id: u64,

    /// Garage performing the service
    pub garage_id: u64,

    /// Free-form service label, e.g. "Oil change"
    pub service_type: String,

    /// Day the visit is scheduled for
    pub scheduled_date: Date,
}

/// A maintenance record joined with the names of its car and garage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceDetails {
    pub id: u64,
    pub car_id: u64,
    /// "make model" of the car
    pub car_name: String,
    pub service_type: String,
    pub scheduled_date: Date,
    pub garage_id: u64,
    pub garage_name: String,
}
