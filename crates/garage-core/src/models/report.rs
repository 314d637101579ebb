//! Derived report values. Nothing here is persisted.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;

/// Requests and remaining capacity of a garage on a single day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyAvailability {
    pub date: Date,
    pub requests: u32,
    pub available_capacity: u32,
}

impl DailyAvailability {
    /// Builds a day entry; available capacity saturates at zero when the
    /// garage is overbooked.
    pub fn new(date: Date, requests: u32, capacity: u32) -> Self {
        Self {
            date,
            requests,
            available_capacity: capacity.saturating_sub(requests),
        }
    }
}

/// Number of maintenance requests a garage received in one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRequests {
    pub year_month: YearMonth,
    pub requests: u32,
}
