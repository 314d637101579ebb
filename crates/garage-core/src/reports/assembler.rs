//! Maps report buckets onto response rows.
//!
//! No arithmetic happens here beyond field mapping. The two-digit month code
//! of the monthly report (`"01"` through `"12"`) exists only at this boundary;
//! everywhere else a month is a plain integer.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::buckets::Bucket;
use crate::{
    calendar::YearMonth,
    models::{DailyAvailability, Garage, MonthlyRequests},
};

/// Daily availability of a garage, with the garage it was computed for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GarageAvailability {
    pub garage: Garage,
    pub days: Vec<DailyAvailability>,
}

impl GarageAvailability {
    /// Attaches the garage's capacity to each day bucket.
    pub fn assemble(garage: Garage, buckets: Vec<Bucket<Date>>) -> Self {
        let days = buckets
            .into_iter()
            .map(|bucket| DailyAvailability::new(bucket.unit, bucket.count, garage.capacity))
            .collect();
        Self { garage, days }
    }
}

/// Converts month buckets into monthly request counts.
pub fn monthly_counts(buckets: Vec<Bucket<YearMonth>>) -> Vec<MonthlyRequests> {
    buckets
        .into_iter()
        .map(|bucket| MonthlyRequests {
            year_month: bucket.unit,
            requests: bucket.count,
        })
        .collect()
}

/// Two-digit code of a month number, e.g. `3` → `"03"`.
pub fn month_code(month: i8) -> String {
    format!("{month:02}")
}

/// Year-month as it appears in a monthly report row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearMonthRow {
    pub year: i16,
    /// Two-digit month code, `"01"` through `"12"`
    pub month: String,
    pub leap_year: bool,
    pub month_value: i8,
}

impl From<YearMonth> for YearMonthRow {
    fn from(year_month: YearMonth) -> Self {
        Self {
            year: year_month.year(),
            month: month_code(year_month.month()),
            leap_year: year_month.is_leap_year(),
            month_value: year_month.month(),
        }
    }
}

/// One row of the monthly maintenance-request report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRequestsRow {
    pub year_month: YearMonthRow,
    pub requests: u32,
}

impl From<&MonthlyRequests> for MonthlyRequestsRow {
    fn from(entry: &MonthlyRequests) -> Self {
        Self {
            year_month: entry.year_month.into(),
            requests: entry.requests,
        }
    }
}

impl MonthlyRequestsRow {
    /// Rows for a whole report, preserving order.
    pub fn from_report(report: &[MonthlyRequests]) -> Vec<Self> {
        report.iter().map(Self::from).collect()
    }
}
