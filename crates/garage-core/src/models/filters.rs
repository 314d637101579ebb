//! Filter types for querying garages, cars and maintenance records.

use jiff::civil::Date;

use crate::{
    calendar,
    error::Result,
    params::{ListCars, ListGarages, ListMaintenances},
};

/// Filter options for querying garages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GarageFilter {
    /// Filter by city (case-insensitive partial match)
    pub city_contains: Option<String>,
}

impl From<&ListGarages> for GarageFilter {
    fn from(params: &ListGarages) -> Self {
        Self {
            city_contains: params.city.clone().filter(|city| !city.is_empty()),
        }
    }
}

/// Filter options for querying cars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    /// Filter by make (case-insensitive partial match)
    pub make_contains: Option<String>,

    /// Only cars associated with this garage
    pub garage_id: Option<u64>,

    /// Filter by production year range, both ends inclusive
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

impl From<&ListCars> for CarFilter {
    fn from(params: &ListCars) -> Self {
        Self {
            make_contains: params.car_make.clone().filter(|make| !make.is_empty()),
            garage_id: params.garage_id,
            from_year: params.from_year,
            to_year: params.to_year,
        }
    }
}

/// Filter options for querying maintenance records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceFilter {
    pub car_id: Option<u64>,
    pub garage_id: Option<u64>,

    /// Filter by scheduled date range, both ends inclusive
    pub scheduled_from: Option<Date>,
    pub scheduled_to: Option<Date>,
}

impl MaintenanceFilter {
    /// Filter for one garage's records within `[start, end]`.
    pub fn for_garage_between(garage_id: u64, start: Date, end: Date) -> Self {
        Self {
            garage_id: Some(garage_id),
            scheduled_from: Some(start),
            scheduled_to: Some(end),
            ..Default::default()
        }
    }
}

impl TryFrom<&ListMaintenances> for MaintenanceFilter {
    type Error = crate::GarageError;

    /// Parses the optional date bounds; a malformed bound is an
    /// `InvalidFormat` error rather than being ignored.
    fn try_from(params: &ListMaintenances) -> Result<Self> {
        let scheduled_from = params
            .start_date
            .as_deref()
            .map(|value| calendar::parse_date("startDate", value))
            .transpose()?;
        let scheduled_to = params
            .end_date
            .as_deref()
            .map(|value| calendar::parse_date("endDate", value))
            .transpose()?;

        Ok(Self {
            car_id: params.car_id,
            garage_id: params.garage_id,
            scheduled_from,
            scheduled_to,
        })
    }
}
