//! Daily availability report.

use jiff::civil::Date;
use log::debug;

use super::{ReportSource, assembler::GarageAvailability, buckets::bucket_events};
use crate::error::{GarageError, Result};

/// Requests and remaining capacity of a garage for every day in
/// `[start, end]`, ascending.
///
/// # Errors
///
/// * `GarageError::InvalidRange` - When `start` is after `end`
/// * `GarageError::GarageNotFound` - When the garage does not exist
pub fn daily_availability<S>(
    source: &S,
    garage_id: u64,
    start: Date,
    end: Date,
) -> Result<GarageAvailability>
where
    S: ReportSource + ?Sized,
{
    if start > end {
        return Err(GarageError::invalid_range(start, end));
    }

    let garage = source
        .find_garage_by_id(garage_id)?
        .ok_or(GarageError::GarageNotFound { id: garage_id })?;

    let scheduled = source.find_maintenances_by_garage_and_date_range(garage_id, start, end)?;
    debug!(
        "Daily availability for garage {garage_id} from {start} to {end}: {} requests",
        scheduled.len()
    );

    let buckets = bucket_events(start, end, scheduled.iter().map(|m| m.scheduled_date))?;
    Ok(GarageAvailability::assemble(garage, buckets))
}
