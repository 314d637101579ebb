//! Monthly maintenance-request report.

use log::debug;

use super::{ReportSource, assembler, buckets::bucket_events};
use crate::{
    calendar::YearMonth,
    error::{GarageError, Result},
    models::MonthlyRequests,
};

/// Number of maintenance requests of a garage for every month in
/// `[start, end]`, ascending.
///
/// The underlying query spans from the first day of `start` through the last
/// day of `end`, so requests late in the final month are counted. The garage
/// itself is not looked up; an unknown garage yields zero counts.
///
/// # Errors
///
/// * `GarageError::InvalidRange` - When `start` is after `end`
pub fn monthly_requests<S>(
    source: &S,
    garage_id: u64,
    start: YearMonth,
    end: YearMonth,
) -> Result<Vec<MonthlyRequests>>
where
    S: ReportSource + ?Sized,
{
    if start > end {
        return Err(GarageError::invalid_range(start, end));
    }

    let scheduled = source.find_maintenances_by_garage_and_date_range(
        garage_id,
        start.first_day(),
        end.last_day(),
    )?;
    debug!(
        "Monthly requests for garage {garage_id} from {start} to {end}: {} requests",
        scheduled.len()
    );

    let buckets = bucket_events(
        start,
        end,
        scheduled.iter().map(|m| YearMonth::of(m.scheduled_date)),
    )?;
    Ok(assembler::monthly_counts(buckets))
}
