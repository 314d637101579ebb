//! Range bucketing shared by the daily and monthly reports.

use std::{collections::BTreeMap, fmt};

use crate::{
    calendar::{CalendarUnit, Units},
    error::{GarageError, Result},
};

/// One calendar unit of a report range and the number of events in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket<U> {
    pub unit: U,
    pub count: u32,
}

/// Counts `events` per unit over the closed range `[start, end]`.
///
/// Exactly one bucket is emitted per unit of the range, in ascending order,
/// including units without any event. Events outside the range are ignored.
///
/// # Errors
///
/// * `GarageError::InvalidRange` - When `start` is after `end`
pub fn bucket_events<U, I>(start: U, end: U, events: I) -> Result<Vec<Bucket<U>>>
where
    U: CalendarUnit + fmt::Display,
    I: IntoIterator<Item = U>,
{
    if start > end {
        return Err(GarageError::invalid_range(start, end));
    }

    let mut counts: BTreeMap<U, u32> = BTreeMap::new();
    for unit in events {
        if (start..=end).contains(&unit) {
            *counts.entry(unit).or_default() += 1;
        }
    }

    Ok(Units::new(start, end)
        .map(|unit| Bucket {
            unit,
            count: counts.get(&unit).copied().unwrap_or(0),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Date, date};

    use super::*;
    use crate::calendar::YearMonth;

    #[test]
    fn test_days_without_events_are_present() {
        let buckets = bucket_events(
            date(2024, 1, 30),
            date(2024, 2, 2),
            [date(2024, 1, 31), date(2024, 1, 31), date(2024, 2, 2)],
        )
        .unwrap();

        let counts: Vec<(Date, u32)> = buckets.iter().map(|b| (b.unit, b.count)).collect();
        assert_eq!(
            counts,
            vec![
                (date(2024, 1, 30), 0),
                (date(2024, 1, 31), 2),
                (date(2024, 2, 1), 0),
                (date(2024, 2, 2), 1),
            ]
        );
    }

    #[test]
    fn test_events_outside_range_are_ignored() {
        let buckets = bucket_events(
            date(2024, 5, 1),
            date(2024, 5, 1),
            [date(2024, 4, 30), date(2024, 5, 1), date(2024, 5, 2)],
        )
        .unwrap();
        assert_eq!(buckets, vec![Bucket { unit: date(2024, 5, 1), count: 1 }]);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = bucket_events(date(2024, 3, 10), date(2024, 3, 5), []).unwrap_err();
        assert!(matches!(err, GarageError::InvalidRange { .. }));
    }

    #[test]
    fn test_month_buckets() {
        let start: YearMonth = "2023-12".parse().unwrap();
        let end: YearMonth = "2024-02".parse().unwrap();
        let jan: YearMonth = "2024-01".parse().unwrap();

        let buckets = bucket_events(start, end, [jan, jan, jan]).unwrap();
        let counts: Vec<u32> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 3, 0]);
        assert_eq!(buckets[1].unit, jan);
    }

    #[test]
    fn test_bucket_count_matches_range_length() {
        let start = date(2023, 12, 15);
        for extra in [0_i64, 1, 16, 45, 400] {
            let end = start.checked_add(jiff::Span::new().days(extra)).unwrap();
            let buckets = bucket_events(start, end, []).unwrap();
            assert_eq!(buckets.len() as i64, extra + 1);
            assert!(buckets.windows(2).all(|w| w[0].unit < w[1].unit));
        }
    }
}
