//! Markdown tables for the daily and monthly reports.

use std::fmt;

use crate::{models::MonthlyRequests, reports::GarageAvailability};

impl fmt::Display for GarageAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Daily availability: {} (ID: {})",
            self.garage.name, self.garage.id
        )?;
        writeln!(f)?;
        writeln!(f, "Capacity: {} per day", self.garage.capacity)?;
        writeln!(f)?;
        writeln!(f, "| Date | Requests | Available |")?;
        writeln!(f, "|:-----|---------:|----------:|")?;
        for day in &self.days {
            writeln!(
                f,
                "| {} | {} | {} |",
                day.date, day.requests, day.available_capacity
            )?;
        }
        Ok(())
    }
}

/// Monthly request counts of one garage, for table display.
pub struct MonthlyRequestsReport {
    pub garage_id: u64,
    pub months: Vec<MonthlyRequests>,
}

impl MonthlyRequestsReport {
    pub fn new(garage_id: u64, months: Vec<MonthlyRequests>) -> Self {
        Self { garage_id, months }
    }
}

impl fmt::Display for MonthlyRequestsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Monthly requests: garage {}", self.garage_id)?;
        writeln!(f)?;
        writeln!(f, "| Month | Requests | Leap year |")?;
        writeln!(f, "|:------|---------:|:---------:|")?;
        for entry in &self.months {
            let leap = if entry.year_month.is_leap_year() { "yes" } else { "no" };
            writeln!(f, "| {} | {} | {leap} |", entry.year_month, entry.requests)?;
        }
        Ok(())
    }
}
