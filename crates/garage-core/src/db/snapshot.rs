//! Read snapshots used by report computations.

use jiff::civil::Date;
use rusqlite::{Transaction, TransactionBehavior};

use super::{
    Database, garage_queries::select_garage,
    maintenance_queries::select_maintenances_for_garage,
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Garage, Maintenance},
    reports::ReportSource,
};

/// A deferred read transaction. Every query issued through it observes the
/// same database state; dropping it rolls the transaction back.
pub struct Snapshot<'conn> {
    tx: Transaction<'conn>,
}

impl Database {
    /// Opens a read snapshot that lives until the returned value is dropped.
    pub fn snapshot(&mut self) -> Result<Snapshot<'_>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Deferred)
            .db_context("Failed to begin read transaction")?;
        Ok(Snapshot { tx })
    }
}

impl ReportSource for Snapshot<'_> {
    fn find_garage_by_id(&self, id: u64) -> Result<Option<Garage>> {
        select_garage(&self.tx, id)
    }

    fn find_maintenances_by_garage_and_date_range(
        &self,
        garage_id: u64,
        start: Date,
        end: Date,
    ) -> Result<Vec<Maintenance>> {
        select_maintenances_for_garage(&self.tx, garage_id, start, end)
    }
}

impl ReportSource for Database {
    fn find_garage_by_id(&self, id: u64) -> Result<Option<Garage>> {
        self.get_garage(id)
    }

    fn find_maintenances_by_garage_and_date_range(
        &self,
        garage_id: u64,
        start: Date,
        end: Date,
    ) -> Result<Vec<Maintenance>> {
        self.list_garage_maintenances(garage_id, start, end)
    }
}
