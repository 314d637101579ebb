//! Maintenance CRUD operations and date-range queries.

use jiff::civil::Date;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{car_queries::car_exists, date_column, garage_queries::garage_exists, id_column};
use crate::{
    error::{DatabaseResultExt, GarageError, Result},
    models::{Maintenance, MaintenanceDetails, MaintenanceFilter},
};

const INSERT_MAINTENANCE_SQL: &str = "INSERT INTO maintenances (car_id, garage_id, service_type, scheduled_date) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_MAINTENANCE_SQL: &str = "UPDATE maintenances SET car_id = ?1, garage_id = ?2, service_type = ?3, scheduled_date = ?4 WHERE id = ?5";
const DELETE_MAINTENANCE_SQL: &str = "DELETE FROM maintenances WHERE id = ?1";
const CHECK_MAINTENANCE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM maintenances WHERE id = ?1)";
const DETAILS_COLUMNS: &str =
    "id, car_id, car_name, service_type, scheduled_date, garage_id, garage_name";
const SELECT_GARAGE_RANGE_SQL: &str = "SELECT id, car_id, garage_id, service_type, scheduled_date
     FROM maintenances
     WHERE garage_id = ?1 AND scheduled_date >= ?2 AND scheduled_date <= ?3
     ORDER BY scheduled_date, id";

fn maintenance_from_row(row: &Row<'_>) -> rusqlite::Result<Maintenance> {
    Ok(Maintenance {
        id: id_column(row, 0)?,
        car_id: id_column(row, 1)?,
        garage_id: id_column(row, 2)?,
        service_type: row.get(3)?,
        scheduled_date: date_column(row, 4)?,
    })
}

fn details_from_row(row: &Row<'_>) -> rusqlite::Result<MaintenanceDetails> {
    Ok(MaintenanceDetails {
        id: id_column(row, 0)?,
        car_id: id_column(row, 1)?,
        car_name: row.get(2)?,
        service_type: row.get(3)?,
        scheduled_date: date_column(row, 4)?,
        garage_id: id_column(row, 5)?,
        garage_name: row.get(6)?,
    })
}

fn select_details(conn: &Connection, id: u64) -> Result<Option<MaintenanceDetails>> {
    conn.query_row(
        &format!("SELECT {DETAILS_COLUMNS} FROM maintenance_details WHERE id = ?1"),
        params![id as i64],
        details_from_row,
    )
    .optional()
    .db_context("Failed to query maintenance")
}

/// Maintenance records of one garage scheduled within `[start, end]`,
/// ordered by date.
pub(crate) fn select_maintenances_for_garage(
    conn: &Connection,
    garage_id: u64,
    start: Date,
    end: Date,
) -> Result<Vec<Maintenance>> {
    let mut stmt = conn
        .prepare(SELECT_GARAGE_RANGE_SQL)
        .db_context("Failed to prepare query")?;

    stmt.query_map(
        params![garage_id as i64, start.to_string(), end.to_string()],
        maintenance_from_row,
    )
    .db_context("Failed to query maintenances")?
    .collect::<std::result::Result<Vec<_>, _>>()
    .db_context("Failed to fetch maintenances")
}

/// Checks that both referenced entities exist, car first.
fn ensure_references(conn: &Connection, car_id: u64, garage_id: u64) -> Result<()> {
    if !car_exists(conn, car_id)? {
        return Err(GarageError::CarNotFound { id: car_id });
    }
    if !garage_exists(conn, garage_id)? {
        return Err(GarageError::GarageNotFound { id: garage_id });
    }
    Ok(())
}

impl super::Database {
    /// Schedules a maintenance visit.
    ///
    /// # Errors
    ///
    /// * `GarageError::CarNotFound` - When the car does not exist
    /// * `GarageError::GarageNotFound` - When the garage does not exist
    pub fn create_maintenance(
        &mut self,
        car_id: u64,
        garage_id: u64,
        service_type: &str,
        scheduled_date: Date,
    ) -> Result<MaintenanceDetails> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_references(&tx, car_id, garage_id)?;

        tx.execute(
            INSERT_MAINTENANCE_SQL,
            params![
                car_id as i64,
                garage_id as i64,
                service_type,
                scheduled_date.to_string()
            ],
        )
        .db_context("Failed to insert maintenance")?;

        let id = tx.last_insert_rowid() as u64;
        let details = select_details(&tx, id)?.ok_or(GarageError::MaintenanceNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(details)
    }

    /// Retrieves a maintenance record with car and garage names.
    pub fn get_maintenance(&self, id: u64) -> Result<Option<MaintenanceDetails>> {
        select_details(&self.connection, id)
    }

    /// Lists maintenance records ordered by scheduled date, then ID.
    pub fn list_maintenances(
        &self,
        filter: Option<&MaintenanceFilter>,
    ) -> Result<Vec<MaintenanceDetails>> {
        let mut query = format!("SELECT {DETAILS_COLUMNS} FROM maintenance_details");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(car_id) = f.car_id {
                conditions.push("car_id = ?");
                params_vec.push(Box::new(car_id as i64));
            }

            if let Some(garage_id) = f.garage_id {
                conditions.push("garage_id = ?");
                params_vec.push(Box::new(garage_id as i64));
            }

            if let Some(from) = f.scheduled_from {
                conditions.push("scheduled_date >= ?");
                params_vec.push(Box::new(from.to_string()));
            }

            if let Some(to) = f.scheduled_to {
                conditions.push("scheduled_date <= ?");
                params_vec.push(Box::new(to.to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY scheduled_date, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        stmt.query_map(&params_refs[..], details_from_row)
            .db_context("Failed to query maintenances")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch maintenances")
    }

    /// Maintenance records of one garage scheduled within `[start, end]`.
    pub fn list_garage_maintenances(
        &self,
        garage_id: u64,
        start: Date,
        end: Date,
    ) -> Result<Vec<Maintenance>> {
        select_maintenances_for_garage(&self.connection, garage_id, start, end)
    }

    /// Replaces every field of an existing maintenance record. Returns `None`
    /// if the record does not exist.
    ///
    /// # Errors
    ///
    /// * `GarageError::CarNotFound` - When the new car does not exist
    /// * `GarageError::GarageNotFound` - When the new garage does not exist
    pub fn update_maintenance(
        &mut self,
        id: u64,
        car_id: u64,
        garage_id: u64,
        service_type: &str,
        scheduled_date: Date,
    ) -> Result<Option<MaintenanceDetails>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_MAINTENANCE_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check maintenance existence")?;
        if !exists {
            return Ok(None);
        }

        ensure_references(&tx, car_id, garage_id)?;

        tx.execute(
            UPDATE_MAINTENANCE_SQL,
            params![
                car_id as i64,
                garage_id as i64,
                service_type,
                scheduled_date.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update maintenance")?;

        let details = select_details(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(details)
    }

    /// Permanently deletes a maintenance record. Returns false if it did not
    /// exist.
    pub fn delete_maintenance(&mut self, id: u64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_MAINTENANCE_SQL, params![id as i64])
            .db_context("Failed to delete maintenance")?;
        Ok(deleted > 0)
    }
}
