//! Garage CRUD operations and queries.

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::id_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Garage, GarageFilter},
    params::GarageInput,
};

const INSERT_GARAGE_SQL: &str =
    "INSERT INTO garages (name, location, city, capacity) VALUES (?1, ?2, ?3, ?4)";
const SELECT_GARAGE_SQL: &str =
    "SELECT id, name, location, city, capacity FROM garages WHERE id = ?1";
const SELECT_GARAGES_SQL: &str = "SELECT id, name, location, city, capacity FROM garages";
const CHECK_GARAGE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM garages WHERE id = ?1)";
const UPDATE_GARAGE_SQL: &str =
    "UPDATE garages SET name = ?1, location = ?2, city = ?3, capacity = ?4 WHERE id = ?5";
const DELETE_GARAGE_SQL: &str = "DELETE FROM garages WHERE id = ?1";

/// Maps a row selected with the garage column list.
pub(crate) fn garage_from_row(row: &Row<'_>) -> rusqlite::Result<Garage> {
    Ok(Garage {
        id: id_column(row, 0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        city: row.get(3)?,
        capacity: row.get(4)?,
    })
}

/// Looks up a single garage on any connection or transaction.
pub(crate) fn select_garage(conn: &Connection, id: u64) -> Result<Option<Garage>> {
    conn.query_row(SELECT_GARAGE_SQL, params![id as i64], garage_from_row)
        .optional()
        .db_context("Failed to query garage")
}

pub(crate) fn garage_exists(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(CHECK_GARAGE_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check garage existence")
}

impl super::Database {
    /// Creates a new garage.
    pub fn create_garage(&mut self, input: &GarageInput) -> Result<Garage> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_GARAGE_SQL,
            params![input.name, input.location, input.city, input.capacity],
        )
        .db_context("Failed to insert garage")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Garage {
            id,
            name: input.name.clone(),
            location: input.location.clone(),
            city: input.city.clone(),
            capacity: input.capacity,
        })
    }

    /// Retrieves a garage by its ID.
    pub fn get_garage(&self, id: u64) -> Result<Option<Garage>> {
        select_garage(&self.connection, id)
    }

    /// Lists garages ordered by ID with optional filtering.
    pub fn list_garages(&self, filter: Option<&GarageFilter>) -> Result<Vec<Garage>> {
        let mut query = SELECT_GARAGES_SQL.to_string();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(city) = filter.and_then(|f| f.city_contains.as_ref()) {
            query.push_str(" WHERE city LIKE ?");
            params_vec.push(Box::new(format!("%{city}%")));
        }

        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        stmt.query_map(&params_refs[..], garage_from_row)
            .db_context("Failed to query garages")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch garages")
    }

    /// Replaces every field of an existing garage. Returns `None` if the
    /// garage does not exist.
    pub fn update_garage(&mut self, id: u64, input: &GarageInput) -> Result<Option<Garage>> {
        let changed = self
            .connection
            .execute(
                UPDATE_GARAGE_SQL,
                params![input.name, input.location, input.city, input.capacity, id as i64],
            )
            .db_context("Failed to update garage")?;

        if changed == 0 {
            return Ok(None);
        }
        self.get_garage(id)
    }

    /// Permanently deletes a garage together with its car associations and
    /// maintenance records. Returns false if the garage did not exist.
    pub fn delete_garage(&mut self, id: u64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_GARAGE_SQL, params![id as i64])
            .db_context("Failed to delete garage")?;
        Ok(deleted > 0)
    }
}
