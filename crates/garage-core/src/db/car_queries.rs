//! Car CRUD operations, license plate uniqueness and garage associations.

use std::collections::BTreeSet;

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{
    garage_queries::{garage_exists, garage_from_row},
    id_column,
};
use crate::{
    error::{DatabaseResultExt, GarageError, Result},
    models::{Car, CarFilter, Garage},
    params::CarInput,
};

const INSERT_CAR_SQL: &str =
    "INSERT INTO cars (make, model, production_year, license_plate) VALUES (?1, ?2, ?3, ?4)";
const SELECT_CAR_SQL: &str =
    "SELECT id, make, model, production_year, license_plate FROM cars WHERE id = ?1";
const SELECT_CARS_SQL: &str = "SELECT id, make, model, production_year, license_plate FROM cars";
const CHECK_CAR_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM cars WHERE id = ?1)";
const CHECK_PLATE_TAKEN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM cars WHERE license_plate = ?1 AND id != ?2)";
const UPDATE_CAR_SQL: &str = "UPDATE cars SET make = ?1, model = ?2, production_year = ?3, license_plate = ?4 WHERE id = ?5";
const DELETE_CAR_SQL: &str = "DELETE FROM cars WHERE id = ?1";
const INSERT_ASSOCIATION_SQL: &str = "INSERT INTO car_garage (car_id, garage_id) VALUES (?1, ?2)";
const DELETE_ASSOCIATIONS_SQL: &str = "DELETE FROM car_garage WHERE car_id = ?1";
const SELECT_CAR_GARAGES_SQL: &str = "SELECT g.id, g.name, g.location, g.city, g.capacity
     FROM garages g JOIN car_garage cg ON cg.garage_id = g.id
     WHERE cg.car_id = ?1 ORDER BY g.id";

fn car_from_row(row: &Row<'_>) -> rusqlite::Result<Car> {
    Ok(Car {
        id: id_column(row, 0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        production_year: row.get(3)?,
        license_plate: row.get(4)?,
        garages: Vec::new(),
    })
}

pub(crate) fn car_exists(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(CHECK_CAR_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check car existence")
}

fn select_car_garages(conn: &Connection, car_id: u64) -> Result<Vec<Garage>> {
    let mut stmt = conn
        .prepare(SELECT_CAR_GARAGES_SQL)
        .db_context("Failed to prepare query")?;

    stmt.query_map(params![car_id as i64], garage_from_row)
        .db_context("Failed to query car garages")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch car garages")
}

fn select_car(conn: &Connection, id: u64) -> Result<Option<Car>> {
    let car = conn
        .query_row(SELECT_CAR_SQL, params![id as i64], car_from_row)
        .optional()
        .db_context("Failed to query car")?;

    match car {
        Some(mut car) => {
            car.garages = select_car_garages(conn, car.id)?;
            Ok(Some(car))
        }
        None => Ok(None),
    }
}

/// Rejects a license plate already used by a car other than `car_id`.
fn ensure_plate_available(conn: &Connection, plate: Option<&str>, car_id: u64) -> Result<()> {
    let Some(plate) = plate else {
        return Ok(());
    };

    let taken: bool = conn
        .query_row(CHECK_PLATE_TAKEN_SQL, params![plate, car_id as i64], |row| row.get(0))
        .db_context("Failed to check license plate")?;

    if taken {
        return Err(GarageError::invalid_input("licensePlate").with_reason("License plate already exists."));
    }
    Ok(())
}

/// Replaces the garage associations of a car, validating every garage ID.
fn associate_garages(conn: &Connection, car_id: u64, garage_ids: &[u64]) -> Result<()> {
    conn.execute(DELETE_ASSOCIATIONS_SQL, params![car_id as i64])
        .db_context("Failed to clear car garages")?;

    let unique: BTreeSet<u64> = garage_ids.iter().copied().collect();
    for garage_id in unique {
        if !garage_exists(conn, garage_id)? {
            return Err(GarageError::GarageNotFound { id: garage_id });
        }
        conn.execute(INSERT_ASSOCIATION_SQL, params![car_id as i64, garage_id as i64])
            .db_context("Failed to associate garage")?;
    }
    Ok(())
}

impl super::Database {
    /// Creates a new car and associates it with the given garages.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidInput` - When the license plate is already used
    /// * `GarageError::GarageNotFound` - When a garage ID does not exist
    pub fn create_car(&mut self, input: &CarInput) -> Result<Car> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plate = input.license_plate();
        ensure_plate_available(&tx, plate, 0)?;

        tx.execute(
            INSERT_CAR_SQL,
            params![input.make, input.model, input.production_year, plate],
        )
        .db_context("Failed to insert car")?;

        let id = tx.last_insert_rowid() as u64;
        associate_garages(&tx, id, &input.garage_ids)?;
        let garages = select_car_garages(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Car {
            id,
            make: input.make.clone(),
            model: input.model.clone(),
            production_year: input.production_year,
            license_plate: plate.map(String::from),
            garages,
        })
    }

    /// Retrieves a car by its ID, with its garages loaded.
    pub fn get_car(&self, id: u64) -> Result<Option<Car>> {
        select_car(&self.connection, id)
    }

    /// Lists cars ordered by ID with optional filtering.
    pub fn list_cars(&self, filter: Option<&CarFilter>) -> Result<Vec<Car>> {
        let mut query = SELECT_CARS_SQL.to_string();

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref make) = f.make_contains {
                conditions.push("make LIKE ?");
                params_vec.push(Box::new(format!("%{make}%")));
            }

            if let Some(garage_id) = f.garage_id {
                conditions.push("id IN (SELECT car_id FROM car_garage WHERE garage_id = ?)");
                params_vec.push(Box::new(garage_id as i64));
            }

            if let Some(from_year) = f.from_year {
                conditions.push("production_year >= ?");
                params_vec.push(Box::new(from_year));
            }

            if let Some(to_year) = f.to_year {
                conditions.push("production_year <= ?");
                params_vec.push(Box::new(to_year));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut cars = stmt
            .query_map(&params_refs[..], car_from_row)
            .db_context("Failed to query cars")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch cars")?;

        for car in &mut cars {
            car.garages = select_car_garages(&self.connection, car.id)?;
        }

        Ok(cars)
    }

    /// Replaces every field and the garage associations of an existing car.
    /// Returns `None` if the car does not exist.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidInput` - When another car uses the license plate
    /// * `GarageError::GarageNotFound` - When a garage ID does not exist
    pub fn update_car(&mut self, id: u64, input: &CarInput) -> Result<Option<Car>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !car_exists(&tx, id)? {
            return Ok(None);
        }

        let plate = input.license_plate();
        ensure_plate_available(&tx, plate, id)?;

        tx.execute(
            UPDATE_CAR_SQL,
            params![input.make, input.model, input.production_year, plate, id as i64],
        )
        .db_context("Failed to update car")?;

        associate_garages(&tx, id, &input.garage_ids)?;
        let car = select_car(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(car)
    }

    /// Permanently deletes a car together with its garage associations and
    /// maintenance records. Returns false if the car did not exist.
    pub fn delete_car(&mut self, id: u64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_CAR_SQL, params![id as i64])
            .db_context("Failed to delete car")?;
        Ok(deleted > 0)
    }
}
