//! Database operations and SQLite management for garages, cars and
//! maintenance records.
//!
//! This module owns the SQLite connection, the embedded schema, and one
//! query submodule per entity. Report reads go through [`Snapshot`], a read
//! transaction scoped to a single report computation.

use std::path::Path;

use jiff::civil::Date;
use rusqlite::{Connection, Row, types::Type};

use crate::error::{DatabaseResultExt, Result};

pub mod car_queries;
pub mod garage_queries;
pub mod maintenance_queries;
pub mod migrations;
pub mod snapshot;

pub use snapshot::Snapshot;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads an ISO `YYYY-MM-DD` text column as a calendar date.
pub(crate) fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an INTEGER primary or foreign key column.
pub(crate) fn id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}
