//! Async service API over the garage database.
//!
//! [`GarageService`] is the single entry point used by the CLI and the HTTP
//! adapter. It owns only the database path; every call opens its own
//! connection on a blocking worker thread, so the service is cheap to clone
//! and share between request handlers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / HTTP     │    │  GarageService  │    │    Database     │
//! │   adapters      │───▶│ (*_ops modules) │───▶│ (db/, reports/) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Lookups of a single entity return the matching `*NotFound` error instead
//! of `None`, which is what both adapters surface to the user.
//!
//! ```rust
//! use garage_core::{GarageServiceBuilder, params::{GarageInput, ListGarages}};
//!
//! # async fn example() -> garage_core::Result<()> {
//! let service = GarageServiceBuilder::new()
//!     .with_database_path(Some("/tmp/garage-example.db"))
//!     .build()
//!     .await?;
//!
//! let garage = service
//!     .create_garage(&GarageInput {
//!         name: "North".to_string(),
//!         location: "1 Main St".to_string(),
//!         city: "Springfield".to_string(),
//!         capacity: 4,
//!     })
//!     .await?;
//!
//! let garages = service.list_garages(&ListGarages::default()).await?;
//! assert!(garages.iter().any(|g| g.id == garage.id));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{GarageError, Result},
};

pub mod builder;
pub mod car_ops;
pub mod garage_ops;
pub mod maintenance_ops;
pub mod report_ops;

#[cfg(test)]
mod tests;

pub use builder::GarageServiceBuilder;

/// Main service interface for garages, cars, maintenance and reports.
#[derive(Debug, Clone)]
pub struct GarageService {
    pub(crate) db_path: PathBuf,
}

impl GarageService {
    /// Creates a new service backed by the database at `db_path`.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| GarageError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
