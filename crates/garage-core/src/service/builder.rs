//! Builder for creating and configuring GarageService instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::GarageService;
use crate::{
    db::Database,
    error::{GarageError, Result},
};

/// Builder for creating and configuring GarageService instances.
#[derive(Debug, Clone)]
pub struct GarageServiceBuilder {
    database_path: Option<PathBuf>,
}

impl GarageServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/garage/garage.db` or `~/.local/share/garage/garage.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured service, creating the database file and schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `GarageError::FileSystem` if the database directory cannot be created
    /// Returns `GarageError::Database` if database initialization fails
    pub async fn build(self) -> Result<GarageService> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GarageError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), GarageError>(())
        })
        .await
        .map_err(|e| GarageError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        log::debug!("Using database at {}", db_path.display());
        Ok(GarageService::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("garage")
            .place_data_file("garage.db")
            .map_err(|e| GarageError::XdgDirectory(e.to_string()))
    }
}

impl Default for GarageServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
