//! Garage operations for the GarageService.

use super::GarageService;
use crate::{
    error::{GarageError, Result},
    models::{Garage, GarageFilter},
    params::{GarageInput, Id, ListGarages},
};

impl GarageService {
    /// Creates a new garage.
    pub async fn create_garage(&self, params: &GarageInput) -> Result<Garage> {
        params.validate()?;
        let input = params.clone();

        self.with_database(move |db| db.create_garage(&input)).await
    }

    /// Retrieves a garage by its ID.
    ///
    /// # Errors
    ///
    /// * `GarageError::GarageNotFound` - When no garage has this ID
    pub async fn get_garage(&self, params: &Id) -> Result<Garage> {
        let id = params.id;

        self.with_database(move |db| db.get_garage(id)?.ok_or(GarageError::GarageNotFound { id }))
            .await
    }

    /// Lists garages, optionally restricted to cities containing a substring.
    pub async fn list_garages(&self, params: &ListGarages) -> Result<Vec<Garage>> {
        let filter = GarageFilter::from(params);

        self.with_database(move |db| db.list_garages(Some(&filter))).await
    }

    /// Replaces every field of an existing garage.
    pub async fn update_garage(&self, params: &Id, input: &GarageInput) -> Result<Garage> {
        input.validate()?;
        let id = params.id;
        let input = input.clone();

        self.with_database(move |db| {
            db.update_garage(id, &input)?
                .ok_or(GarageError::GarageNotFound { id })
        })
        .await
    }

    /// Permanently deletes a garage, its car associations and its
    /// maintenance records.
    pub async fn delete_garage(&self, params: &Id) -> Result<()> {
        let id = params.id;

        self.with_database(move |db| {
            if db.delete_garage(id)? {
                Ok(())
            } else {
                Err(GarageError::GarageNotFound { id })
            }
        })
        .await
    }
}
