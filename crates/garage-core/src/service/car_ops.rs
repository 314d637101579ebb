//! Car operations for the GarageService.

use super::GarageService;
use crate::{
    error::{GarageError, Result},
    models::{Car, CarFilter},
    params::{CarInput, Id, ListCars},
};

impl GarageService {
    /// Creates a car and associates it with the listed garages.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidInput` - When the license plate is already used
    /// * `GarageError::GarageNotFound` - When a listed garage does not exist
    pub async fn create_car(&self, params: &CarInput) -> Result<Car> {
        let input = params.clone();

        self.with_database(move |db| db.create_car(&input)).await
    }

    /// Retrieves a car with its garages.
    pub async fn get_car(&self, params: &Id) -> Result<Car> {
        let id = params.id;

        self.with_database(move |db| db.get_car(id)?.ok_or(GarageError::CarNotFound { id }))
            .await
    }

    /// Lists cars matching the given make, garage and production-year filters.
    pub async fn list_cars(&self, params: &ListCars) -> Result<Vec<Car>> {
        let filter = CarFilter::from(params);

        self.with_database(move |db| db.list_cars(Some(&filter))).await
    }

    /// Replaces every field and the garage associations of a car.
    pub async fn update_car(&self, params: &Id, input: &CarInput) -> Result<Car> {
        let id = params.id;
        let input = input.clone();

        self.with_database(move |db| db.update_car(id, &input)?.ok_or(GarageError::CarNotFound { id }))
            .await
    }

    /// Permanently deletes a car and its maintenance records.
    pub async fn delete_car(&self, params: &Id) -> Result<()> {
        let id = params.id;

        self.with_database(move |db| {
            if db.delete_car(id)? {
                Ok(())
            } else {
                Err(GarageError::CarNotFound { id })
            }
        })
        .await
    }
}
