//! Maintenance operations for the GarageService.

use super::GarageService;
use crate::{
    error::{GarageError, Result},
    models::{MaintenanceDetails, MaintenanceFilter},
    params::{Id, ListMaintenances, MaintenanceInput},
};

impl GarageService {
    /// Schedules a maintenance visit of a car at a garage.
    ///
    /// # Errors
    ///
    /// * `GarageError::InvalidFormat` - When the scheduled date is malformed
    /// * `GarageError::CarNotFound` - When the car does not exist
    /// * `GarageError::GarageNotFound` - When the garage does not exist
    pub async fn create_maintenance(&self, params: &MaintenanceInput) -> Result<MaintenanceDetails> {
        let scheduled_date = params.validate()?;
        let (car_id, garage_id) = (params.car_id, params.garage_id);
        let service_type = params.service_type.clone();

        self.with_database(move |db| {
            db.create_maintenance(car_id, garage_id, &service_type, scheduled_date)
        })
        .await
    }

    /// Retrieves a maintenance record with car and garage names.
    pub async fn get_maintenance(&self, params: &Id) -> Result<MaintenanceDetails> {
        let id = params.id;

        self.with_database(move |db| {
            db.get_maintenance(id)?
                .ok_or(GarageError::MaintenanceNotFound { id })
        })
        .await
    }

    /// Lists maintenance records ordered by scheduled date.
    pub async fn list_maintenances(&self, params: &ListMaintenances) -> Result<Vec<MaintenanceDetails>> {
        let filter = MaintenanceFilter::try_from(params)?;

        self.with_database(move |db| db.list_maintenances(Some(&filter))).await
    }

    /// Replaces every field of a maintenance record.
    pub async fn update_maintenance(
        &self,
        params: &Id,
        input: &MaintenanceInput,
    ) -> Result<MaintenanceDetails> {
        let id = params.id;
        let scheduled_date = input.validate()?;
        let (car_id, garage_id) = (input.car_id, input.garage_id);
        let service_type = input.service_type.clone();

        self.with_database(move |db| {
            db.update_maintenance(id, car_id, garage_id, &service_type, scheduled_date)?
                .ok_or(GarageError::MaintenanceNotFound { id })
        })
        .await
    }

    /// Permanently deletes a maintenance record.
    pub async fn delete_maintenance(&self, params: &Id) -> Result<()> {
        let id = params.id;

        self.with_database(move |db| {
            if db.delete_maintenance(id)? {
                Ok(())
            } else {
                Err(GarageError::MaintenanceNotFound { id })
            }
        })
        .await
    }
}
