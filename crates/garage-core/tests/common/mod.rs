#![allow(dead_code)]

use garage_core::{
    Database, GarageService, GarageServiceBuilder,
    params::{CarInput, GarageInput},
};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a test service backed by a fresh database
pub async fn create_test_service() -> (TempDir, GarageService) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let service = GarageServiceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create service");
    (temp_dir, service)
}

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

pub fn garage_input(name: &str, city: &str, capacity: u32) -> GarageInput {
    GarageInput {
        name: name.to_string(),
        location: format!("1 {name} Road"),
        city: city.to_string(),
        capacity,
    }
}

pub fn car_input(make: &str, model: &str, year: i32, plate: Option<&str>, garage_ids: Vec<u64>) -> CarInput {
    CarInput {
        make: make.to_string(),
        model: model.to_string(),
        production_year: year,
        license_plate: plate.map(String::from),
        garage_ids,
    }
}
