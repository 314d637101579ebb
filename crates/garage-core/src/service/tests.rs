//! Tests for the service module.

use super::*;
use crate::params::{GarageInput, Id};
use tempfile::TempDir;

/// Helper function to create a test service
async fn create_test_service() -> (TempDir, GarageService) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let service = GarageServiceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create service");
    (temp_dir, service)
}

#[tokio::test]
async fn test_builder_creates_missing_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("deeper").join("garage.db");

    let service = GarageServiceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create service");

    assert!(db_path.exists());
    assert_eq!(service.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_clones_share_database() {
    let (_temp_dir, service) = create_test_service().await;
    let other = service.clone();

    let garage = service
        .create_garage(&GarageInput {
            name: "Shared".to_string(),
            location: "5 Bridge St".to_string(),
            city: "Chester".to_string(),
            capacity: 2,
        })
        .await
        .unwrap();

    let fetched = other.get_garage(&Id { id: garage.id }).await.unwrap();
    assert_eq!(fetched.name, "Shared");
}

#[tokio::test]
async fn test_with_database_propagates_errors() {
    let (_temp_dir, service) = create_test_service().await;

    let err = service
        .with_database(|db| db.get_garage(1)?.ok_or(GarageError::GarageNotFound { id: 1 }))
        .await
        .unwrap_err();
    assert!(matches!(err, GarageError::GarageNotFound { id: 1 }));
}
