mod common;

use common::{car_input, create_test_service, garage_input};
use garage_core::{
    GarageError,
    params::{DailyReport, Id, ListCars, ListGarages, ListMaintenances, MaintenanceInput, MonthlyReport},
};

#[tokio::test]
async fn test_garage_crud() {
    let (_temp_dir, service) = create_test_service().await;

    let garage = service
        .create_garage(&garage_input("North", "Leeds", 3))
        .await
        .expect("Failed to create garage");

    let fetched = service.get_garage(&Id { id: garage.id }).await.unwrap();
    assert_eq!(fetched, garage);

    let updated = service
        .update_garage(&Id { id: garage.id }, &garage_input("North Works", "Leeds", 6))
        .await
        .unwrap();
    assert_eq!(updated.capacity, 6);

    let listed = service
        .list_garages(&ListGarages {
            city: Some("lee".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    service.delete_garage(&Id { id: garage.id }).await.unwrap();
    let err = service.get_garage(&Id { id: garage.id }).await.unwrap_err();
    assert!(matches!(err, GarageError::GarageNotFound { .. }));

    let err = service.delete_garage(&Id { id: garage.id }).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_garage_rejects_blank_name() {
    let (_temp_dir, service) = create_test_service().await;

    let err = service
        .create_garage(&garage_input("   ", "Leeds", 3))
        .await
        .unwrap_err();
    assert!(matches!(err, GarageError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_car_crud_and_filters() {
    let (_temp_dir, service) = create_test_service().await;
    let garage = service
        .create_garage(&garage_input("North", "Leeds", 3))
        .await
        .unwrap();

    let car = service
        .create_car(&car_input("Mazda", "MX-5", 1999, Some("P1"), vec![garage.id]))
        .await
        .unwrap();
    assert_eq!(car.garages.len(), 1);

    let cars = service
        .list_cars(&ListCars {
            garage_id: Some(garage.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(cars.len(), 1);

    let updated = service
        .update_car(&Id { id: car.id }, &car_input("Mazda", "MX-5", 1999, None, vec![]))
        .await
        .unwrap();
    assert!(updated.license_plate.is_none());
    assert!(updated.garages.is_empty());

    let err = service
        .update_car(&Id { id: 999 }, &car_input("X", "Y", 2000, None, vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, GarageError::CarNotFound { id: 999 }));

    service.delete_car(&Id { id: car.id }).await.unwrap();
}

#[tokio::test]
async fn test_maintenance_validation() {
    let (_temp_dir, service) = create_test_service().await;
    let garage = service
        .create_garage(&garage_input("North", "Leeds", 3))
        .await
        .unwrap();
    let car = service
        .create_car(&car_input("Opel", "Astra", 2010, None, vec![]))
        .await
        .unwrap();

    let mut input = MaintenanceInput {
        garage_id: garage.id,
        car_id: car.id,
        service_type: "MOT".to_string(),
        scheduled_date: "2024-13-01".to_string(),
    };
    let err = service.create_maintenance(&input).await.unwrap_err();
    assert!(matches!(err, GarageError::InvalidFormat { .. }));

    input.scheduled_date = "2024-04-01".to_string();
    let details = service.create_maintenance(&input).await.unwrap();
    assert_eq!(details.garage_name, "North");

    let listed = service
        .list_maintenances(&ListMaintenances {
            car_id: Some(car.id),
            start_date: Some("2024-04-01".to_string()),
            end_date: Some("2024-04-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    let err = service
        .get_maintenance(&Id { id: details.id + 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, GarageError::MaintenanceNotFound { .. }));
}

#[tokio::test]
async fn test_reports_through_service() {
    let (_temp_dir, service) = create_test_service().await;
    let garage = service
        .create_garage(&garage_input("North", "Leeds", 5))
        .await
        .unwrap();
    let car = service
        .create_car(&car_input("Opel", "Corsa", 2012, None, vec![]))
        .await
        .unwrap();
    service
        .create_maintenance(&MaintenanceInput {
            garage_id: garage.id,
            car_id: car.id,
            service_type: "Check".to_string(),
            scheduled_date: "2024-03-02".to_string(),
        })
        .await
        .unwrap();

    let daily = service
        .daily_availability_report(&DailyReport {
            garage_id: garage.id,
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-03".to_string(),
        })
        .await
        .unwrap();
    let available: Vec<u32> = daily.days.iter().map(|d| d.available_capacity).collect();
    assert_eq!(available, vec![5, 4, 5]);

    let err = service
        .daily_availability_report(&DailyReport {
            garage_id: garage.id,
            start_date: "2024-03-10".to_string(),
            end_date: "2024-03-05".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GarageError::InvalidRange { .. }));

    let monthly = service
        .monthly_requests_report(&MonthlyReport {
            garage_id: garage.id,
            start_month: "2024-01".to_string(),
            end_month: "2024-03".to_string(),
        })
        .await
        .unwrap();
    let counts: Vec<u32> = monthly.iter().map(|m| m.requests).collect();
    assert_eq!(counts, vec![0, 0, 1]);
}
