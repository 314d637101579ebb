mod common;

use common::{car_input, create_test_db, garage_input};
use garage_core::{
    GarageError,
    models::{CarFilter, GarageFilter, MaintenanceFilter},
};
use jiff::civil::date;

#[test]
fn test_database_initialization_is_idempotent() {
    let (temp_file, mut db) = create_test_db();
    db.create_garage(&garage_input("North", "Leeds", 2))
        .expect("Failed to create garage");
    drop(db);

    let db = garage_core::Database::new(temp_file.path()).expect("Failed to reopen database");
    let garages = db.list_garages(None).expect("Failed to list garages");
    assert_eq!(garages.len(), 1);
}

#[test]
fn test_create_and_get_garage() {
    let (_temp_file, mut db) = create_test_db();

    let garage = db
        .create_garage(&garage_input("North", "Leeds", 4))
        .expect("Failed to create garage");
    assert!(garage.id > 0);

    let fetched = db
        .get_garage(garage.id)
        .expect("Failed to get garage")
        .expect("Garage should exist");
    assert_eq!(fetched, garage);

    assert!(db.get_garage(garage.id + 100).unwrap().is_none());
}

#[test]
fn test_list_garages_city_filter_is_case_insensitive() {
    let (_temp_file, mut db) = create_test_db();
    db.create_garage(&garage_input("A", "Newcastle", 1)).unwrap();
    db.create_garage(&garage_input("B", "Castleford", 1)).unwrap();
    db.create_garage(&garage_input("C", "York", 1)).unwrap();

    let filter = GarageFilter {
        city_contains: Some("CASTLE".to_string()),
    };
    let names: Vec<String> = db
        .list_garages(Some(&filter))
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_update_garage_replaces_fields() {
    let (_temp_file, mut db) = create_test_db();
    let garage = db.create_garage(&garage_input("Old", "Bath", 1)).unwrap();

    let updated = db
        .update_garage(garage.id, &garage_input("New", "Wells", 9))
        .unwrap()
        .expect("Garage should exist");
    assert_eq!(updated.name, "New");
    assert_eq!(updated.city, "Wells");
    assert_eq!(updated.capacity, 9);

    assert!(db.update_garage(999, &garage_input("X", "Y", 1)).unwrap().is_none());
}

#[test]
fn test_create_car_with_garages() {
    let (_temp_file, mut db) = create_test_db();
    let north = db.create_garage(&garage_input("North", "Leeds", 2)).unwrap();
    let south = db.create_garage(&garage_input("South", "Leeds", 2)).unwrap();

    let car = db
        .create_car(&car_input("Skoda", "Octavia", 2016, Some(" LD16 XYZ "), vec![south.id, north.id, north.id]))
        .expect("Failed to create car");

    assert_eq!(car.license_plate.as_deref(), Some("LD16 XYZ"));
    let ids: Vec<u64> = car.garages.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![north.id, south.id]);

    let fetched = db.get_car(car.id).unwrap().expect("Car should exist");
    assert_eq!(fetched, car);
}

#[test]
fn test_create_car_unknown_garage_rolls_back() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .create_car(&car_input("Skoda", "Fabia", 2012, None, vec![42]))
        .unwrap_err();
    assert!(matches!(err, GarageError::GarageNotFound { id: 42 }));
    assert!(db.list_cars(None).unwrap().is_empty());
}

#[test]
fn test_license_plate_uniqueness() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .create_car(&car_input("Audi", "A4", 2019, Some("AB12"), vec![]))
        .unwrap();
    let err = db
        .create_car(&car_input("Audi", "A6", 2020, Some("AB12"), vec![]))
        .unwrap_err();
    assert!(matches!(err, GarageError::InvalidInput { ref field, .. } if field == "licensePlate"));

    // Cars without plates never collide
    db.create_car(&car_input("Mini", "One", 2001, None, vec![])).unwrap();
    db.create_car(&car_input("Mini", "Cooper", 2002, Some("  "), vec![])).unwrap();

    // Keeping its own plate on update is allowed
    let updated = db
        .update_car(first.id, &car_input("Audi", "A4 Avant", 2019, Some("AB12"), vec![]))
        .unwrap()
        .expect("Car should exist");
    assert_eq!(updated.model, "A4 Avant");
}

#[test]
fn test_list_cars_filters() {
    let (_temp_file, mut db) = create_test_db();
    let garage = db.create_garage(&garage_input("North", "Leeds", 2)).unwrap();

    db.create_car(&car_input("Toyota", "Yaris", 2008, None, vec![garage.id])).unwrap();
    db.create_car(&car_input("Toyota", "Prius", 2015, None, vec![])).unwrap();
    db.create_car(&car_input("Honda", "Jazz", 2012, None, vec![garage.id])).unwrap();

    let by_make = db
        .list_cars(Some(&CarFilter {
            make_contains: Some("toy".to_string()),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(by_make.len(), 2);

    let by_garage = db
        .list_cars(Some(&CarFilter {
            garage_id: Some(garage.id),
            ..Default::default()
        }))
        .unwrap();
    let models: Vec<&str> = by_garage.iter().map(|c| c.model.as_str()).collect();
    assert_eq!(models, vec!["Yaris", "Jazz"]);

    let by_year = db
        .list_cars(Some(&CarFilter {
            from_year: Some(2010),
            to_year: Some(2015),
            ..Default::default()
        }))
        .unwrap();
    let models: Vec<&str> = by_year.iter().map(|c| c.model.as_str()).collect();
    assert_eq!(models, vec!["Prius", "Jazz"]);
}

#[test]
fn test_maintenance_lifecycle() {
    let (_temp_file, mut db) = create_test_db();
    let garage = db.create_garage(&garage_input("North", "Leeds", 2)).unwrap();
    let car = db
        .create_car(&car_input("Ford", "Fiesta", 2011, None, vec![garage.id]))
        .unwrap();

    let details = db
        .create_maintenance(car.id, garage.id, "Oil change", date(2024, 3, 4))
        .expect("Failed to create maintenance");
    assert_eq!(details.car_name, "Ford Fiesta");
    assert_eq!(details.garage_name, "North");
    assert_eq!(details.scheduled_date, date(2024, 3, 4));

    let updated = db
        .update_maintenance(details.id, car.id, garage.id, "Full service", date(2024, 3, 9))
        .unwrap()
        .expect("Maintenance should exist");
    assert_eq!(updated.service_type, "Full service");
    assert_eq!(updated.scheduled_date, date(2024, 3, 9));

    assert!(db.delete_maintenance(details.id).unwrap());
    assert!(!db.delete_maintenance(details.id).unwrap());
    assert!(db.get_maintenance(details.id).unwrap().is_none());
}

#[test]
fn test_create_maintenance_checks_car_before_garage() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .create_maintenance(10, 20, "Inspection", date(2024, 1, 1))
        .unwrap_err();
    assert!(matches!(err, GarageError::CarNotFound { id: 10 }));

    let car = db.create_car(&car_input("Kia", "Rio", 2014, None, vec![])).unwrap();
    let err = db
        .create_maintenance(car.id, 20, "Inspection", date(2024, 1, 1))
        .unwrap_err();
    assert!(matches!(err, GarageError::GarageNotFound { id: 20 }));
}

#[test]
fn test_list_maintenances_date_bounds_are_inclusive() {
    let (_temp_file, mut db) = create_test_db();
    let garage = db.create_garage(&garage_input("North", "Leeds", 2)).unwrap();
    let car = db.create_car(&car_input("Kia", "Ceed", 2018, None, vec![])).unwrap();

    for day in [1, 15, 31] {
        db.create_maintenance(car.id, garage.id, "Check", date(2024, 1, day))
            .unwrap();
    }
    db.create_maintenance(car.id, garage.id, "Check", date(2024, 2, 1))
        .unwrap();

    let filter = MaintenanceFilter::for_garage_between(garage.id, date(2024, 1, 1), date(2024, 1, 31));
    let dates: Vec<_> = db
        .list_maintenances(Some(&filter))
        .unwrap()
        .into_iter()
        .map(|m| m.scheduled_date)
        .collect();
    assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 15), date(2024, 1, 31)]);
}

#[test]
fn test_delete_garage_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let garage = db.create_garage(&garage_input("North", "Leeds", 2)).unwrap();
    let car = db
        .create_car(&car_input("Ford", "Ka", 2009, None, vec![garage.id]))
        .unwrap();
    db.create_maintenance(car.id, garage.id, "Check", date(2024, 5, 5))
        .unwrap();

    assert!(db.delete_garage(garage.id).unwrap());
    assert!(!db.delete_garage(garage.id).unwrap());

    let car = db.get_car(car.id).unwrap().expect("Car should survive");
    assert!(car.garages.is_empty());
    assert!(db.list_maintenances(None).unwrap().is_empty());
}

#[test]
fn test_delete_car_cascades_to_maintenance() {
    let (_temp_file, mut db) = create_test_db();
    let garage = db.create_garage(&garage_input("North", "Leeds", 2)).unwrap();
    let car = db
        .create_car(&car_input("Ford", "Ka", 2009, None, vec![garage.id]))
        .unwrap();
    db.create_maintenance(car.id, garage.id, "Check", date(2024, 5, 5))
        .unwrap();

    assert!(db.delete_car(car.id).unwrap());
    assert!(db.list_maintenances(None).unwrap().is_empty());
    assert!(db.get_garage(garage.id).unwrap().is_some());
}
