//! Route handlers. Each one decodes its request, calls the service and
//! returns JSON.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use garage_core::{
    DailyAvailability, GarageService,
    models::{Car, Garage, MaintenanceDetails},
    params::{
        CarInput, DailyReport, GarageInput, Id, ListCars, ListGarages, ListMaintenances,
        MaintenanceInput, MonthlyReport,
    },
    reports::MonthlyRequestsRow,
};
use serde_json::{Value, json};

use super::errors::ApiError;

type ApiResult<T> = Result<Json<T>, ApiError>;

const WELCOME_MESSAGE: &str = "Welcome to the garage maintenance API";

fn id(path: Result<Path<u64>, PathRejection>) -> Result<Id, ApiError> {
    let Path(id) = path?;
    Ok(Id { id })
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

// Garages

pub async fn list_garages(
    State(service): State<GarageService>,
    query: Result<Query<ListGarages>, QueryRejection>,
) -> ApiResult<Vec<Garage>> {
    let Query(params) = query?;
    Ok(Json(service.list_garages(&params).await?))
}

pub async fn create_garage(
    State(service): State<GarageService>,
    body: Result<Json<GarageInput>, JsonRejection>,
) -> ApiResult<Garage> {
    let Json(input) = body?;
    Ok(Json(service.create_garage(&input).await?))
}

pub async fn get_garage(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Garage> {
    Ok(Json(service.get_garage(&id(path)?).await?))
}

pub async fn update_garage(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<GarageInput>, JsonRejection>,
) -> ApiResult<Garage> {
    let id = id(path)?;
    let Json(input) = body?;
    Ok(Json(service.update_garage(&id, &input).await?))
}

pub async fn delete_garage(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<bool> {
    service.delete_garage(&id(path)?).await?;
    Ok(Json(true))
}

pub async fn daily_availability_report(
    State(service): State<GarageService>,
    query: Result<Query<DailyReport>, QueryRejection>,
) -> ApiResult<Vec<DailyAvailability>> {
    let Query(params) = query?;
    let report = service.daily_availability_report(&params).await?;
    Ok(Json(report.days))
}

// Cars

pub async fn list_cars(
    State(service): State<GarageService>,
    query: Result<Query<ListCars>, QueryRejection>,
) -> ApiResult<Vec<Car>> {
    let Query(params) = query?;
    Ok(Json(service.list_cars(&params).await?))
}

pub async fn create_car(
    State(service): State<GarageService>,
    body: Result<Json<CarInput>, JsonRejection>,
) -> ApiResult<Car> {
    let Json(input) = body?;
    Ok(Json(service.create_car(&input).await?))
}

pub async fn get_car(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Car> {
    Ok(Json(service.get_car(&id(path)?).await?))
}

pub async fn update_car(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<CarInput>, JsonRejection>,
) -> ApiResult<Car> {
    let id = id(path)?;
    let Json(input) = body?;
    Ok(Json(service.update_car(&id, &input).await?))
}

pub async fn delete_car(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<bool> {
    service.delete_car(&id(path)?).await?;
    Ok(Json(true))
}

// Maintenance

pub async fn list_maintenances(
    State(service): State<GarageService>,
    query: Result<Query<ListMaintenances>, QueryRejection>,
) -> ApiResult<Vec<MaintenanceDetails>> {
    let Query(params) = query?;
    Ok(Json(service.list_maintenances(&params).await?))
}

pub async fn create_maintenance(
    State(service): State<GarageService>,
    body: Result<Json<MaintenanceInput>, JsonRejection>,
) -> ApiResult<MaintenanceDetails> {
    let Json(input) = body?;
    Ok(Json(service.create_maintenance(&input).await?))
}

pub async fn get_maintenance(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<MaintenanceDetails> {
    Ok(Json(service.get_maintenance(&id(path)?).await?))
}

pub async fn update_maintenance(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<MaintenanceInput>, JsonRejection>,
) -> ApiResult<MaintenanceDetails> {
    let id = id(path)?;
    let Json(input) = body?;
    Ok(Json(service.update_maintenance(&id, &input).await?))
}

pub async fn delete_maintenance(
    State(service): State<GarageService>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<bool> {
    service.delete_maintenance(&id(path)?).await?;
    Ok(Json(true))
}

pub async fn monthly_requests_report(
    State(service): State<GarageService>,
    query: Result<Query<MonthlyReport>, QueryRejection>,
) -> ApiResult<Vec<MonthlyRequestsRow>> {
    let Query(params) = query?;
    let report = service.monthly_requests_report(&params).await?;
    Ok(Json(MonthlyRequestsRow::from_report(&report)))
}
