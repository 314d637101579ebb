//! Command-line subcommands and their handlers.
//!
//! Each subcommand has a clap argument struct that converts into the core
//! parameter type, keeping clap attributes out of `garage-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → GarageService
//! ```
//!
//! [`Cli`] dispatches the parsed subcommands to the service and renders the
//! markdown produced by the core display types.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use garage_core::{
    Cars, CreateResult, DeleteResult, GarageService, Garages, Maintenances,
    MonthlyRequestsReport, UpdateResult,
    models::{Car, Garage, MaintenanceDetails},
    params::{
        CarInput, DailyReport, GarageInput, Id, ListCars, ListGarages, ListMaintenances,
        MaintenanceInput, MonthlyReport,
    },
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Garage arguments
// ============================================================================

/// Register a new garage
#[derive(Args)]
pub struct CreateGarageArgs {
    /// Name of the garage
    pub name: String,
    /// Street address or other location hint
    #[arg(long)]
    pub location: String,
    /// City the garage is in
    #[arg(long)]
    pub city: String,
    /// Maintenance requests the garage can take per day
    #[arg(long)]
    pub capacity: u32,
}

impl From<CreateGarageArgs> for GarageInput {
    fn from(val: CreateGarageArgs) -> Self {
        GarageInput {
            name: val.name,
            location: val.location,
            city: val.city,
            capacity: val.capacity,
        }
    }
}

/// List garages
#[derive(Args)]
pub struct ListGaragesArgs {
    /// Only garages whose city contains this text (case-insensitive)
    #[arg(long)]
    pub city: Option<String>,
}

impl From<ListGaragesArgs> for ListGarages {
    fn from(val: ListGaragesArgs) -> Self {
        ListGarages { city: val.city }
    }
}

/// Change fields of a garage; omitted fields keep their value
#[derive(Args)]
pub struct UpdateGarageArgs {
    /// ID of the garage to update
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub capacity: Option<u32>,
}

impl UpdateGarageArgs {
    /// Applies the given flags over `current`, returning the replacement
    /// input and the names of the fields that changed.
    fn merge(self, current: &Garage) -> (GarageInput, Vec<String>) {
        let mut changes = Vec::new();
        let input = GarageInput {
            name: merge_field("name", self.name, &current.name, &mut changes),
            location: merge_field("location", self.location, &current.location, &mut changes),
            city: merge_field("city", self.city, &current.city, &mut changes),
            capacity: merge_field("capacity", self.capacity, &current.capacity, &mut changes),
        };
        (input, changes)
    }
}

/// Identifies a single record
#[derive(Args)]
pub struct IdArgs {
    /// Unique identifier of the record
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Garage management commands
#[derive(Subcommand)]
pub enum GarageCommands {
    /// Register a new garage
    #[command(alias = "new")]
    Create(CreateGarageArgs),
    /// List garages
    #[command(alias = "ls")]
    List(ListGaragesArgs),
    /// Show a garage
    Show(IdArgs),
    /// Update a garage
    Update(UpdateGarageArgs),
    /// Delete a garage with its car associations and maintenance records
    #[command(alias = "rm")]
    Delete(IdArgs),
}

// ============================================================================
// Car arguments
// ============================================================================

/// Register a new car
#[derive(Args)]
pub struct CreateCarArgs {
    /// Manufacturer, e.g. "Toyota"
    pub make: String,
    /// Model name, e.g. "Corolla"
    pub model: String,
    /// Production year
    #[arg(long)]
    pub year: i32,
    /// License plate, unique across all cars
    #[arg(long)]
    pub plate: Option<String>,
    /// Garages the car is registered with, comma-separated IDs
    #[arg(long, value_delimiter = ',')]
    pub garages: Vec<u64>,
}

impl From<CreateCarArgs> for CarInput {
    fn from(val: CreateCarArgs) -> Self {
        CarInput {
            make: val.make,
            model: val.model,
            production_year: val.year,
            license_plate: val.plate,
            garage_ids: val.garages,
        }
    }
}

/// List cars
#[derive(Args)]
pub struct ListCarsArgs {
    /// Only cars whose make contains this text (case-insensitive)
    #[arg(long)]
    pub make: Option<String>,
    /// Only cars registered with this garage
    #[arg(long)]
    pub garage_id: Option<u64>,
    /// Earliest production year, inclusive
    #[arg(long)]
    pub from_year: Option<i32>,
    /// Latest production year, inclusive
    #[arg(long)]
    pub to_year: Option<i32>,
}

impl From<ListCarsArgs> for ListCars {
    fn from(val: ListCarsArgs) -> Self {
        ListCars {
            car_make: val.make,
            garage_id: val.garage_id,
            from_year: val.from_year,
            to_year: val.to_year,
        }
    }
}

/// Change fields of a car; omitted fields keep their value
#[derive(Args)]
pub struct UpdateCarArgs {
    /// ID of the car to update
    pub id: u64,
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    /// New license plate; an empty value removes it
    #[arg(long)]
    pub plate: Option<String>,
    /// Replaces the garage associations, comma-separated IDs
    #[arg(long, value_delimiter = ',')]
    pub garages: Option<Vec<u64>>,
}

impl UpdateCarArgs {
    fn merge(self, current: &Car) -> (CarInput, Vec<String>) {
        let mut changes = Vec::new();
        let current_plate = current.license_plate.clone().unwrap_or_default();
        let current_garages: Vec<u64> = current.garages.iter().map(|g| g.id).collect();

        let plate = merge_field("license plate", self.plate, &current_plate, &mut changes);
        let input = CarInput {
            make: merge_field("make", self.make, &current.make, &mut changes),
            model: merge_field("model", self.model, &current.model, &mut changes),
            production_year: merge_field(
                "production year",
                self.year,
                &current.production_year,
                &mut changes,
            ),
            license_plate: Some(plate),
            garage_ids: merge_field("garages", self.garages, &current_garages, &mut changes),
        };
        (input, changes)
    }
}

/// Car management commands
#[derive(Subcommand)]
pub enum CarCommands {
    /// Register a new car
    #[command(alias = "new")]
    Create(CreateCarArgs),
    /// List cars
    #[command(alias = "ls")]
    List(ListCarsArgs),
    /// Show a car and its garages
    Show(IdArgs),
    /// Update a car
    Update(UpdateCarArgs),
    /// Delete a car and its maintenance records
    #[command(alias = "rm")]
    Delete(IdArgs),
}

// ============================================================================
// Maintenance arguments
// ============================================================================

/// Schedule a maintenance visit
#[derive(Args)]
pub struct CreateMaintenanceArgs {
    /// Kind of service, e.g. "Oil change"
    pub service_type: String,
    /// Day of the visit, YYYY-MM-DD
    pub scheduled_date: String,
    /// Car to service
    #[arg(long)]
    pub car_id: u64,
    /// Garage performing the service
    #[arg(long)]
    pub garage_id: u64,
}

impl From<CreateMaintenanceArgs> for MaintenanceInput {
    fn from(val: CreateMaintenanceArgs) -> Self {
        MaintenanceInput {
            garage_id: val.garage_id,
            car_id: val.car_id,
            service_type: val.service_type,
            scheduled_date: val.scheduled_date,
        }
    }
}

/// List scheduled maintenance
#[derive(Args)]
pub struct ListMaintenancesArgs {
    #[arg(long)]
    pub car_id: Option<u64>,
    #[arg(long)]
    pub garage_id: Option<u64>,
    /// Earliest scheduled date, inclusive, YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,
    /// Latest scheduled date, inclusive, YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<String>,
}

impl From<ListMaintenancesArgs> for ListMaintenances {
    fn from(val: ListMaintenancesArgs) -> Self {
        ListMaintenances {
            car_id: val.car_id,
            garage_id: val.garage_id,
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// Change fields of a maintenance record; omitted fields keep their value
#[derive(Args)]
pub struct UpdateMaintenanceArgs {
    /// ID of the maintenance record to update
    pub id: u64,
    #[arg(long)]
    pub service_type: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub scheduled_date: Option<String>,
    #[arg(long)]
    pub car_id: Option<u64>,
    #[arg(long)]
    pub garage_id: Option<u64>,
}

impl UpdateMaintenanceArgs {
    fn merge(self, current: &MaintenanceDetails) -> (MaintenanceInput, Vec<String>) {
        let mut changes = Vec::new();
        let input = MaintenanceInput {
            garage_id: merge_field("garage", self.garage_id, &current.garage_id, &mut changes),
            car_id: merge_field("car", self.car_id, &current.car_id, &mut changes),
            service_type: merge_field(
                "service type",
                self.service_type,
                &current.service_type,
                &mut changes,
            ),
            scheduled_date: merge_field(
                "scheduled date",
                self.scheduled_date,
                &current.scheduled_date.to_string(),
                &mut changes,
            ),
        };
        (input, changes)
    }
}

/// Maintenance management commands
#[derive(Subcommand)]
pub enum MaintenanceCommands {
    /// Schedule a maintenance visit
    #[command(alias = "new")]
    Create(CreateMaintenanceArgs),
    /// List scheduled maintenance, ordered by date
    #[command(alias = "ls")]
    List(ListMaintenancesArgs),
    /// Show a maintenance record
    Show(IdArgs),
    /// Update a maintenance record
    Update(UpdateMaintenanceArgs),
    /// Delete a maintenance record
    #[command(alias = "rm")]
    Delete(IdArgs),
}

// ============================================================================
// Report arguments
// ============================================================================

/// Requests and remaining capacity per day
#[derive(Args)]
pub struct DailyReportArgs {
    pub garage_id: u64,
    /// First day, YYYY-MM-DD
    pub start_date: String,
    /// Last day, YYYY-MM-DD
    pub end_date: String,
}

impl From<DailyReportArgs> for DailyReport {
    fn from(val: DailyReportArgs) -> Self {
        DailyReport {
            garage_id: val.garage_id,
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// Maintenance requests per month
#[derive(Args)]
pub struct MonthlyReportArgs {
    pub garage_id: u64,
    /// First month, YYYY-MM
    pub start_month: String,
    /// Last month, YYYY-MM
    pub end_month: String,
}

impl From<MonthlyReportArgs> for MonthlyReport {
    fn from(val: MonthlyReportArgs) -> Self {
        MonthlyReport {
            garage_id: val.garage_id,
            start_month: val.start_month,
            end_month: val.end_month,
        }
    }
}

/// Report commands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Daily availability of a garage
    Daily(DailyReportArgs),
    /// Monthly maintenance requests of a garage
    Monthly(MonthlyReportArgs),
}

/// Picks the flag value when given, recording `name` if it differs from the
/// stored one.
fn merge_field<T: Clone + PartialEq>(
    name: &str,
    new: Option<T>,
    current: &T,
    changes: &mut Vec<String>,
) -> T {
    match new {
        Some(value) => {
            if value != *current {
                changes.push(format!("Changed {name}"));
            }
            value
        }
        None => current.clone(),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs CLI commands against the service and renders the results.
pub struct Cli {
    service: GarageService,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(service: GarageService, renderer: TerminalRenderer) -> Self {
        Self { service, renderer }
    }

    fn render(&self, output: impl ToString) {
        self.renderer.render(&output.to_string());
    }

    pub async fn handle_garage_command(self, command: GarageCommands) -> Result<()> {
        match command {
            GarageCommands::Create(args) => {
                let garage = self
                    .service
                    .create_garage(&args.into())
                    .await
                    .context("Failed to create garage")?;
                self.render(CreateResult::new(garage));
            }
            GarageCommands::List(args) => self.list_garages(args.into()).await?,
            GarageCommands::Show(args) => {
                let garage = self
                    .service
                    .get_garage(&args.into())
                    .await
                    .context("Failed to show garage")?;
                self.render(garage);
            }
            GarageCommands::Update(args) => {
                let id = Id { id: args.id };
                let current = self
                    .service
                    .get_garage(&id)
                    .await
                    .context("Failed to update garage")?;
                let (input, changes) = args.merge(&current);
                let garage = self
                    .service
                    .update_garage(&id, &input)
                    .await
                    .context("Failed to update garage")?;
                self.render(UpdateResult::with_changes(garage, changes));
            }
            GarageCommands::Delete(args) => {
                let id = Id::from(args);
                let garage = self
                    .service
                    .get_garage(&id)
                    .await
                    .context("Failed to delete garage")?;
                self.service
                    .delete_garage(&id)
                    .await
                    .context("Failed to delete garage")?;
                self.render(DeleteResult::new(garage));
            }
        }
        Ok(())
    }

    /// Lists garages; also the default when no subcommand is given.
    pub async fn list_garages(&self, params: ListGarages) -> Result<()> {
        let garages = self
            .service
            .list_garages(&params)
            .await
            .context("Failed to list garages")?;
        self.render(Garages(garages));
        Ok(())
    }

    pub async fn handle_car_command(self, command: CarCommands) -> Result<()> {
        match command {
            CarCommands::Create(args) => {
                let car = self
                    .service
                    .create_car(&args.into())
                    .await
                    .context("Failed to create car")?;
                self.render(CreateResult::new(car));
            }
            CarCommands::List(args) => {
                let cars = self
                    .service
                    .list_cars(&args.into())
                    .await
                    .context("Failed to list cars")?;
                self.render(Cars(cars));
            }
            CarCommands::Show(args) => {
                let car = self
                    .service
                    .get_car(&args.into())
                    .await
                    .context("Failed to show car")?;
                self.render(car);
            }
            CarCommands::Update(args) => {
                let id = Id { id: args.id };
                let current = self
                    .service
                    .get_car(&id)
                    .await
                    .context("Failed to update car")?;
                let (input, changes) = args.merge(&current);
                let car = self
                    .service
                    .update_car(&id, &input)
                    .await
                    .context("Failed to update car")?;
                self.render(UpdateResult::with_changes(car, changes));
            }
            CarCommands::Delete(args) => {
                let id = Id::from(args);
                let car = self
                    .service
                    .get_car(&id)
                    .await
                    .context("Failed to delete car")?;
                self.service
                    .delete_car(&id)
                    .await
                    .context("Failed to delete car")?;
                self.render(DeleteResult::new(car));
            }
        }
        Ok(())
    }

    pub async fn handle_maintenance_command(self, command: MaintenanceCommands) -> Result<()> {
        match command {
            MaintenanceCommands::Create(args) => {
                let details = self
                    .service
                    .create_maintenance(&args.into())
                    .await
                    .context("Failed to schedule maintenance")?;
                self.render(CreateResult::new(details));
            }
            MaintenanceCommands::List(args) => {
                let records = self
                    .service
                    .list_maintenances(&args.into())
                    .await
                    .context("Failed to list maintenance")?;
                self.render(Maintenances(records));
            }
            MaintenanceCommands::Show(args) => {
                let details = self
                    .service
                    .get_maintenance(&args.into())
                    .await
                    .context("Failed to show maintenance")?;
                self.render(details);
            }
            MaintenanceCommands::Update(args) => {
                let id = Id { id: args.id };
                let current = self
                    .service
                    .get_maintenance(&id)
                    .await
                    .context("Failed to update maintenance")?;
                let (input, changes) = args.merge(&current);
                let details = self
                    .service
                    .update_maintenance(&id, &input)
                    .await
                    .context("Failed to update maintenance")?;
                self.render(UpdateResult::with_changes(details, changes));
            }
            MaintenanceCommands::Delete(args) => {
                let id = Id::from(args);
                let details = self
                    .service
                    .get_maintenance(&id)
                    .await
                    .context("Failed to delete maintenance")?;
                self.service
                    .delete_maintenance(&id)
                    .await
                    .context("Failed to delete maintenance")?;
                self.render(DeleteResult::new(details));
            }
        }
        Ok(())
    }

    pub async fn handle_report_command(self, command: ReportCommands) -> Result<()> {
        match command {
            ReportCommands::Daily(args) => {
                let report = self
                    .service
                    .daily_availability_report(&args.into())
                    .await
                    .context("Failed to compute daily availability")?;
                self.render(report);
            }
            ReportCommands::Monthly(args) => {
                let params = MonthlyReport::from(args);
                let months = self
                    .service
                    .monthly_requests_report(&params)
                    .await
                    .context("Failed to compute monthly requests")?;
                self.render(MonthlyRequestsReport::new(params.garage_id, months));
            }
        }
        Ok(())
    }
}
