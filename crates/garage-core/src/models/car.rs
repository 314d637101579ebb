//! Car model definition.

use serde::{Deserialize, Serialize};

use super::Garage;

/// A car, together with the garages it is registered with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier for the car
    pub id: u64,

    /// Manufacturer, e.g. "Toyota"
    pub make: String,

    /// Model name, e.g. "Corolla"
    pub model: String,

    /// Year the car was produced
    pub production_year: i32,

    /// License plate; unique across all cars when present
    pub license_plate: Option<String>,

    /// Garages the car is associated with (eagerly loaded)
    #[serde(default)]
    pub garages: Vec<Garage>,
}

impl Car {
    /// Human-readable name combining make and model.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
