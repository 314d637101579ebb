//! Garage model definition.

use serde::{Deserialize, Serialize};

/// A garage that services cars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Garage {
    /// Unique identifier for the garage
    pub id: u64,

    /// Display name of the garage
    pub name: String,

    /// Street address or other location hint
    pub location: String,

    /// City the garage is in
    pub city: String,

    /// Maximum number of maintenance requests the garage can serve per day
    pub capacity: u32,
}
