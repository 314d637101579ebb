//! Markdown formatting for terminal output.
//!
//! Domain models implement [`std::fmt::Display`] directly ([`models`]);
//! collections and operation outcomes are wrapped in newtypes so each output
//! context formats consistently. Everything here produces markdown, which the
//! CLI renders with `termimad`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Collections &  │    │    Markdown     │
//! │ (Garage, Car…)  │───▶│ Result Wrappers │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use garage_core::{display::CreateResult, models::Garage};
//!
//! let garage = Garage {
//!     id: 1,
//!     name: "North".to_string(),
//!     location: "1 Main St".to_string(),
//!     city: "Springfield".to_string(),
//!     capacity: 4,
//! };
//!
//! let output = CreateResult::new(garage).to_string();
//! assert!(output.contains("Created garage with ID: 1"));
//! assert!(output.contains("- **Capacity**: 4 per day"));
//! ```

pub mod collections;
pub mod models;
pub mod reports;
pub mod results;

pub use collections::{Cars, Garages, Maintenances};
pub use reports::MonthlyRequestsReport;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
