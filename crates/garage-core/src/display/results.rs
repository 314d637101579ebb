//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Car, Garage, MaintenanceDetails};

/// A displayable entity that create, update and delete outcomes can name.
pub trait Resource: fmt::Display {
    /// Lowercase kind used in messages, e.g. "garage"
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Short human-readable label used in delete confirmations.
    fn label(&self) -> String;
}

impl Resource for Garage {
    const KIND: &'static str = "garage";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Car {
    const KIND: &'static str = "car";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.display_name()
    }
}

impl Resource for MaintenanceDetails {
    const KIND: &'static str = "maintenance";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} on {}", self.service_type, self.scheduled_date)
    }
}

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the fields that changed so users see exactly what
/// was modified.
///
/// ```rust
/// use garage_core::{display::UpdateResult, models::Garage};
///
/// let garage = Garage {
///     id: 3,
///     name: "Harbour".to_string(),
///     location: "2 Quay Rd".to_string(),
///     city: "Bristol".to_string(),
///     capacity: 6,
/// };
///
/// let result = UpdateResult::with_changes(garage, vec!["capacity".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated garage with ID: 3"));
/// assert!(output.contains("- capacity"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changed fields.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}
