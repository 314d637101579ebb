//! Display implementations for domain models.

use std::fmt;

use crate::models::{Car, Garage, MaintenanceDetails};

impl fmt::Display for Garage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}", self.location)?;
        writeln!(f, "- **City**: {}", self.city)?;
        writeln!(f, "- **Capacity**: {} per day", self.capacity)?;
        writeln!(f)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.display_name(), self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Production year**: {}", self.production_year)?;
        if let Some(plate) = &self.license_plate {
            writeln!(f, "- **License plate**: {plate}")?;
        }

        if self.garages.is_empty() {
            writeln!(f, "- **Garages**: none")?;
        } else {
            let names: Vec<String> = self
                .garages
                .iter()
                .map(|g| format!("{} (ID: {})", g.name, g.id))
                .collect();
            writeln!(f, "- **Garages**: {}", names.join(", "))?;
        }

        writeln!(f)
    }
}

impl fmt::Display for MaintenanceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.service_type, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Scheduled**: {}", self.scheduled_date)?;
        writeln!(f, "- **Car**: {} (ID: {})", self.car_name, self.car_id)?;
        writeln!(f, "- **Garage**: {} (ID: {})", self.garage_name, self.garage_id)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn garage() -> Garage {
        Garage {
            id: 2,
            name: "Eastside".to_string(),
            location: "9 Dock St".to_string(),
            city: "Portsmouth".to_string(),
            capacity: 3,
        }
    }

    #[test]
    fn test_car_display_lists_garages() {
        let mut car = Car {
            id: 7,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            production_year: 2018,
            license_plate: None,
            garages: vec![],
        };

        let output = car.to_string();
        assert!(output.starts_with("## Toyota Corolla (ID: 7)"));
        assert!(output.contains("- **Garages**: none"));
        assert!(!output.contains("License plate"));

        car.license_plate = Some("KX-42".to_string());
        car.garages.push(garage());
        let output = car.to_string();
        assert!(output.contains("- **License plate**: KX-42"));
        assert!(output.contains("- **Garages**: Eastside (ID: 2)"));
    }

    #[test]
    fn test_maintenance_display() {
        let details = MaintenanceDetails {
            id: 11,
            car_id: 7,
            car_name: "Toyota Corolla".to_string(),
            service_type: "Brake check".to_string(),
            scheduled_date: date(2024, 5, 20),
            garage_id: 2,
            garage_name: "Eastside".to_string(),
        };

        let output = details.to_string();
        assert!(output.contains("## Brake check (ID: 11)"));
        assert!(output.contains("- **Scheduled**: 2024-05-20"));
        assert!(output.contains("- **Garage**: Eastside (ID: 2)"));
    }
}
