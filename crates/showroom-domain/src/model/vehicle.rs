//! Vehicle record and its variant tag

use crate::service::range::{electric_range, fossil_range};
use serde::{Deserialize, Serialize};
use showroom_types::VehicleClass;

/// A vehicle in the showroom inventory
///
/// `max_speed` is the only field mutated after construction (by the
/// speed-optimization operation). No value-range validation is performed:
/// a negative weight is accepted and produces a mathematically valid but
/// meaningless range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vehicle {
    /// Year production started
    pub production_year: i32,
    /// Model name, used as lookup key within a session (not enforced unique)
    pub model_name: String,
    /// Maximum speed (km/h)
    pub max_speed: i32,
    /// Weight (kg)
    pub weight: f64,
    /// Variant tag plus the fields relevant to it
    pub kind: VehicleKind,
}

/// Variant-specific attributes, one set per vehicle class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VehicleKind {
    FossilFuel {
        fuel_type: String,
        /// Tank capacity (liters)
        tank_capacity: f64,
    },
    Electric {
        /// Battery capacity (kWh)
        battery_capacity: f64,
    },
    Hybrid {
        fuel_type: String,
        tank_capacity: f64,
        battery_capacity: f64,
    },
}

impl Default for VehicleKind {
    fn default() -> Self {
        VehicleKind::FossilFuel {
            fuel_type: String::new(),
            tank_capacity: 0.0,
        }
    }
}

impl Vehicle {
    /// Get the class discriminant for this vehicle
    pub fn class(&self) -> VehicleClass {
        match self.kind {
            VehicleKind::FossilFuel { .. } => VehicleClass::FossilFuel,
            VehicleKind::Electric { .. } => VehicleClass::Electric,
            VehicleKind::Hybrid { .. } => VehicleClass::Hybrid,
        }
    }

    /// Compute the range metric from this vehicle's own attributes
    ///
    /// Pure and deterministic. The hybrid range reuses the exact same
    /// formulas as the standalone variants and sums them.
    pub fn range(&self) -> f64 {
        match self.kind {
            VehicleKind::FossilFuel { tank_capacity, .. } => {
                fossil_range(self.weight, tank_capacity)
            }
            VehicleKind::Electric { battery_capacity } => {
                electric_range(self.weight, battery_capacity)
            }
            VehicleKind::Hybrid {
                tank_capacity,
                battery_capacity,
                ..
            } => fossil_range(self.weight, tank_capacity) + electric_range(self.weight, battery_capacity),
        }
    }
}
