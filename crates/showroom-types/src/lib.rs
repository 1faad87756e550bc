//! Core types for the showroom inventory

mod error;

pub use error::*;

use serde::{Deserialize, Serialize};

/// Vehicle class discriminant, determines which attributes exist and
/// which range formula applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    FossilFuel,
    Electric,
    Hybrid,
}

impl VehicleClass {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::FossilFuel => "fossil-fuel",
            VehicleClass::Electric => "electric",
            VehicleClass::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
