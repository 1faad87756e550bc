//! Domain layer - vehicle model, range formulas, field descriptors

pub mod model;
pub mod service;

pub use model::{Vehicle, VehicleKind};
