//! In-memory store for the showroom session

pub mod inventory;

pub use inventory::{Inventory, SpeedUpdate};
