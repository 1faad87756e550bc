//! Session inventory of vehicles

use showroom_domain::Vehicle;

/// Outcome of a speed optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUpdate {
    /// Speed was changed from `old` to `new` (km/h)
    Updated { old: i32, new: i32 },
    /// No vehicle with the requested model name exists
    NotFound,
}

/// Ordered in-memory collection of vehicles plus a transaction log
///
/// Vehicles are owned exclusively by the inventory once added; callers get
/// borrowed views. There is no deletion, entries live until the session
/// ends.
#[derive(Debug, Default)]
pub struct Inventory {
    vehicles: Vec<Vehicle>,
    transactions: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle
    ///
    /// Appends in insertion order. Model names are not checked for
    /// uniqueness.
    pub fn add(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Record a transaction note
    ///
    /// Append-only; nothing in the program reads these back yet.
    pub fn add_transaction(&mut self, text: impl Into<String>) {
        self.transactions.push(text.into());
    }

    /// Get the recorded transaction notes in order
    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }

    /// Get the "best selling" vehicle
    ///
    /// Placeholder heuristic: returns the first vehicle ever added. There
    /// is no sales data in this program; keep the literal behavior until
    /// one exists.
    pub fn best_selling(&self) -> Option<&Vehicle> {
        self.vehicles.first()
    }

    /// Get the vehicle with the greatest range
    ///
    /// Ties are broken by insertion order (earliest wins). `None` when the
    /// inventory is empty.
    pub fn max_range_vehicle(&self) -> Option<&Vehicle> {
        let mut best: Option<(&Vehicle, f64)> = None;
        for vehicle in &self.vehicles {
            let range = vehicle.range();
            match best {
                Some((_, best_range)) if range > best_range => best = Some((vehicle, range)),
                Some(_) => {}
                None => best = Some((vehicle, range)),
            }
        }
        best.map(|(vehicle, _)| vehicle)
    }

    /// Adjust a vehicle's maximum speed by a percentage
    ///
    /// Matches the first vehicle (insertion order) whose model name equals
    /// `model_name` exactly, case-sensitive. The new speed is
    /// `old * (1 + percent/100)` truncated toward zero; `percent` may be
    /// negative.
    pub fn optimize_speed(&mut self, model_name: &str, percent: i32) -> SpeedUpdate {
        for vehicle in &mut self.vehicles {
            if vehicle.model_name == model_name {
                let old = vehicle.max_speed;
                let new = (old as f64 * (1.0 + percent as f64 / 100.0)) as i32;
                vehicle.max_speed = new;
                return SpeedUpdate::Updated { old, new };
            }
        }
        SpeedUpdate::NotFound
    }

    /// Iterate over all vehicles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter()
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
