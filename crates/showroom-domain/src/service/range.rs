//! Range formulas per vehicle class

/// Range of a fossil-fuel vehicle: sqrt(weight) * tank_capacity
pub fn fossil_range(weight: f64, tank_capacity: f64) -> f64 {
    weight.sqrt() * tank_capacity
}

/// Range of an electric vehicle: battery_capacity * weight²
pub fn electric_range(weight: f64, battery_capacity: f64) -> f64 {
    battery_capacity * weight * weight
}
