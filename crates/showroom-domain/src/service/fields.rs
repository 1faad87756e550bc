//! Field descriptors decoupling console I/O from vehicle construction
//!
//! `fields` gives the ordered prompt metadata for a class, `parse` builds a
//! vehicle from the ordered tokens collected against it, and `describe`
//! renders the attribute block for display. Keeping these pure lets the
//! interactive driver stay a thin loop and makes construction testable
//! without a terminal.

use crate::model::{Vehicle, VehicleKind};
use showroom_types::{Error, Result, VehicleClass};

/// Token kind expected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Word,
    Float,
}

/// One prompt in a vehicle's field sequence
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { label, kind }
}

// Common fields come first for every class: year, model, max speed, weight.
const YEAR: FieldSpec = field("Production start year", FieldKind::Int);
const MODEL: FieldSpec = field("Model name (no spaces)", FieldKind::Word);
const MAX_SPEED: FieldSpec = field("Maximum speed (km/h)", FieldKind::Int);
const WEIGHT: FieldSpec = field("Weight (kg)", FieldKind::Float);
const FUEL_TYPE: FieldSpec = field("Fuel type (petrol/diesel, no spaces)", FieldKind::Word);
const TANK_CAPACITY: FieldSpec = field("Tank capacity (liters)", FieldKind::Float);
const BATTERY_CAPACITY: FieldSpec = field("Battery capacity (kWh)", FieldKind::Float);

const FOSSIL_FIELDS: [FieldSpec; 6] = [YEAR, MODEL, MAX_SPEED, WEIGHT, FUEL_TYPE, TANK_CAPACITY];
const ELECTRIC_FIELDS: [FieldSpec; 5] = [YEAR, MODEL, MAX_SPEED, WEIGHT, BATTERY_CAPACITY];
const HYBRID_FIELDS: [FieldSpec; 7] = [
    YEAR,
    MODEL,
    MAX_SPEED,
    WEIGHT,
    FUEL_TYPE,
    TANK_CAPACITY,
    BATTERY_CAPACITY,
];

/// Ordered prompt sequence for a vehicle class
pub fn fields(class: VehicleClass) -> &'static [FieldSpec] {
    match class {
        VehicleClass::FossilFuel => &FOSSIL_FIELDS,
        VehicleClass::Electric => &ELECTRIC_FIELDS,
        VehicleClass::Hybrid => &HYBRID_FIELDS,
    }
}

fn parse_i32(label: &'static str, token: &str) -> Result<i32> {
    token.parse().map_err(|_| Error::InvalidField {
        label,
        value: token.to_string(),
    })
}

fn parse_f64(label: &'static str, token: &str) -> Result<f64> {
    token.parse().map_err(|_| Error::InvalidField {
        label,
        value: token.to_string(),
    })
}

/// Construct a vehicle from the ordered tokens for its class
///
/// Tokens must line up one-to-one with `fields(class)`.
pub fn parse(class: VehicleClass, tokens: &[&str]) -> Result<Vehicle> {
    let specs = fields(class);
    if tokens.len() != specs.len() {
        return Err(Error::FieldCount {
            expected: specs.len(),
            got: tokens.len(),
        });
    }

    let production_year = parse_i32(YEAR.label, tokens[0])?;
    let model_name = tokens[1].to_string();
    let max_speed = parse_i32(MAX_SPEED.label, tokens[2])?;
    let weight = parse_f64(WEIGHT.label, tokens[3])?;

    let kind = match class {
        VehicleClass::FossilFuel => VehicleKind::FossilFuel {
            fuel_type: tokens[4].to_string(),
            tank_capacity: parse_f64(TANK_CAPACITY.label, tokens[5])?,
        },
        VehicleClass::Electric => VehicleKind::Electric {
            battery_capacity: parse_f64(BATTERY_CAPACITY.label, tokens[4])?,
        },
        VehicleClass::Hybrid => VehicleKind::Hybrid {
            fuel_type: tokens[4].to_string(),
            tank_capacity: parse_f64(TANK_CAPACITY.label, tokens[5])?,
            battery_capacity: parse_f64(BATTERY_CAPACITY.label, tokens[6])?,
        },
    };

    Ok(Vehicle {
        production_year,
        model_name,
        max_speed,
        weight,
        kind,
    })
}

/// Ordered label/value pairs for a vehicle's display block
///
/// Common attributes first, then variant attributes, then the computed
/// range as the final line. Range values render with two decimals.
pub fn describe(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Production start year", vehicle.production_year.to_string()),
        ("Model name", vehicle.model_name.clone()),
        ("Maximum speed", format!("{} km/h", vehicle.max_speed)),
        ("Weight", format!("{} kg", vehicle.weight)),
    ];

    match &vehicle.kind {
        VehicleKind::FossilFuel {
            fuel_type,
            tank_capacity,
        } => {
            lines.push(("Fuel type", fuel_type.clone()));
            lines.push(("Tank capacity", format!("{} liters", tank_capacity)));
            lines.push(("Range (fossil)", format!("{:.2}", vehicle.range())));
        }
        VehicleKind::Electric { battery_capacity } => {
            lines.push(("Battery capacity", format!("{} kWh", battery_capacity)));
            lines.push(("Range (electric)", format!("{:.2}", vehicle.range())));
        }
        VehicleKind::Hybrid {
            fuel_type,
            tank_capacity,
            battery_capacity,
        } => {
            lines.push(("Fuel type", fuel_type.clone()));
            lines.push(("Tank capacity", format!("{} liters", tank_capacity)));
            lines.push(("Battery capacity", format!("{} kWh", battery_capacity)));
            lines.push(("Range (hybrid)", format!("{:.2}", vehicle.range())));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_common_first() {
        for class in [
            VehicleClass::FossilFuel,
            VehicleClass::Electric,
            VehicleClass::Hybrid,
        ] {
            let specs = fields(class);
            assert_eq!(specs[0].label, "Production start year");
            assert_eq!(specs[1].label, "Model name (no spaces)");
            assert_eq!(specs[2].label, "Maximum speed (km/h)");
            assert_eq!(specs[3].label, "Weight (kg)");
        }
        // Hybrid collects the fossil fields before battery capacity
        let hybrid = fields(VehicleClass::Hybrid);
        assert_eq!(hybrid[4].label, "Fuel type (petrol/diesel, no spaces)");
        assert_eq!(hybrid[5].label, "Tank capacity (liters)");
        assert_eq!(hybrid[6].label, "Battery capacity (kWh)");
    }

    #[test]
    fn test_parse_fossil() {
        let v = parse(
            VehicleClass::FossilFuel,
            &["2020", "FordFocus", "180", "1200", "petrol", "50"],
        )
        .unwrap();
        assert_eq!(v.production_year, 2020);
        assert_eq!(v.model_name, "FordFocus");
        assert_eq!(v.max_speed, 180);
        assert!((v.weight - 1200.0).abs() < f64::EPSILON);
        assert!((v.range() - 1732.05).abs() < 0.01);
    }

    #[test]
    fn test_parse_electric() {
        let v = parse(
            VehicleClass::Electric,
            &["2022", "Tesla3", "225", "1800", "75"],
        )
        .unwrap();
        assert!((v.range() - 243_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_hybrid() {
        let v = parse(
            VehicleClass::Hybrid,
            &["2021", "PriusX", "190", "1500", "petrol", "45", "10"],
        )
        .unwrap();
        match v.kind {
            VehicleKind::Hybrid {
                ref fuel_type,
                tank_capacity,
                battery_capacity,
            } => {
                assert_eq!(fuel_type, "petrol");
                assert!((tank_capacity - 45.0).abs() < f64::EPSILON);
                assert!((battery_capacity - 10.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected hybrid"),
        }
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse(VehicleClass::Electric, &["2022", "Tesla3"]).unwrap_err();
        assert!(matches!(
            err,
            showroom_types::Error::FieldCount {
                expected: 5,
                got: 2
            }
        ));
    }

    #[test]
    fn test_parse_malformed_number() {
        let err = parse(
            VehicleClass::Electric,
            &["2022", "Tesla3", "fast", "1800", "75"],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            showroom_types::Error::InvalidField { label, .. } if label == "Maximum speed (km/h)"
        ));
    }

    #[test]
    fn test_describe_ends_with_range() {
        let v = parse(
            VehicleClass::FossilFuel,
            &["2020", "FordFocus", "180", "1200", "petrol", "50"],
        )
        .unwrap();
        let lines = describe(&v);
        assert_eq!(lines[0].0, "Production start year");
        let (label, value) = lines.last().unwrap();
        assert_eq!(*label, "Range (fossil)");
        assert_eq!(value, "1732.05");
    }
}
