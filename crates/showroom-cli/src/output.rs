//! Output formatting for vehicle blocks and listings

use showroom_domain::service::describe;
use showroom_domain::Vehicle;
use showroom_store::Inventory;
use showroom_types::Result;
use std::io::Write;

const SEPARATOR: &str = "-----------------------------------";

/// Print one vehicle's attribute block, range last
pub fn print_vehicle<W: Write>(out: &mut W, vehicle: &Vehicle) -> Result<()> {
    for (label, value) in describe(vehicle) {
        writeln!(out, "{}: {}", label, value)?;
    }
    Ok(())
}

/// Print the full listing in insertion order, one separator per vehicle
pub fn print_all<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    if inventory.is_empty() {
        writeln!(out, "No vehicles in the inventory.")?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "----- Vehicles in the inventory -----")?;
    for vehicle in inventory.iter() {
        print_vehicle(out, vehicle)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_domain::VehicleKind;

    fn sample() -> Vehicle {
        Vehicle {
            production_year: 2022,
            model_name: "Tesla3".to_string(),
            max_speed: 225,
            weight: 1800.0,
            kind: VehicleKind::Electric {
                battery_capacity: 75.0,
            },
        }
    }

    #[test]
    fn test_print_vehicle_block() {
        let mut out = Vec::new();
        print_vehicle(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Model name: Tesla3"));
        assert!(text.contains("Maximum speed: 225 km/h"));
        assert!(text.contains("Battery capacity: 75 kWh"));
        assert!(text.ends_with("Range (electric): 243000000.00\n"));
    }

    #[test]
    fn test_print_all_empty() {
        let mut out = Vec::new();
        print_all(&mut out, &Inventory::new()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No vehicles in the inventory.\n"
        );
    }

    #[test]
    fn test_print_all_separators() {
        let mut inventory = Inventory::new();
        inventory.add(sample());
        inventory.add(sample());
        let mut out = Vec::new();
        print_all(&mut out, &inventory).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(SEPARATOR).count(), 2);
    }
}
