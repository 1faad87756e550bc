//! Interactive session state machine
//!
//! Menu -> Add* -> Menu until Exit, then the report sequence: full
//! listing, maximum-range model, one speed-optimization round, full
//! listing again. Written against `BufRead`/`Write` so tests can drive a
//! whole session from a string.

use crate::output;
use crate::prompt::Prompter;
use showroom_domain::service::{fields, parse};
use showroom_store::{Inventory, SpeedUpdate};
use showroom_types::{Result, VehicleClass};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Menu,
    AddFossil,
    AddElectric,
    AddHybrid,
    Exit,
}

/// Run one interactive session to completion
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let mut prompter = Prompter::new(input);
    let mut inventory = Inventory::new();
    let mut state = State::Menu;

    while state != State::Exit {
        state = match state {
            State::Menu => menu(&mut prompter, out)?,
            State::AddFossil => {
                add_vehicle(&mut prompter, out, &mut inventory, VehicleClass::FossilFuel)?;
                State::Menu
            }
            State::AddElectric => {
                add_vehicle(&mut prompter, out, &mut inventory, VehicleClass::Electric)?;
                State::Menu
            }
            State::AddHybrid => {
                add_vehicle(&mut prompter, out, &mut inventory, VehicleClass::Hybrid)?;
                State::Menu
            }
            State::Exit => State::Exit,
        };
    }

    report(&mut prompter, out, &mut inventory)
}

/// Show the menu and read one selection
fn menu<R: BufRead, W: Write>(prompter: &mut Prompter<R>, out: &mut W) -> Result<State> {
    writeln!(out)?;
    writeln!(out, "Choose the type of vehicle to add:")?;
    writeln!(out, "  1. Fossil-fuel vehicle")?;
    writeln!(out, "  2. Electric vehicle")?;
    writeln!(out, "  3. Hybrid vehicle")?;
    writeln!(out, "  4. Exit and show results")?;
    write!(out, "Your choice: ")?;
    out.flush()?;

    let token = prompter.next_token()?;
    match token.as_str() {
        "1" => Ok(State::AddFossil),
        "2" => Ok(State::AddElectric),
        "3" => Ok(State::AddHybrid),
        "4" => Ok(State::Exit),
        _ => {
            writeln!(out, "Invalid option. Try again.")?;
            Ok(State::Menu)
        }
    }
}

/// Collect one vehicle's fields in order and add it to the inventory
///
/// No cancellation once started; every prompt must be answered.
fn add_vehicle<R: BufRead, W: Write>(
    prompter: &mut Prompter<R>,
    out: &mut W,
    inventory: &mut Inventory,
    class: VehicleClass,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "New {} vehicle:", class.label())?;

    let mut tokens = Vec::new();
    for spec in fields(class) {
        tokens.push(prompter.read_field(out, spec)?);
    }
    let token_refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let vehicle = parse(class, &token_refs)?;

    writeln!(out, "Vehicle \"{}\" added successfully.", vehicle.model_name)?;
    inventory.add(vehicle);
    Ok(())
}

/// Post-loop report: listing, max-range model, one optimization, listing
fn report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R>,
    out: &mut W,
    inventory: &mut Inventory,
) -> Result<()> {
    output::print_all(out, inventory)?;

    if let Some(best) = inventory.max_range_vehicle() {
        writeln!(out)?;
        writeln!(
            out,
            "The model with the maximum range is: {} with range = {:.2}",
            best.model_name,
            best.range()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Speed optimization for one model.")?;
    let model = prompter.read_word(out, "Enter the model name (no spaces), e.g. FordFocus: ")?;
    let percent = prompter.read_int(out, "Enter the speed adjustment percent (e.g. 10 for +10%): ")?;

    match inventory.optimize_speed(&model, percent) {
        SpeedUpdate::Updated { old, new } => writeln!(
            out,
            "Maximum speed of model \"{}\" updated from {} km/h to {} km/h.",
            model, old, new
        )?,
        SpeedUpdate::NotFound => {
            writeln!(out, "Model \"{}\" was not found in the inventory.", model)?
        }
    }

    output::print_all(out, inventory)
}
