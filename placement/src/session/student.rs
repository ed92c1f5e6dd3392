//! Student menu: browse offers, apply, review applications.

use std::io::{self, BufRead, Write};

use crate::core::registry::{Applications, Registry};
use crate::core::types::StudentId;
use crate::session::console::Console;
use crate::session::render::{offer_list, refusal};
use crate::session::{choose, print_lines};

const MENU: &[&str] = &[
    "1. List open offers (1 or 2 candidates)",
    "2. List unfilled offers",
    "3. Apply to an offer",
    "4. My applications",
    "0. Back",
];

pub(super) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<()> {
    let Some(id) = console.ask::<StudentId>("Student number")? else {
        return Ok(());
    };
    if let Err(err) = registry.student(id) {
        console.say(refusal(&err))?;
        return Ok(());
    }

    loop {
        let Some(choice) = choose(console, &format!("Student {}", id), MENU)? else {
            return Ok(());
        };
        match choice {
            0 => return Ok(()),
            1 => print_lines(console, offer_list(registry.list_open()))?,
            2 => print_lines(console, offer_list(registry.list_unfilled()))?,
            3 => {
                let Some(reference) = console.ask::<u32>("Offer reference")? else {
                    return Ok(());
                };
                match registry.apply(id, reference) {
                    Ok(()) => console.say(format!("Applied to offer {}.", reference))?,
                    Err(err) => console.say(refusal(&err))?,
                }
            }
            4 => show_applications(console, registry, id)?,
            _ => console.say("Invalid choice.")?,
        }
    }
}

fn show_applications<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
    id: StudentId,
) -> io::Result<()> {
    match registry.view_applications(id) {
        Ok(Applications::Assigned {
            reference,
            department,
        }) => {
            let department = department
                .map_or_else(|| "unknown".to_string(), |code| code.to_string());
            console.say(format!(
                "Assigned to offer {} (department {}).",
                reference, department
            ))
        }
        Ok(Applications::Pending(offers)) => {
            console.say(format!("{} pending application(s):", offers.len()))?;
            print_lines(console, offer_list(offers))
        }
        Err(err) => console.say(refusal(&err)),
    }
}
