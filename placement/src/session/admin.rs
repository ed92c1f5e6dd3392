//! Administrator menu: manage offers and assign students.

use std::io::{self, BufRead, Write};

use crate::core::registry::Registry;
use crate::core::types::{MIN_OFFER_REF, OfferQuery};
use crate::session::console::Console;
use crate::session::render::{filled_line, offer_line, offer_list, refusal};
use crate::session::{choose, print_lines};

const MENU: &[&str] = &[
    "1. List all offers",
    "2. Add an offer",
    "3. Remove an offer",
    "4. Search offers",
    "5. List open offers (1 or 2 candidates)",
    "6. List unfilled offers",
    "7. List filled offers",
    "8. Offer details",
    "9. Assign a student to an offer",
    "0. Back",
];

pub(super) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "Administrator", MENU)? else {
            return Ok(());
        };
        let done = match choice {
            0 => return Ok(()),
            1 => {
                print_lines(console, offer_list(registry.offers().iter()))?;
                false
            }
            2 => add(console, registry)?,
            3 => remove(console, registry)?,
            4 => search(console, registry)?,
            5 => {
                print_lines(console, offer_list(registry.list_open()))?;
                false
            }
            6 => {
                print_lines(console, offer_list(registry.list_unfilled()))?;
                false
            }
            7 => {
                let filled = registry.list_filled();
                if filled.is_empty() {
                    console.say("(no offer)")?;
                }
                print_lines(console, filled.iter().map(filled_line))?;
                false
            }
            8 => info(console, registry)?,
            9 => assign(console, registry)?,
            _ => {
                console.say("Invalid choice.")?;
                false
            }
        };
        if done {
            return Ok(());
        }
    }
}

// Each action returns `true` when input ran out mid-prompt.

fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<bool> {
    let Some(reference) = console.ask_where::<u32>(
        "Offer reference",
        &format!(">= {}", MIN_OFFER_REF),
        |value| *value >= MIN_OFFER_REF,
    )?
    else {
        return Ok(true);
    };
    let Some(department) = console.ask::<u32>("Department")? else {
        return Ok(true);
    };
    match registry.add_offer(reference, department) {
        Ok(offer) => {
            let line = offer_line(offer);
            console.say(format!("Added {}.", line))?;
        }
        Err(err) => console.say(refusal(&err))?,
    }
    Ok(false)
}

fn remove<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<bool> {
    let Some(reference) = console.ask::<u32>("Offer reference")? else {
        return Ok(true);
    };
    match registry.remove_offer(reference) {
        Ok(offer) => console.say(format!("Removed offer {}.", offer.reference))?,
        Err(err) => console.say(refusal(&err))?,
    }
    Ok(false)
}

fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> io::Result<bool> {
    let Some(kind) = choose(console, "Search by", &["1. Reference", "2. Department"])? else {
        return Ok(true);
    };
    let Some(value) = console.ask::<u32>("Value")? else {
        return Ok(true);
    };
    let query = match kind {
        1 => OfferQuery::Reference(value),
        2 => OfferQuery::Department(value),
        _ => {
            console.say("Invalid choice.")?;
            return Ok(false);
        }
    };
    print_lines(console, offer_list(registry.search(query)))?;
    Ok(false)
}

fn info<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> io::Result<bool> {
    let Some(reference) = console.ask::<u32>("Offer reference")? else {
        return Ok(true);
    };
    match registry.info(reference) {
        Ok(offer) => console.say(offer_line(offer))?,
        Err(err) => console.say(refusal(&err))?,
    }
    Ok(false)
}

fn assign<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<bool> {
    let Some(reference) = console.ask::<u32>("Offer reference")? else {
        return Ok(true);
    };
    let candidates = match registry.candidates(reference) {
        Ok(candidates) => candidates,
        Err(err) => {
            console.say(refusal(&err))?;
            return Ok(false);
        }
    };
    if candidates.is_empty() {
        console.say(format!("Offer {} has no candidate.", reference))?;
        return Ok(false);
    }
    let listed: Vec<String> = candidates.iter().map(|id| id.to_string()).collect();
    console.say(format!("Candidates: {}", listed.join(", ")))?;

    let Some(student) = console.ask::<u32>("Student to assign")? else {
        return Ok(true);
    };
    match registry.assign(reference, student) {
        Ok(()) => console.say(format!(
            "Student {} assigned to offer {}.",
            student, reference
        ))?,
        Err(err) => console.say(refusal(&err))?,
    }
    Ok(false)
}
