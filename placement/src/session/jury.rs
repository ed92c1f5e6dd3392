//! Jury menu: record final grades.

use std::io::{self, BufRead, Write};

use crate::core::registry::Registry;
use crate::core::types::{MAX_SCORE, MIN_SCORE, Scores, StudentId};
use crate::session::console::Console;
use crate::session::render::{filled_line, refusal, student_line};
use crate::session::{choose, print_lines};

const MENU: &[&str] = &[
    "1. Grade a student",
    "2. Student record",
    "3. List filled offers",
    "0. Back",
];

pub(super) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "Jury", MENU)? else {
            return Ok(());
        };
        match choice {
            0 => return Ok(()),
            1 => {
                if grade(console, registry)? {
                    return Ok(());
                }
            }
            2 => {
                let Some(id) = console.ask::<StudentId>("Student number")? else {
                    return Ok(());
                };
                match registry.student(id) {
                    Ok(student) => console.say(student_line(student))?,
                    Err(err) => console.say(refusal(&err))?,
                }
            }
            3 => print_lines(console, registry.list_filled().iter().map(filled_line))?,
            _ => console.say("Invalid choice.")?,
        }
    }
}

/// Returns `true` when input ran out mid-prompt.
fn grade<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<bool> {
    let Some(id) = console.ask::<StudentId>("Student number")? else {
        return Ok(true);
    };
    if let Err(err) = registry.student(id) {
        console.say(refusal(&err))?;
        return Ok(false);
    }
    let mut values = [0.0; 3];
    for (value, label) in values.iter_mut().zip([
        "Company score",
        "Report score",
        "Presentation score",
    ]) {
        let Some(score) = console.ask::<f64>(&format!("{} ({}-{})", label, MIN_SCORE, MAX_SCORE))?
        else {
            return Ok(true);
        };
        *value = score;
    }

    let [company, report, presentation] = values;
    match registry.grade(id, Scores::new(company, report, presentation)) {
        Ok(mean) => console.say(format!("Student {} final grade: {:.2}.", id, mean))?,
        Err(err) => console.say(refusal(&err))?,
    }
    Ok(false)
}
