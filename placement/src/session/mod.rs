//! Interactive role sessions: administrator, student and jury menus.
//!
//! The menus only prompt, call into [`Registry`] and print the outcome. Both
//! data files are rewritten each time a role session ends.

mod admin;
pub mod console;
mod jury;
pub mod render;
mod student;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::registry::Registry;
use crate::workspace::Workspace;
use console::Console;

/// Who is using the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Student,
    Jury,
}

impl Role {
    fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Administrator),
            2 => Some(Self::Student),
            3 => Some(Self::Jury),
            _ => None,
        }
    }
}

const QUIT: u32 = 4;

/// Run the role-selection loop until the user quits or input ends.
///
/// After each role session the registry is written back; a failed save
/// aborts the loop with the underlying [`crate::io::error::PersistError`].
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    workspace: &mut Workspace,
) -> Result<()> {
    loop {
        let Some(choice) = choose(
            console,
            "Who are you?",
            &["1. Administrator", "2. Student", "3. Jury", "4. Quit"],
        )?
        else {
            break;
        };
        if choice == QUIT {
            break;
        }
        let Some(role) = Role::from_choice(choice) else {
            console.say("Invalid choice.")?;
            continue;
        };

        debug!(?role, "role session started");
        run_role(console, &mut workspace.registry, role).context("console i/o")?;
        workspace
            .save()
            .with_context(|| format!("save data under {}", workspace.paths.data_dir.display()))?;
        info!(?role, "role session ended, data saved");
        console.say("Data saved.")?;
    }
    Ok(())
}

fn run_role<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    role: Role,
) -> io::Result<()> {
    match role {
        Role::Administrator => admin::run(console, registry),
        Role::Student => student::run(console, registry),
        Role::Jury => jury::run(console, registry),
    }
}

/// Print a titled menu and read the numeric choice.
fn choose<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    options: &[&str],
) -> io::Result<Option<u32>> {
    console.say("")?;
    console.say(title)?;
    for option in options {
        console.say(format!("  {}", option))?;
    }
    console.ask("Your choice")
}

fn print_lines<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    lines: impl IntoIterator<Item = String>,
) -> io::Result<()> {
    for line in lines {
        console.say(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestData;

    fn run_script(data: &TestData, script: &str) -> (Workspace, String) {
        let mut workspace = Workspace::open(data.root()).expect("open");
        let mut console = Console::new(script.as_bytes(), Vec::new());
        run_session(&mut console, &mut workspace).expect("session");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        (workspace, output)
    }

    #[test]
    fn quit_without_role_does_not_save() {
        let data = TestData::new("1500 12 0 0\n", "42 -1 0.00\n").expect("data");
        let (_, output) = run_script(&data, "4\n");
        assert!(!output.contains("Data saved."));
    }

    #[test]
    fn invalid_role_reprompts() {
        let data = TestData::new("", "").expect("data");
        let (_, output) = run_script(&data, "7\n4\n");
        assert!(output.contains("Invalid choice."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let data = TestData::new("", "").expect("data");
        let (_, output) = run_script(&data, "1\n");
        assert!(output.contains("Data saved."));
    }

    #[test]
    fn save_failure_is_reported_as_persist_error() {
        let data = TestData::new("", "42 -1 0.00\n").expect("data");
        let mut workspace = Workspace::open(data.root()).expect("open");
        workspace.paths.offers_path = data.root().join("blocked");
        std::fs::create_dir_all(workspace.paths.offers_path.join("inner")).expect("mkdir");

        let mut console = Console::new("3\n0\n".as_bytes(), Vec::new());
        let err = run_session(&mut console, &mut workspace).expect_err("save fails");
        assert!(
            err.downcast_ref::<crate::io::error::PersistError>()
                .is_some()
        );
    }
}
