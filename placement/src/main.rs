//! Internship placement console.
//!
//! Loads offers and students from two flat files, runs the interactive
//! administrator / student / jury menus and writes both files back after
//! each role session.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use placement::check::check_data;
use placement::exit_codes;
use placement::io::error::PersistError;
use placement::io::init::{InitOptions, init_data};
use placement::logging;
use placement::session::console::Console;
use placement::session::run_session;
use placement::workspace::Workspace;

#[derive(Parser)]
#[command(
    name = "placement",
    version,
    about = "Internship offers, applications, assignments and grades"
)]
struct Cli {
    /// Directory holding `placement.toml` and the data directory.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive role menus (default).
    Session,
    /// Create `placement.toml` and empty data files if missing.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Load the data files and report invariant violations.
    Check,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Session) {
        Command::Session => cmd_session(&cli.root),
        Command::Init { force } => cmd_init(&cli.root, force),
        Command::Check => cmd_check(&cli.root),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PersistError>() {
        Some(PersistError::Save { .. }) => exit_codes::SAVE_FAILED,
        _ => exit_codes::INVALID,
    }
}

fn cmd_session(root: &Path) -> Result<i32> {
    let mut workspace = Workspace::open(root)?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_session(&mut console, &mut workspace)?;
    Ok(exit_codes::OK)
}

fn cmd_init(root: &Path, force: bool) -> Result<i32> {
    let paths = init_data(root, &InitOptions { force })?;
    println!("initialized {}", paths.data_dir.display());
    Ok(exit_codes::OK)
}

fn cmd_check(root: &Path) -> Result<i32> {
    let outcome = check_data(root)?;
    println!(
        "{} offer(s), {} student(s)",
        outcome.offers, outcome.students
    );
    if outcome.is_clean() {
        return Ok(exit_codes::OK);
    }
    for violation in &outcome.violations {
        println!("- {}", violation);
    }
    Ok(exit_codes::INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_session_in_current_dir() {
        let cli = Cli::parse_from(["placement"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn parse_init_force_with_root() {
        let cli = Cli::parse_from(["placement", "--root", "/tmp/data", "init", "--force"]);
        assert!(matches!(cli.command, Some(Command::Init { force: true })));
        assert_eq!(cli.root, PathBuf::from("/tmp/data"));
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["placement", "check"]);
        assert!(matches!(cli.command, Some(Command::Check)));
    }

    #[test]
    fn save_errors_map_to_save_failed() {
        let err = anyhow::Error::new(PersistError::Save {
            path: PathBuf::from("DATA/offrestage.txt"),
            source: io::Error::other("disk full"),
        })
        .context("save data under DATA");
        assert_eq!(exit_code_for(&err), exit_codes::SAVE_FAILED);

        let err = anyhow::anyhow!("load placement.toml");
        assert_eq!(exit_code_for(&err), exit_codes::INVALID);
    }
}
