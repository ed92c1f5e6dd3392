//! Internship placement registry.
//!
//! Tracks internship offers, student applications, assignment of students to
//! offers and final grading, persisted in two flat text files. The crate keeps
//! a strict separation:
//!
//! - **[`core`]**: Offer and student stores, the operations that mutate them
//!   and the invariants tying them together. No I/O.
//! - **[`io`]**: Config, data-file parsing and writing, scaffolding.
//!
//! Orchestration modules ([`workspace`], [`check`], [`session`]) combine the
//! two to implement CLI commands and the interactive role menus.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod workspace;
