//! Deterministic, pure logic for the placement registry.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! stores and return deterministic outcomes suitable for tests.

pub mod compact;
pub mod error;
pub mod invariants;
pub mod offers;
pub mod registry;
pub mod students;
pub mod types;
