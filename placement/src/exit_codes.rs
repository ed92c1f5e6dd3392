//! Stable exit codes for placement CLI commands.

/// Command succeeded (or `placement check` found no violation).
pub const OK: i32 = 0;
/// Data could not be loaded, config is invalid, or `placement check` found
/// invariant violations.
pub const INVALID: i32 = 1;
/// The session ended but the data files could not be written back.
pub const SAVE_FAILED: i32 = 2;
