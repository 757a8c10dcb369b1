//! Process exit codes.

/// Successful termination
pub const OK: i32 = 0;

/// Any resolution or dispatch failure
pub const GENERAL: i32 = 1;
