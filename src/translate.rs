//! Command-name translation between the CLI surface and gate operations.
//!
//! User form: lowercase, hyphenated, unprefixed (`clear-db`).
//! Backend form: `do_`-prefixed, underscored (`do_clear_db`).
//!
//! The two directions are deliberately separate functions. Deciding direction
//! from prefix presence alone mis-translates a user command that happens to
//! start with the prefix pattern, so neither function guesses.

/// Prefix carried by every gate operation identifier.
pub const OPERATION_PREFIX: &str = "do_";

/// Translate a CLI command name into its gate operation identifier.
///
/// Input already in backend form is returned unchanged.
pub fn to_backend_form(command: &str) -> String {
    if command.starts_with(OPERATION_PREFIX) {
        command.to_string()
    } else {
        format!("{}{}", OPERATION_PREFIX, command.replace('-', "_"))
    }
}

/// Translate a gate operation identifier into its CLI command name.
pub fn to_user_form(operation: &str) -> String {
    operation
        .strip_prefix(OPERATION_PREFIX)
        .unwrap_or(operation)
        .replace('_', "-")
}
