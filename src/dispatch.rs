//! Command dispatch: one user command in, one gate operation invoked.

use tracing::debug;

use crate::errors::{DbctlError, DbctlResult};
use crate::gates::Gate;
use crate::translate::to_backend_form;

/// Execute `user_command` against `gate`.
///
/// The command is translated to backend form and checked against the gate's
/// declared command set before anything runs. An undeclared command raises
/// [`DbctlError::UnknownCommand`] carrying the original user string; errors
/// from the operation itself propagate unchanged. No I/O happens here.
pub fn execute(gate: &dyn Gate, user_command: &str) -> DbctlResult<()> {
    let operation = to_backend_form(user_command);
    debug!(%user_command, %operation, "dispatching");

    if !gate.commands().contains_key(operation.as_str()) {
        return Err(DbctlError::UnknownCommand {
            command: user_command.to_string(),
        });
    }
    gate.invoke(&operation)?;
    Ok(())
}
