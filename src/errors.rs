//! Top-level error taxonomy.
//!
//! Every failure bubbles up to the console orchestrator, which is the single
//! point that formats errors and sets the process exit code. Nothing in this
//! crate retries.

use std::path::PathBuf;
use thiserror::Error;

use crate::gates::GateError;

#[derive(Error, Debug)]
pub enum DbctlError {
    /// Configuration file missing or unreadable. Fatal to the process.
    #[error("Cannot open configuration file: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configured backend identifier maps to no registered gate, or the
    /// gate failed to construct.
    #[error("Unknown database backend \"{identifier}\". Please check {} configuration file.", config_path.display())]
    BackendResolution {
        identifier: String,
        config_path: PathBuf,
        #[source]
        source: Option<GateError>,
    },

    /// User supplied a command the resolved gate does not declare. Carries the
    /// original, untranslated command string.
    #[error("The parameter \"{command}\" is an unknown command.\n\nHint: Try with no parameters first, perhaps?")]
    UnknownCommand { command: String },

    /// A gate operation failed. Propagated unchanged from the backend.
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for console operations.
pub type DbctlResult<T> = Result<T, DbctlError>;
