//! Backend gates and their resolution.
//!
//! A gate is a pluggable capability provider for one database system. Each
//! gate declares its operations as a single static table of
//! `(identifier, description, handler)` rows, so the declared command set and
//! the invocable set cannot diverge.
//!
//! Gates are located through [`GateRegistry`], an explicit mapping from the
//! configured backend identifier to a constructor. New backends register an
//! identifier and a factory; nothing here needs to change.

pub mod oracle;
pub mod postgres;

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::errors::{DbctlError, DbctlResult};

/// Errors raised inside a gate: construction or operation failures.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("{0}")]
    OperationFailed(String),

    #[error("gate \"{gate}\" does not declare operation \"{operation}\"")]
    UndeclaredOperation { gate: String, operation: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// One database backend, read-only after construction.
///
/// Invariant: `invoke` succeeds only for identifiers present in `commands()`,
/// and every identifier in `commands()` is invocable.
pub trait Gate: std::fmt::Debug {
    /// Display name of the database system, e.g. `"postgresql"`.
    fn name(&self) -> &str;

    /// Declared operations: identifier in backend form mapped to a
    /// human-readable description.
    fn commands(&self) -> BTreeMap<&'static str, &'static str>;

    /// Run one declared operation, identified in backend form.
    fn invoke(&self, operation: &str) -> GateResult<()>;
}

/// Constructor for a gate, given the loaded configuration.
pub type GateFactory = fn(&Config) -> GateResult<Box<dyn Gate>>;

/// Explicit identifier-to-constructor mapping for compiled-in gates.
pub struct GateRegistry {
    factories: BTreeMap<&'static str, GateFactory>,
}

impl GateRegistry {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry holding every gate this binary ships with.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("postgresql", postgres::PostgresGate::create);
        registry.register("oracle", oracle::OracleGate::create);
        registry
    }

    pub fn register(&mut self, identifier: &'static str, factory: GateFactory) {
        self.factories.insert(identifier, factory);
    }

    /// Resolve the configured backend identifier to a live gate.
    ///
    /// `config_path` is only reported back to the user so the failure names
    /// the file to fix.
    pub fn resolve(&self, config: &Config, config_path: &Path) -> DbctlResult<Box<dyn Gate>> {
        let identifier = config.backend_identifier();
        debug!("resolving backend gate for identifier {:?}", identifier);

        let factory =
            self.factories
                .get(identifier)
                .ok_or_else(|| DbctlError::BackendResolution {
                    identifier: identifier.to_string(),
                    config_path: config_path.to_path_buf(),
                    source: None,
                })?;

        factory(config).map_err(|err| DbctlError::BackendResolution {
            identifier: identifier.to_string(),
            config_path: config_path.to_path_buf(),
            source: Some(err),
        })
    }
}

impl Default for GateRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
