//! PostgreSQL gate.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::cli::output;
use crate::config::Config;
use crate::gates::{Gate, GateError, GateResult};

type Op = fn(&PostgresGate) -> GateResult<()>;

/// Single source of truth for the declared command set. `commands()` and
/// `invoke()` both read this table.
const COMMANDS: &[(&str, &str, Op)] = &[
    ("do_clear_db", "Clear the database", PostgresGate::clear_db),
    ("do_db_start", "Start the database", PostgresGate::db_start),
    ("do_db_status", "Show database status", PostgresGate::db_status),
    ("do_db_stop", "Stop the database", PostgresGate::db_stop),
    (
        "do_space_overview",
        "Show tablespace usage",
        PostgresGate::space_overview,
    ),
];

#[derive(Debug)]
pub struct PostgresGate {
    database: Option<String>,
    user: Option<String>,
}

impl PostgresGate {
    pub fn create(config: &Config) -> GateResult<Box<dyn Gate>> {
        Ok(Box::new(Self {
            database: config.get("db_name").map(str::to_string),
            user: config.get("db_user").map(str::to_string),
        }))
    }

    /// Name of the configured database, required by destructive operations.
    fn database(&self) -> GateResult<&str> {
        self.database
            .as_deref()
            .ok_or_else(|| GateError::OperationFailed("db_name is not configured".to_string()))
    }

    fn db_start(&self) -> GateResult<()> {
        info!("starting postgresql instance");
        output::action("Starting", "PostgreSQL database");
        Ok(())
    }

    fn db_stop(&self) -> GateResult<()> {
        info!("stopping postgresql instance");
        output::action("Stopping", "PostgreSQL database");
        Ok(())
    }

    fn db_status(&self) -> GateResult<()> {
        debug!(database = ?self.database, user = ?self.user, "status request");
        output::info("PostgreSQL database is online");
        Ok(())
    }

    fn clear_db(&self) -> GateResult<()> {
        let database = self.database()?;
        info!(database, "clearing database");
        output::action("Clearing", database);
        Ok(())
    }

    fn space_overview(&self) -> GateResult<()> {
        let database = self.database()?;
        output::info(&format!("Tablespace usage for {database}:"));
        output::detail("pg_default");
        Ok(())
    }
}

impl Gate for PostgresGate {
    fn name(&self) -> &str {
        "postgresql"
    }

    fn commands(&self) -> BTreeMap<&'static str, &'static str> {
        COMMANDS
            .iter()
            .map(|(operation, description, _)| (*operation, *description))
            .collect()
    }

    fn invoke(&self, operation: &str) -> GateResult<()> {
        let (_, _, handler) = COMMANDS
            .iter()
            .find(|(candidate, _, _)| *candidate == operation)
            .ok_or_else(|| GateError::UndeclaredOperation {
                gate: self.name().to_string(),
                operation: operation.to_string(),
            })?;
        handler(self)
    }
}
