//! Oracle gate.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::cli::output;
use crate::config::Config;
use crate::gates::{Gate, GateError, GateResult};

type Op = fn(&OracleGate) -> GateResult<()>;

const COMMANDS: &[(&str, &str, Op)] = &[
    ("do_clear_db", "Clear the database", OracleGate::clear_db),
    ("do_db_start", "Start the database", OracleGate::db_start),
    ("do_db_status", "Show database status", OracleGate::db_status),
    ("do_db_stop", "Stop the database", OracleGate::db_stop),
    (
        "do_listener_status",
        "Show SQL*Net listener status",
        OracleGate::listener_status,
    ),
];

#[derive(Debug)]
pub struct OracleGate {
    sid: Option<String>,
    user: Option<String>,
}

impl OracleGate {
    pub fn create(config: &Config) -> GateResult<Box<dyn Gate>> {
        Ok(Box::new(Self {
            sid: config.get("db_name").map(str::to_string),
            user: config.get("db_user").map(str::to_string),
        }))
    }

    fn sid(&self) -> GateResult<&str> {
        self.sid
            .as_deref()
            .ok_or_else(|| GateError::OperationFailed("db_name is not configured".to_string()))
    }

    fn db_start(&self) -> GateResult<()> {
        info!("starting oracle instance");
        output::action("Starting", "Oracle database");
        Ok(())
    }

    fn db_stop(&self) -> GateResult<()> {
        info!("stopping oracle instance");
        output::action("Stopping", "Oracle database");
        Ok(())
    }

    fn db_status(&self) -> GateResult<()> {
        debug!(sid = ?self.sid, user = ?self.user, "status request");
        output::info("Oracle database is online");
        Ok(())
    }

    fn clear_db(&self) -> GateResult<()> {
        let sid = self.sid()?;
        info!(sid, "clearing database");
        output::action("Clearing", sid);
        Ok(())
    }

    fn listener_status(&self) -> GateResult<()> {
        output::info("SQL*Net listener is running");
        Ok(())
    }
}

impl Gate for OracleGate {
    fn name(&self) -> &str {
        "oracle"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_oracle_gate_then_declares_listener_status() {
        let gate = OracleGate::create(&Config::parse(["db_name = susemanager"])).unwrap();
        assert!(gate.commands().contains_key("do_listener_status"));
    }

    #[test]
    fn given_undeclared_operation_when_invoke_then_names_gate_and_operation() {
        let gate = OracleGate::create(&Config::default()).unwrap();
        let err = gate.invoke("do_space_overview").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("oracle"));
        assert!(message.contains("do_space_overview"));
    }
}
