//! Console orchestrator: load configuration, resolve the gate, then either
//! print the command index or execute exactly one command.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::config::{Config, DEFAULT_CONFIG};
use crate::dispatch;
use crate::errors::DbctlResult;
use crate::gates::{Gate, GateRegistry};
use crate::usage;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub struct Console {
    config_path: PathBuf,
    config: Config,
    gate: Box<dyn Gate>,
}

impl Console {
    /// Load the configuration and resolve the backend gate.
    ///
    /// Any failure here is fatal: no partially constructed console is
    /// usable. `config_path` defaults to the well-known system location.
    #[instrument(skip_all)]
    pub fn new(config_path: Option<PathBuf>) -> DbctlResult<Self> {
        let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        debug!("using configuration file {}", config_path.display());

        let config = Config::load(&config_path)?;
        let gate = GateRegistry::with_builtin().resolve(&config, &config_path)?;

        Ok(Self {
            config_path,
            config,
            gate,
        })
    }

    /// Version and copyright header, printed to the diagnostic stream before
    /// the command index and before any fatal error.
    pub fn usage_header() {
        eprintln!("Database Control. Version {VERSION}");
        eprintln!("Copyright (c) by the dbctl authors\n");
    }

    /// Print the header and the sorted, padded table of available commands.
    pub fn usage(&self) {
        Self::usage_header();
        eprintln!(
            "Available commands on {} database:",
            title_case(self.gate.name())
        );

        let entries = usage::render(self.gate.as_ref());
        let width = usage::column_width(&entries);
        for (command, description) in &entries {
            eprintln!("\t{command:<width$}\t{description}");
        }
        eprintln!();
    }

    /// Execute one command against the resolved gate.
    pub fn execute(&self, command: &str) -> DbctlResult<()> {
        dispatch::execute(self.gate.as_ref(), command)
    }

    pub fn gate(&self) -> &dyn Gate {
        self.gate.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
