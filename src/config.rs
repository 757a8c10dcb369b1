//! System configuration loading.
//!
//! The configuration source is a plain-text file of `key = value` lines
//! (by default `/etc/rhn/rhn.conf`). Only keys carrying the reserved `db_`
//! prefix are retained; everything else in the file belongs to other tools
//! and is ignored here.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{DbctlError, DbctlResult};

/// Reserved key namespace. Keys outside it are skipped on load.
pub const RESERVED_PREFIX: &str = "db_";

/// Key selecting the backend gate.
pub const DB_BACKEND: &str = "db_backend";

/// Well-known system location of the configuration file.
pub const DEFAULT_CONFIG: &str = "/etc/rhn/rhn.conf";

/// Identifier used when the configuration names no backend.
pub const UNKNOWN_BACKEND: &str = "unknown";

/// Immutable database configuration, built once per process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, String>,
}

impl Config {
    /// Read the configuration file at `path`.
    ///
    /// A missing or unreadable file is fatal. Malformed lines inside a
    /// readable file are not: they are skipped silently, matching the
    /// tolerant format shared with the other consumers of this file.
    pub fn load(path: &Path) -> DbctlResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| DbctlError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;
        let config = Self::parse(content.lines());
        debug!("loaded {} db_* keys from {}", config.len(), path.display());
        Ok(config)
    }

    /// Parse configuration lines into the reserved-prefix mapping.
    ///
    /// Each line has all whitespace stripped, then splits on the first `=`.
    /// Lines that do not split, or whose key lacks the reserved prefix, are
    /// skipped. Duplicate keys keep the last value seen.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut values = BTreeMap::new();
        for line in lines {
            let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if let Some((key, value)) = stripped.split_once('=') {
                if key.starts_with(RESERVED_PREFIX) {
                    values.insert(key.to_string(), value.to_string());
                }
            }
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Backend identifier from the `db_backend` key, or `"unknown"`.
    pub fn backend_identifier(&self) -> &str {
        self.get(DB_BACKEND).unwrap_or(UNKNOWN_BACKEND)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
