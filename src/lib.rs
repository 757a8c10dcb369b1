pub mod cli;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod errors;
pub mod exitcode;
pub mod gates;
pub mod translate;
pub mod usage;
pub mod util;

pub use config::Config;
pub use console::Console;
pub use errors::{DbctlError, DbctlResult};
pub use gates::{Gate, GateRegistry};
