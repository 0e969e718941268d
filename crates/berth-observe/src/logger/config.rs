use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::object::{LoggerFormat, LoggerLevel};

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. "info", "berth_core=debug,warn").
    pub level: LoggerLevel,
    /// Include the event target (module path) in each line.
    pub with_targets: bool,
    /// Colored output, honoured only when stdout is a terminal.
    pub use_color: bool,
    /// Route output through the libtest capture instead of stdout.
    pub test_writer: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
            test_writer: false,
        }
    }
}

impl LoggerConfig {
    /// Configuration for logging from inside `cargo test`: captured, uncolored, verbose for berth crates.
    pub fn for_tests() -> Self {
        Self {
            format: LoggerFormat::Compact,
            level: LoggerLevel::new("berth_core=trace,info").unwrap_or_default(),
            use_color: false,
            test_writer: true,
            ..Default::default()
        }
    }

    /// Color is used only if enabled, not writing to the test capture, and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && !self.test_writer && std::io::stdout().is_terminal()
    }
}
