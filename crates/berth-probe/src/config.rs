use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use berth_core::GeneratorConfig;
use berth_observe::LoggerConfig;

/// Environment variable pointing at an optional JSON config file.
pub const CONFIG_ENV: &str = "BERTH_CONFIG";

/// Probe settings: logger plus generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub logger: LoggerConfig,
    pub generator: GeneratorConfig,
}

impl ProbeConfig {
    /// Load from the file named by `BERTH_CONFIG`, or defaults when unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading probe config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing probe config {}", path.display()))
    }
}
