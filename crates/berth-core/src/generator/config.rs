use serde::{Deserialize, Serialize};

/// Name given to the generated deployment when none is configured.
pub const DEFAULT_DEPLOYMENT_NAME: &str = "On-the-fly deployment";

/// Settings for [`DeploymentGenerator`](crate::generator::DeploymentGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name attached to the produced deployment description.
    pub deployment_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            deployment_name: DEFAULT_DEPLOYMENT_NAME.to_string(),
        }
    }
}
