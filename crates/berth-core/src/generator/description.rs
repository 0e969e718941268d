use std::fmt;

use berth_model::{MethodName, TargetName};

/// Deployment handed back to the host: the archive plus where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentDescription<A> {
    /// Configured deployment name.
    pub name: String,
    /// Method that produced the archive.
    pub method: MethodName,
    /// Tag of that method (`None` for a default deployment).
    pub target: TargetName,
    /// Produced archive.
    pub archive: A,
}

impl<A> fmt::Display for DeploymentDescription<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, target={})", self.name, self.method, self.target)
    }
}
