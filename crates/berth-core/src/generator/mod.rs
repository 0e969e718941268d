//! Deployment generator plugged into the host test runner.
//!
//! For every test class the generator:
//! 1. enumerates and groups the class's deployment methods;
//! 2. reads the active adapter signal from the injected [`TargetResolver`];
//! 3. maps it to a [`TargetName`] and applies [`select`];
//! 4. invokes the chosen method and wraps the archive into a [`DeploymentDescription`].
mod config;
pub use config::{DEFAULT_DEPLOYMENT_NAME, GeneratorConfig};

mod description;
pub use description::DeploymentDescription;

use berth_model::{Candidate, TargetName};
use tracing::{debug, instrument, trace};

use crate::{
    class::DeploymentClass,
    error::{CoreError, CoreResult},
    registry::{TargetResolver, resolve_target},
    selector::{group_candidates, select},
};

/// Chooses and produces the deployment of a test class for the active container.
///
/// Holds no per-call state: the signal is re-read on every call.
#[derive(Debug, Clone)]
pub struct DeploymentGenerator<R> {
    resolver: R,
    cfg: GeneratorConfig,
}

impl<R: TargetResolver> DeploymentGenerator<R> {
    /// Create a generator with the default configuration.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            cfg: GeneratorConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, cfg: GeneratorConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.cfg
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Target of the adapter active right now.
    ///
    /// Fails with [`CoreError::NoActiveTargetResolvable`] when the resolver reports no adapter.
    pub fn active_target(&self) -> CoreResult<TargetName> {
        let signal = self
            .resolver
            .active_signal()
            .ok_or(CoreError::NoActiveTargetResolvable)?;
        trace!(resolver = self.resolver.name(), %signal, "active adapter signal");
        Ok(resolve_target(&signal))
    }

    /// Pick the deployment method for `class` without invoking it.
    #[instrument(level = "debug", skip(self, class), fields(class = %class.name()))]
    pub fn choose<C: DeploymentClass>(&self, class: &C) -> CoreResult<Candidate> {
        let group = group_candidates(class.candidates());
        if group.is_empty() {
            return Err(CoreError::NoDeploymentFound {
                class: class.name().to_string(),
            });
        }
        trace!(candidates = group.len(), "candidates grouped");

        let active = self.active_target()?;
        let chosen = select(class.name(), &group, active)?;
        debug!(method = %chosen.method, tag = %chosen.target, %active, "deployment method chosen");
        Ok(chosen.clone())
    }

    /// Produce the deployment for `class`.
    ///
    /// The returned list always holds exactly one description.
    #[instrument(level = "debug", skip(self, class), fields(class = %class.name()))]
    pub fn generate<C: DeploymentClass>(
        &self,
        class: &C,
    ) -> CoreResult<Vec<DeploymentDescription<C::Archive>>> {
        let chosen = self.choose(class)?;

        let archive =
            class
                .invoke(&chosen.method)
                .map_err(|source| CoreError::DeploymentInvocationFailed {
                    class: class.name().to_string(),
                    method: chosen.method.clone(),
                    source,
                })?;
        debug!(method = %chosen.method, "deployment method invoked successfully");

        Ok(vec![DeploymentDescription {
            name: self.cfg.deployment_name.clone(),
            method: chosen.method,
            target: chosen.target,
            archive,
        }])
    }
}
