//! Maps the active container adapter signal to a [`TargetName`].
//!
//! The signal is the package/module path of the adapter that runs the current test class.
//! Where it comes from is up to the injected [`TargetResolver`].
mod resolver;
pub use resolver::{AdapterRegistry, DEFAULT_SIGNAL_ENV, EnvSignal, FixedSignal, TargetResolver};

use berth_model::TargetName;
use tracing::{info, warn};

/// Resolve a target from an adapter signal.
///
/// Known targets are scanned in declaration order and the first one whose fragment
/// occurs in the (lowercased) signal wins. An unmatched signal falls back to
/// [`TargetName::None`] so that only default deployments are eligible.
pub fn resolve_target(signal: &str) -> TargetName {
    match TargetName::matching(signal) {
        Some(target) => {
            info!(signal, "using '{}' as a target container", target);
            target
        }
        None => {
            warn!(signal, "no matching container found, falling back to default deployment");
            TargetName::None
        }
    }
}
