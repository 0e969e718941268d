use thiserror::Error;

use berth_model::{ClassName, MethodName, TargetName};

use crate::class::InvocationError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no deployment method found in {class}; is at least one deployment declared?")]
    NoDeploymentFound { class: ClassName },

    #[error("more than one '{target}' deployment method found in {class} ({count} candidates)")]
    AmbiguousTargetedDeployment {
        class: ClassName,
        target: TargetName,
        count: usize,
    },

    #[error("more than one default deployment method found in {class} ({count} candidates)")]
    AmbiguousDefaultDeployment { class: ClassName, count: usize },

    #[error(
        "no deployment method for target '{target}' and no default deployment in {class}; \
         is a deployment tagged for this container?"
    )]
    NoMatchingDeployment { class: ClassName, target: TargetName },

    #[error("cannot find any container adapter for the current run")]
    NoActiveTargetResolvable,

    #[error("deployment method '{method}' in {class} failed: {source}")]
    DeploymentInvocationFailed {
        class: ClassName,
        method: MethodName,
        #[source]
        source: InvocationError,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;
